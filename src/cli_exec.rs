use anyhow::Result;

use crate::cli_commands::Commands;

mod http;
mod text;
mod tools;

pub(crate) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Diff {
            left,
            right,
            ignore_whitespace,
            ignore_case,
            json,
        } => text::handle_diff(&left, &right, ignore_whitespace, ignore_case, json),
        Commands::Curl { command } => text::handle_curl(command),
        Commands::Http {
            request,
            url,
            method,
            headers,
            data,
            timeout,
            json,
        } => http::handle_http(request, url, method, headers, data, timeout, json),
        Commands::Case { text, json } => tools::handle_case(&text, json),
        Commands::Time { command } => tools::handle_time(command),
        Commands::Json { command } => tools::handle_json(command),
        Commands::Password {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            symbols,
            exclude_similar,
        } => tools::handle_password(
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            symbols,
            exclude_similar,
        ),
        Commands::Jwt { token, json } => tools::handle_jwt(&token, json),
        Commands::Gzip { command } => tools::handle_gzip(command),
        Commands::Status { query, json } => tools::handle_status(query.as_deref(), json),
    }
}
