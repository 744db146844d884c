mod tools;

pub(crate) use self::tools::{CurlCommands, GzipCommands, JsonCommands, TimeCommands};

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Compare two text files line by line (positional, no resync)
    Diff {
        left: PathBuf,
        right: PathBuf,
        /// Collapse whitespace runs before comparing
        #[arg(long)]
        ignore_whitespace: bool,
        /// Lower-case both inputs before comparing
        #[arg(long)]
        ignore_case: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Translate between cURL commands and structured requests
    Curl {
        #[command(subcommand)]
        command: CurlCommands,
    },

    /// Execute an HTTP request given a cURL command, a URL, or flags
    Http {
        /// cURL command or bare URL (quote the whole thing)
        request: Option<String>,
        /// Target URL (overrides the one in REQUEST)
        #[arg(long)]
        url: Option<String>,
        /// HTTP method
        #[arg(short = 'X', long)]
        method: Option<String>,
        /// Header as "Name: value" (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
        /// Request body
        #[arg(short = 'd', long)]
        data: Option<String>,
        /// Timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout: u64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Render text in every common naming convention
    Case {
        text: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Unix epoch / RFC 3339 conversions
    Time {
        #[command(subcommand)]
        command: TimeCommands,
    },

    /// Format, minify, or validate JSON
    Json {
        #[command(subcommand)]
        command: JsonCommands,
    },

    /// Generate a random password
    Password {
        #[arg(long, default_value_t = 16)]
        length: usize,
        /// Leave out A-Z
        #[arg(long)]
        no_uppercase: bool,
        /// Leave out a-z
        #[arg(long)]
        no_lowercase: bool,
        /// Leave out 0-9
        #[arg(long)]
        no_numbers: bool,
        /// Include punctuation characters
        #[arg(long)]
        symbols: bool,
        /// Drop characters that read alike (il1Lo0O)
        #[arg(long)]
        exclude_similar: bool,
    },

    /// Decode a JWT without verifying its signature
    Jwt {
        token: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Gzip text to base64, or decompress base64 back to text
    Gzip {
        #[command(subcommand)]
        command: GzipCommands,
    },

    /// Look up HTTP status codes
    Status {
        /// A code (404), a category (client-error), or a search term
        query: Option<String>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}
