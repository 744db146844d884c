use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use toolbelt::tools::password::PasswordOptions;
use toolbelt::tools::status::{StatusCategory, StatusEntry};
use toolbelt::tools::{case, epoch, gzip, json as json_tool, jwt, password, status};

use crate::cli_commands::{GzipCommands, JsonCommands, TimeCommands};

pub(super) fn handle_case(text: &str, json: bool) -> Result<()> {
    let conversions = case::convert_all(text);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&conversions).context("serialize conversions")?
        );
        return Ok(());
    }
    println!("camelCase         {}", conversions.camel);
    println!("PascalCase        {}", conversions.pascal);
    println!("snake_case        {}", conversions.snake);
    println!("kebab-case        {}", conversions.kebab);
    println!("CONSTANT_CASE     {}", conversions.constant);
    println!("Title Case        {}", conversions.title);
    println!("Sentence case     {}", conversions.sentence);
    println!("lowercase         {}", conversions.lower);
    println!("UPPERCASE         {}", conversions.upper);
    println!("aLtErNaTiNg CaSe  {}", conversions.alternating);
    println!("iNvErSe CaSe      {}", conversions.inverse);
    Ok(())
}

pub(super) fn handle_time(command: TimeCommands) -> Result<()> {
    match command {
        TimeCommands::Now { json } => {
            let now = epoch::now()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&now).context("serialize time json")?
                );
            } else {
                println!("seconds: {}", now.unix_seconds);
                println!("millis:  {}", now.unix_millis);
                println!("rfc3339: {}", now.rfc3339);
            }
        }
        TimeCommands::ToDate { epoch: value, json } => {
            print_date_report(&epoch::epoch_to_date(value)?, json)?;
        }
        TimeCommands::ToEpoch { date, json } => {
            print_date_report(&epoch::date_to_epoch(&date)?, json)?;
        }
    }
    Ok(())
}

fn print_date_report(report: &epoch::DateReport, json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(report).context("serialize date json")?
        );
        return Ok(());
    }
    println!("seconds:  {}", report.unix_seconds);
    println!("millis:   {}", report.unix_millis);
    println!("rfc3339:  {}", report.rfc3339);
    println!("utc:      {}", report.utc);
    println!("relative: {}", report.relative);
    Ok(())
}

pub(super) fn handle_json(command: JsonCommands) -> Result<()> {
    match command {
        JsonCommands::Format { file, indent } => {
            let input = read_input(file.as_deref())?;
            println!("{}", json_tool::format(&input, indent)?);
        }
        JsonCommands::Minify { file } => {
            let input = read_input(file.as_deref())?;
            println!("{}", json_tool::minify(&input)?);
        }
        JsonCommands::Validate { file } => {
            let input = read_input(file.as_deref())?;
            match json_tool::validate(&input) {
                Ok(()) => println!("valid JSON"),
                Err(message) => anyhow::bail!("invalid JSON: {}", message),
            }
        }
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("read {}", path.display())),
        None => std::io::read_to_string(std::io::stdin()).context("read stdin"),
    }
}

pub(super) fn handle_password(
    length: usize,
    no_uppercase: bool,
    no_lowercase: bool,
    no_numbers: bool,
    symbols: bool,
    exclude_similar: bool,
) -> Result<()> {
    let options = PasswordOptions {
        length,
        uppercase: !no_uppercase,
        lowercase: !no_lowercase,
        numbers: !no_numbers,
        symbols,
        exclude_similar,
    };
    let (generated, strength) = password::generate(&options)?;
    println!("{}", generated);
    println!("strength: {}", strength.as_str());
    Ok(())
}

pub(super) fn handle_jwt(token: &str, json: bool) -> Result<()> {
    let decoded = jwt::decode(token)?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&decoded).context("serialize jwt json")?
        );
        return Ok(());
    }
    println!(
        "header:\n{}",
        serde_json::to_string_pretty(&decoded.header).context("serialize jwt header")?
    );
    println!(
        "payload:\n{}",
        serde_json::to_string_pretty(&decoded.payload).context("serialize jwt payload")?
    );
    for (claim, formatted) in &decoded.times {
        println!("{}: {}", claim, formatted);
    }
    Ok(())
}

pub(super) fn handle_gzip(command: GzipCommands) -> Result<()> {
    match command {
        GzipCommands::Compress { text, file, json } => {
            let input = match (text, file) {
                (Some(text), None) => text,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("read {}", path.display()))?,
                _ => anyhow::bail!("pass exactly one of TEXT or --file"),
            };
            let report = gzip::compress_to_base64(&input)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).context("serialize gzip json")?
                );
            } else {
                println!("{}", report.encoded);
                println!(
                    "{} bytes -> {} bytes ({:.1}%)",
                    report.original_bytes, report.compressed_bytes, report.ratio_percent
                );
            }
        }
        GzipCommands::Decompress { text } => {
            println!("{}", gzip::decompress_from_base64(&text)?);
        }
    }
    Ok(())
}

pub(super) fn handle_status(query: Option<&str>, json: bool) -> Result<()> {
    let entries: Vec<&StatusEntry> = match query {
        None => status::STATUS_TABLE.iter().collect(),
        Some(q) => {
            if let Ok(code) = q.trim().parse::<u16>() {
                status::lookup(code).into_iter().collect()
            } else if let Some(category) = StatusCategory::from_name(q) {
                status::by_category(category)
            } else {
                status::search(q)
            }
        }
    };

    if entries.is_empty() {
        anyhow::bail!("no status codes match {:?}", query.unwrap_or_default());
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).context("serialize status json")?
        );
        return Ok(());
    }
    for entry in entries {
        println!("{} {} [{}]", entry.code, entry.reason, entry.category.as_str());
        println!("    {}", entry.description);
    }
    Ok(())
}
