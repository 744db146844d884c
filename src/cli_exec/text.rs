use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use toolbelt::curl::{self, Method, RequestDescriptor};
use toolbelt::diff::{self, DiffOptions, DiffSummary, LineKind};

use crate::cli_commands::CurlCommands;

pub(super) fn handle_diff(
    left: &Path,
    right: &Path,
    ignore_whitespace: bool,
    ignore_case: bool,
    json: bool,
) -> Result<()> {
    let left_text = fs::read_to_string(left).with_context(|| format!("read {}", left.display()))?;
    let right_text =
        fs::read_to_string(right).with_context(|| format!("read {}", right.display()))?;

    let options = DiffOptions {
        ignore_whitespace,
        ignore_case,
    };
    let report = diff::compute_diff(&left_text, &right_text, &options);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize diff json")?
        );
        return Ok(());
    }

    for record in &report.records {
        match record.kind {
            LineKind::Equal => println!("{:>4}   {}", record.line_number, record.left),
            LineKind::Added => println!("{:>4} + {}", record.line_number, record.right),
            LineKind::Removed => println!("{:>4} - {}", record.line_number, record.left),
            LineKind::Modified => println!(
                "{:>4} ~ {} | {}",
                record.line_number, record.left, record.right
            ),
        }
    }
    println!("{}", summary_badges(&report.summary));
    Ok(())
}

// Zero counts are omitted rather than printed as "0".
fn summary_badges(summary: &DiffSummary) -> String {
    let mut parts = Vec::new();
    if summary.equal > 0 {
        parts.push(format!("{} equal", summary.equal));
    }
    if summary.added > 0 {
        parts.push(format!("{} added", summary.added));
    }
    if summary.removed > 0 {
        parts.push(format!("{} removed", summary.removed));
    }
    if summary.modified > 0 {
        parts.push(format!("{} modified", summary.modified));
    }
    if parts.is_empty() {
        "no lines compared".to_string()
    } else {
        parts.join(", ")
    }
}

pub(super) fn handle_curl(command: CurlCommands) -> Result<()> {
    match command {
        CurlCommands::Parse { command, json } => {
            let descriptor = curl::parse_command(&command)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&descriptor).context("serialize request json")?
                );
            } else {
                println!("url: {}", descriptor.url);
                println!("method: {}", descriptor.method);
                for (name, value) in &descriptor.headers {
                    println!("header: {}: {}", name, value);
                }
                if !descriptor.body.is_empty() {
                    println!("body: {}", descriptor.body);
                }
            }
        }
        CurlCommands::Format {
            url,
            method,
            headers,
            data,
        } => {
            let descriptor = build_descriptor(url, Some(&method), &headers, data)?;
            println!("{}", curl::to_command(&descriptor));
        }
    }
    Ok(())
}

pub(super) fn build_descriptor(
    url: String,
    method: Option<&str>,
    headers: &[String],
    data: Option<String>,
) -> Result<RequestDescriptor> {
    let mut descriptor = RequestDescriptor {
        url,
        ..Default::default()
    };
    if let Some(method) = method {
        descriptor.method =
            Method::from_token(method).with_context(|| format!("unknown method {:?}", method))?;
    }
    for header in headers {
        let (name, value) = header
            .split_once(':')
            .with_context(|| format!("header {:?} is not \"Name: value\"", header))?;
        descriptor.set_header(name.trim(), value.trim());
    }
    if let Some(data) = data {
        descriptor.body = data;
    }
    Ok(descriptor)
}
