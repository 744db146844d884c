use std::time::Duration;

use anyhow::{Context, Result};

use toolbelt::curl::{self, Method, RequestDescriptor};
use toolbelt::request::{self, ResponseReport};

pub(super) fn handle_http(
    raw: Option<String>,
    url: Option<String>,
    method: Option<String>,
    headers: Vec<String>,
    data: Option<String>,
    timeout: u64,
    json: bool,
) -> Result<()> {
    let mut descriptor = match raw {
        Some(raw) => curl::parse_command(&raw)?,
        None => RequestDescriptor::default(),
    };

    // Explicit flags win over whatever the pasted command said.
    if let Some(url) = url {
        descriptor.url = url;
    }
    if let Some(method) = method {
        descriptor.method = Method::from_token(&method)
            .with_context(|| format!("unknown method {:?}", method))?;
    }
    for header in &headers {
        let (name, value) = header
            .split_once(':')
            .with_context(|| format!("header {:?} is not \"Name: value\"", header))?;
        descriptor.set_header(name.trim(), value.trim());
    }
    if let Some(data) = data {
        descriptor.body = data;
        if descriptor.method == Method::Get {
            descriptor.method = Method::Post;
        }
    }

    if descriptor.url.trim().is_empty() {
        anyhow::bail!("no URL given (pass a cURL command, a URL, or --url)");
    }

    let report = request::execute_request(&descriptor, Duration::from_secs(timeout))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serialize response json")?
        );
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &ResponseReport) {
    println!(
        "{} {} ({} ms)",
        report.status, report.status_text, report.elapsed_ms
    );
    for (name, value) in &report.headers {
        println!("{}: {}", name, value);
    }
    if !report.body.is_empty() {
        println!();
        println!("{}", report.body);
    }
}
