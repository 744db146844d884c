use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::curl::RequestDescriptor;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResponseReport {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub elapsed_ms: u64,
}

/// Executes a described request and reports status, headers, body, and the
/// round-trip time. When the descriptor carries a body without an explicit
/// content type, one is inferred: `application/json` if the body parses as
/// JSON, `text/plain` otherwise. JSON response bodies are re-pretty-printed
/// for display.
pub fn execute_request(
    descriptor: &RequestDescriptor,
    timeout: Duration,
) -> Result<ResponseReport> {
    let client = reqwest::blocking::Client::builder()
        .user_agent("toolbelt")
        .timeout(timeout)
        .build()
        .context("build http client")?;

    let method = reqwest::Method::from_bytes(descriptor.method.as_str().as_bytes())
        .context("map request method")?;

    let mut request = client.request(method, &descriptor.url);
    for (name, value) in &descriptor.headers {
        request = request.header(name, value);
    }

    if descriptor.method.allows_body() && !descriptor.body.trim().is_empty() {
        if descriptor.header("content-type").is_none() {
            let content_type = if serde_json::from_str::<serde_json::Value>(&descriptor.body).is_ok()
            {
                "application/json"
            } else {
                "text/plain"
            };
            request = request.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        request = request.body(descriptor.body.clone());
    }

    let started = Instant::now();
    let response = request
        .send()
        .with_context(|| format!("request {}", descriptor.url))?;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    let status = response.status();
    let headers: Vec<(String, String)> = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).to_string(),
            )
        })
        .collect();

    let is_json = headers
        .iter()
        .any(|(name, value)| name == "content-type" && value.contains("application/json"));
    let raw = response.text().context("read response body")?;
    let body = if is_json {
        serde_json::from_str::<serde_json::Value>(&raw)
            .and_then(|value| serde_json::to_string_pretty(&value))
            .unwrap_or(raw)
    } else {
        raw
    };

    Ok(ResponseReport {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        headers,
        body,
        elapsed_ms,
    })
}
