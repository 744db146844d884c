use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Re-prints JSON with the given indent width; `0` means compact output.
pub fn format(input: &str, indent: usize) -> Result<String> {
    let value: Value = serde_json::from_str(input).context("parse JSON")?;
    if indent == 0 {
        return serde_json::to_string(&value).context("serialize JSON");
    }

    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer).context("serialize JSON")?;
    String::from_utf8(out).context("formatted JSON is utf-8")
}

pub fn minify(input: &str) -> Result<String> {
    let value: Value = serde_json::from_str(input).context("parse JSON")?;
    serde_json::to_string(&value).context("serialize JSON")
}

/// `Err` carries the parser's message, which includes line and column.
pub fn validate(input: &str) -> std::result::Result<(), String> {
    match serde_json::from_str::<Value>(input) {
        Ok(_) => Ok(()),
        Err(err) => Err(err.to_string()),
    }
}
