use anyhow::{Result, bail};

use super::tokens::{strip_quotes, tokenize};
use super::{Method, RequestDescriptor};

const MISSING_URL: &str = "no URL found in command";

/// Paste-detection heuristic for deciding whether a blob of text is meant
/// as a cURL command. Best-effort by design; it can misclassify and the
/// token walk stays forgiving about whatever comes through.
pub fn looks_like_curl(raw: &str) -> bool {
    let lowered = raw.trim().to_lowercase();
    lowered.starts_with("curl ")
        || lowered.contains("-x ")
        || lowered.contains("--request")
        || lowered.contains("-h ")
        || lowered.contains("--header")
}

/// Turns pasted text into a [`RequestDescriptor`]. Input that looks like a
/// cURL command goes through the token walk; input starting with `http` is
/// taken as a bare URL. Anything else cannot yield a URL and fails, the one
/// hard error this parser has.
pub fn parse_command(raw: &str) -> Result<RequestDescriptor> {
    let trimmed = raw.trim();
    if looks_like_curl(trimmed) {
        return parse_tokens(trimmed);
    }
    if trimmed.starts_with("http") {
        return Ok(RequestDescriptor {
            url: trimmed.to_string(),
            ..Default::default()
        });
    }
    bail!(MISSING_URL);
}

fn parse_tokens(command: &str) -> Result<RequestDescriptor> {
    let tokens = tokenize(strip_curl_prefix(command));

    let mut descriptor = RequestDescriptor::default();
    let mut i = 0;
    while i < tokens.len() {
        match tokens[i].as_str() {
            "-X" | "--request" => {
                if let Some(arg) = tokens.get(i + 1) {
                    // Values outside the method allow-list are skipped,
                    // like any other malformed fragment.
                    if let Some(method) = Method::from_token(arg) {
                        descriptor.method = method;
                    }
                    i += 1;
                }
            }
            "-H" | "--header" => {
                if let Some(arg) = tokens.get(i + 1) {
                    if let Some((name, value)) = split_header(strip_quotes(arg)) {
                        descriptor.set_header(name, value);
                    }
                    i += 1;
                }
            }
            "-d" | "--data" | "--data-raw" => {
                if let Some(arg) = tokens.get(i + 1) {
                    descriptor.body = strip_quotes(arg).to_string();
                    // cURL itself upgrades a default GET to POST when a
                    // body is supplied.
                    if descriptor.method == Method::Get {
                        descriptor.method = Method::Post;
                    }
                    i += 1;
                }
            }
            token => {
                // First bare token is the URL; later ones and unrecognized
                // flags are ignored rather than escalated.
                if !token.starts_with('-') && descriptor.url.is_empty() {
                    descriptor.url = strip_quotes(token).to_string();
                }
            }
        }
        i += 1;
    }

    if descriptor.url.is_empty() {
        bail!(MISSING_URL);
    }
    Ok(descriptor)
}

fn strip_curl_prefix(command: &str) -> &str {
    match command.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("curl") => {
            let rest = &command[4..];
            if rest.starts_with(char::is_whitespace) {
                rest.trim_start()
            } else {
                command
            }
        }
        _ => command,
    }
}

/// Splits on the first `:`; further colons stay in the value. Headers with
/// no colon or an empty name are dropped by the caller.
fn split_header(header: &str) -> Option<(String, String)> {
    let (name, value) = header.split_once(':')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), value.trim().to_string()))
}
