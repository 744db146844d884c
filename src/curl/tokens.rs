/// Splits a command line on unquoted spaces. A quote character (`'` or `"`)
/// opens a span that only the same character closes; the quote characters
/// themselves stay in the token and are peeled off later where a flag wants
/// the bare value. Backslash escapes are not interpreted, so a quoted span
/// cannot contain its own quote character (known limitation).
pub(super) fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for ch in input.chars() {
        match quote {
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                current.push(ch);
            }
            Some(open) if ch == open => {
                quote = None;
                current.push(ch);
            }
            None if ch == ' ' => {
                flush(&mut tokens, &mut current);
            }
            _ => current.push(ch),
        }
    }
    flush(&mut tokens, &mut current);

    tokens
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    let token = current.trim();
    if !token.is_empty() {
        tokens.push(token.to_string());
    }
    current.clear();
}

/// Removes one layer of surrounding quotes when both ends carry the same
/// quote character. Mismatched or lone quotes are left alone.
pub(super) fn strip_quotes(token: &str) -> &str {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if first == bytes[bytes.len() - 1] && (first == b'"' || first == b'\'') {
            return &token[1..token.len() - 1];
        }
    }
    token
}

#[cfg(test)]
#[path = "../tests/curl_tokens_tests.rs"]
mod tests;
