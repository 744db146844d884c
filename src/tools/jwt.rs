use anyhow::{Context, Result, bail};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DecodedJwt {
    pub header: Value,
    pub payload: Value,
    /// RFC 3339 renderings of the numeric time claims found in the payload.
    pub times: Vec<(String, String)>,
}

/// Decodes header and payload without verifying the signature.
pub fn decode(token: &str) -> Result<DecodedJwt> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        bail!(
            "invalid JWT: expected 3 dot-separated parts, found {}",
            parts.len()
        );
    }

    let header = decode_segment(parts[0]).context("decode JWT header")?;
    let payload = decode_segment(parts[1]).context("decode JWT payload")?;
    let times = time_claims(&payload);

    Ok(DecodedJwt {
        header,
        payload,
        times,
    })
}

fn decode_segment(segment: &str) -> Result<Value> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .context("base64url decode")?;
    serde_json::from_slice(&bytes).context("parse segment as JSON")
}

fn time_claims(payload: &Value) -> Vec<(String, String)> {
    let mut times = Vec::new();
    for claim in ["exp", "iat", "nbf"] {
        let Some(secs) = payload.get(claim).and_then(Value::as_i64) else {
            continue;
        };
        if let Ok(date) = OffsetDateTime::from_unix_timestamp(secs) {
            if let Ok(formatted) = date.format(&Rfc3339) {
                times.push((claim.to_string(), formatted));
            }
        }
    }
    times
}
