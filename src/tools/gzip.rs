use std::io::{Read, Write};

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::read::{MultiGzDecoder, ZlibDecoder};
use flate2::write::GzEncoder;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompressionReport {
    pub encoded: String,
    pub original_bytes: usize,
    pub compressed_bytes: usize,
    /// Compressed payload size as a percentage of the original.
    pub ratio_percent: f64,
}

pub fn compress_to_base64(text: &str) -> Result<CompressionReport> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes()).context("gzip input")?;
    let compressed = encoder.finish().context("finish gzip stream")?;

    let ratio_percent = if text.is_empty() {
        0.0
    } else {
        compressed.len() as f64 / text.len() as f64 * 100.0
    };

    Ok(CompressionReport {
        encoded: STANDARD.encode(&compressed),
        original_bytes: text.len(),
        compressed_bytes: compressed.len(),
        ratio_percent,
    })
}

/// Accepts both gzip and zlib payloads; pasted blobs come in either wrapper
/// depending on what produced them.
pub fn decompress_from_base64(encoded: &str) -> Result<String> {
    let compressed = STANDARD
        .decode(encoded.trim())
        .context("base64 decode input")?;

    let mut text = String::new();
    if MultiGzDecoder::new(compressed.as_slice())
        .read_to_string(&mut text)
        .is_err()
    {
        text.clear();
        ZlibDecoder::new(compressed.as_slice())
            .read_to_string(&mut text)
            .context("input is neither a gzip nor a zlib stream")?;
    }
    Ok(text)
}
