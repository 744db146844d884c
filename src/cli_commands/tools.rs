use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum CurlCommands {
    /// Parse a cURL command into url/method/headers/body
    Parse {
        command: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Render url/method/headers/body as a cURL command
    Format {
        #[arg(long)]
        url: String,
        #[arg(short = 'X', long, default_value = "GET")]
        method: String,
        /// Header as "Name: value" (repeatable)
        #[arg(short = 'H', long = "header")]
        headers: Vec<String>,
        /// Request body
        #[arg(short = 'd', long)]
        data: Option<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum TimeCommands {
    /// Current time as unix seconds, milliseconds, and RFC 3339
    Now {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert a unix timestamp (seconds or milliseconds) to dates
    ToDate {
        epoch: i64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Convert an RFC 3339 date to unix timestamps
    ToEpoch {
        date: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum JsonCommands {
    /// Pretty-print JSON from a file or stdin
    Format {
        file: Option<PathBuf>,
        /// Spaces per level (0 for compact)
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },
    /// Strip all insignificant whitespace
    Minify { file: Option<PathBuf> },
    /// Check validity, reporting the parser's line and column on failure
    Validate { file: Option<PathBuf> },
}

#[derive(Subcommand)]
pub(crate) enum GzipCommands {
    /// Gzip text (or a file) and print it base64-encoded
    Compress {
        text: Option<String>,
        /// Read the input from a file instead
        #[arg(long)]
        file: Option<PathBuf>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode base64 and decompress (gzip or zlib)
    Decompress { text: String },
}
