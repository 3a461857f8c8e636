//! Error types for tag extraction.

use std::path::Path;

use thiserror::Error;

/// Top-level error type for tag extraction operations.
#[derive(Debug, Error)]
pub enum TagError {
    /// A source could not be opened, read or decoded, or a sink could not
    /// be written.
    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The caller asked for something its state cannot satisfy yet.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// The run was cancelled before the scan finished.
    #[error("extraction cancelled")]
    Cancelled,

    /// Invalid configuration values.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serde serialization/deserialization error.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A report listing could not be parsed back.
    #[error("malformed report: {0}")]
    Report(String),

    /// The background extraction thread panicked.
    #[error("extraction worker panicked")]
    WorkerPanicked,
}

impl TagError {
    /// Wrap an I/O error with the name of the file or stream it came from.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

/// Result type for tag extraction operations.
pub type Result<T> = std::result::Result<T, TagError>;
