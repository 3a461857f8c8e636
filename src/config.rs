//! Extraction configuration.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "progress_interval": 200,
//!   "top_n": 30,
//!   "language": "en"
//! }
//! ```
//!
//! All fields are optional; omitted fields take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TagError};

/// Default number of lines between progress notifications.
pub const DEFAULT_PROGRESS_INTERVAL: usize = 200;

/// Default length of the "top tags" listing.
pub const DEFAULT_TOP_N: usize = 30;

/// Tunables for an extraction run and its display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractorConfig {
    /// Emit a progress notification every this many lines.
    pub progress_interval: usize,
    /// Number of entries in the top-N listing.
    pub top_n: usize,
    /// Optional bundled stop-word list merged into the user-supplied one.
    pub language: Option<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            top_n: DEFAULT_TOP_N,
            language: None,
        }
    }
}

impl ExtractorConfig {
    /// Parse a config from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a config from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| TagError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Set the progress interval.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval;
        self
    }

    /// Set the top-N listing length.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the bundled stop-word language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.progress_interval == 0 {
            return Err(TagError::Config(
                "progress_interval must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
