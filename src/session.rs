//! Application state around the extraction core.
//!
//! A [`TagSession`] remembers the selected files and the last successful
//! result. It enforces the preconditions the core assumes: both files are
//! chosen before a run, and a non-empty result exists before a save.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use crate::config::ExtractorConfig;
use crate::errors::{Result, TagError};
use crate::pipeline::artifacts::{FrequencyMap, RankedEntry};
use crate::pipeline::observer::{ProgressSink, PROGRESS_DONE};
use crate::pipeline::worker::{spawn_extraction, ExtractionHandle, ExtractionRequest};
use crate::report::{rank, save_report, ReportMetadata};
use crate::source::FileSource;

/// A completed run: the counts, their ranking, and the files they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub freq: FrequencyMap,
    pub ranked: Vec<RankedEntry>,
    pub text_name: String,
    pub stop_words_name: String,
}

impl Extraction {
    fn new(freq: FrequencyMap, text: &FileSource, stop_words: &FileSource) -> Self {
        let ranked = rank(&freq);
        Self {
            freq,
            ranked,
            text_name: text.file_name(),
            stop_words_name: stop_words.file_name(),
        }
    }

    /// Report header fields stamped with the current time.
    pub fn metadata(&self) -> ReportMetadata {
        ReportMetadata::now(
            Some(self.text_name.clone()),
            Some(self.stop_words_name.clone()),
        )
    }
}

/// Selected inputs plus the last computed result.
#[derive(Debug, Default)]
pub struct TagSession {
    config: ExtractorConfig,
    text: Option<FileSource>,
    stop_words: Option<FileSource>,
    last: Option<Arc<Extraction>>,
}

impl TagSession {
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn select_text(&mut self, path: impl Into<PathBuf>) {
        let source = FileSource::new(path);
        info!(path = %source.path().display(), "selected text file");
        self.text = Some(source);
    }

    pub fn select_stop_words(&mut self, path: impl Into<PathBuf>) {
        let source = FileSource::new(path);
        info!(path = %source.path().display(), "selected stop words file");
        self.stop_words = Some(source);
    }

    pub fn text(&self) -> Option<&FileSource> {
        self.text.as_ref()
    }

    pub fn stop_words(&self) -> Option<&FileSource> {
        self.stop_words.as_ref()
    }

    /// The last successful result, if any.
    pub fn last(&self) -> Option<Arc<Extraction>> {
        self.last.clone()
    }

    fn inputs(&self) -> Result<(&FileSource, &FileSource)> {
        let text = self
            .text
            .as_ref()
            .ok_or_else(|| TagError::Precondition("choose a text file first".to_string()))?;
        let stop_words = self.stop_words.as_ref().ok_or_else(|| {
            TagError::Precondition("choose a stop words file first".to_string())
        })?;
        Ok((text, stop_words))
    }

    /// Start a background run over the selected files.
    pub fn start(&self) -> Result<ExtractionHandle> {
        let (text, stop_words) = self.inputs()?;
        spawn_extraction(ExtractionRequest {
            text: text.clone(),
            stop_words: stop_words.clone(),
            config: self.config.clone(),
        })
    }

    /// Run an extraction to completion, forwarding progress to `sink`.
    ///
    /// On success the result replaces the previous one and 100 is reported.
    /// On failure the previous result is kept.
    pub fn extract<P: ProgressSink + ?Sized>(&mut self, sink: &mut P) -> Result<Arc<Extraction>> {
        let (text, stop_words) = {
            let (t, s) = self.inputs()?;
            (t.clone(), s.clone())
        };
        let freq = self.start()?.wait(&mut *sink)?;

        let extraction = Arc::new(Extraction::new(freq, &text, &stop_words));
        self.last = Some(Arc::clone(&extraction));
        sink.on_progress(PROGRESS_DONE);

        info!(
            text = %extraction.text_name,
            unique_tags = extraction.freq.len(),
            "extraction stored"
        );
        Ok(extraction)
    }

    /// Save the last result as a report at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let extraction = self
            .last
            .as_ref()
            .filter(|e| !e.freq.is_empty())
            .ok_or_else(|| {
                TagError::Precondition(
                    "no extracted data available, run extraction first".to_string(),
                )
            })?;
        save_report(path, &extraction.ranked, &extraction.metadata())
    }
}
