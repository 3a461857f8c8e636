//! Frequency extraction — the two-pass scan over a text source.
//!
//! [`FrequencyExtractor::extract`] makes one pass to count lines, so that
//! progress can be expressed as a percentage before the last line, and a
//! second pass to tokenize, filter against a [`StopWordSet`] and count.
//! Both passes run on the calling thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{ExtractorConfig, DEFAULT_PROGRESS_INTERVAL};
use crate::errors::{Result, TagError};
use crate::nlp::stopwords::StopWordSet;
use crate::nlp::tokenizer::tokenize;
use crate::pipeline::artifacts::FrequencyMap;
use crate::pipeline::observer::{
    ProgressSink, ProgressTracker, StageClock, STAGE_COUNT_LINES, STAGE_TOKENIZE,
};
use crate::source::{for_each_line, LineSource};

/// Enter a tracing span for an extraction stage.
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::info_span!("extract_stage", stage = $name).entered();
    };
}

// ============================================================================
// CancelToken — cooperative cancellation flag
// ============================================================================

/// Shared flag a caller can set to abort a running scan.
///
/// The extractor polls it once per line. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(TagError::Cancelled)
        } else {
            Ok(())
        }
    }
}

// ============================================================================
// FrequencyExtractor
// ============================================================================

/// Counts non-stop-word tokens in a line source.
#[derive(Debug, Clone)]
pub struct FrequencyExtractor {
    progress_interval: usize,
}

impl Default for FrequencyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyExtractor {
    /// Create an extractor reporting progress every 200 lines
    pub fn new() -> Self {
        Self {
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Create an extractor from a config
    pub fn with_config(config: &ExtractorConfig) -> Self {
        Self::new().with_progress_interval(config.progress_interval)
    }

    /// Set how many lines pass between progress notifications
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Count the tags in `text`.
    ///
    /// Progress goes to `sink` in the order described in
    /// [`observer`](crate::pipeline::observer). The caller reports 100 once it
    /// has taken the result.
    pub fn extract<S, P>(
        &self,
        text: &S,
        stop_words: &StopWordSet,
        sink: &mut P,
    ) -> Result<FrequencyMap>
    where
        S: LineSource + ?Sized,
        P: ProgressSink + ?Sized,
    {
        self.extract_with_cancel(text, stop_words, sink, &CancelToken::new())
    }

    /// Like [`extract`](Self::extract), but stops with
    /// [`TagError::Cancelled`] once `cancel` is set. The partial map is
    /// dropped.
    pub fn extract_with_cancel<S, P>(
        &self,
        text: &S,
        stop_words: &StopWordSet,
        sink: &mut P,
        cancel: &CancelToken,
    ) -> Result<FrequencyMap>
    where
        S: LineSource + ?Sized,
        P: ProgressSink + ?Sized,
    {
        let source_name = text.name();
        let mut progress = ProgressTracker::new(sink, self.progress_interval);
        progress.started();

        // Pass 1: count lines
        let total_lines = {
            trace_stage!(STAGE_COUNT_LINES);
            let clock = StageClock::start();
            let total = for_each_line(text, |_| cancel.check())?;
            debug!(
                source = %source_name,
                lines = total,
                elapsed_ms = clock.elapsed().as_millis() as u64,
                "counted lines"
            );
            total
        };
        progress.begin_scan(total_lines);

        // Pass 2: tokenize, filter, count
        let mut freq = FrequencyMap::new();
        {
            trace_stage!(STAGE_TOKENIZE);
            let clock = StageClock::start();
            let mut processed = 0u64;
            for_each_line(text, |line| {
                cancel.check()?;
                processed += 1;
                for token in tokenize(line) {
                    if !stop_words.contains(&token) {
                        freq.record(token);
                    }
                }
                progress.line(processed);
                Ok(())
            })?;
            debug!(
                source = %source_name,
                lines = processed,
                elapsed_ms = clock.elapsed().as_millis() as u64,
                "tokenized"
            );
        }
        progress.tokenized();

        info!(
            source = %source_name,
            unique_tags = freq.len(),
            total_tags = freq.total(),
            "extraction finished"
        );
        Ok(freq)
    }
}
