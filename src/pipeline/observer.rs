//! Progress reporting hooks.
//!
//! The extractor reports progress as percentages through a [`ProgressSink`],
//! called synchronously at fixed checkpoints:
//!
//! | Value | When |
//! |-------|------|
//! | 10 | stop words are loaded and the scan begins |
//! | `min(90, 10 + processed * 80 / total)` | every `progress_interval` lines and on the last line |
//! | 50 | once, in place of the above, when the source has no lines |
//! | 95 | tokenization finished |
//!
//! The caller finalizes at 100. Values are hints, not exact fractions, but
//! a sink never sees a value lower than one it has already received.

use std::time::{Duration, Instant};

/// Scan started.
pub const PROGRESS_STARTED: u8 = 10;
/// Upper bound for in-scan values.
pub const PROGRESS_SCAN_CEILING: u8 = 90;
/// Reported for a source with zero lines.
pub const PROGRESS_EMPTY_SOURCE: u8 = 50;
/// Tokenization finished.
pub const PROGRESS_TOKENIZED: u8 = 95;
/// Result handed to the consumer.
pub const PROGRESS_DONE: u8 = 100;

/// Stage names used in tracing spans and timing logs.
pub const STAGE_COUNT_LINES: &str = "count_lines";
pub const STAGE_TOKENIZE: &str = "tokenize";

/// Receives progress percentages in emission order.
pub trait ProgressSink {
    fn on_progress(&mut self, percent: u8);
}

impl<F: FnMut(u8)> ProgressSink for F {
    fn on_progress(&mut self, percent: u8) {
        self(percent)
    }
}

/// Sink that drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    #[inline]
    fn on_progress(&mut self, _percent: u8) {}
}

/// Sink that keeps every value it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressLog {
    pub values: Vec<u8>,
}

impl ProgressLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent value, which is all a display needs.
    pub fn latest(&self) -> Option<u8> {
        self.values.last().copied()
    }
}

impl ProgressSink for ProgressLog {
    fn on_progress(&mut self, percent: u8) {
        self.values.push(percent);
    }
}

/// In-scan percentage for `processed` of `total` lines.
pub fn scan_percent(processed: u64, total: u64) -> u8 {
    if total == 0 {
        return PROGRESS_EMPTY_SOURCE;
    }
    let span = u64::from(PROGRESS_SCAN_CEILING - PROGRESS_STARTED);
    let pct = u64::from(PROGRESS_STARTED) + processed.saturating_mul(span) / total;
    pct.min(u64::from(PROGRESS_SCAN_CEILING)) as u8
}

/// Drives the checkpoint schedule for one scan and keeps the values sent to
/// the sink non-decreasing.
pub(crate) struct ProgressTracker<'a, P: ProgressSink + ?Sized> {
    sink: &'a mut P,
    total_lines: u64,
    interval: u64,
    last: u8,
}

impl<'a, P: ProgressSink + ?Sized> ProgressTracker<'a, P> {
    pub(crate) fn new(sink: &'a mut P, interval: usize) -> Self {
        Self {
            sink,
            total_lines: 0,
            interval: interval.max(1) as u64,
            last: 0,
        }
    }

    /// Record the line count from the counting pass.
    pub(crate) fn begin_scan(&mut self, total_lines: u64) {
        self.total_lines = total_lines;
    }

    fn emit(&mut self, percent: u8) {
        let percent = percent.max(self.last);
        self.last = percent;
        self.sink.on_progress(percent);
    }

    pub(crate) fn started(&mut self) {
        self.emit(PROGRESS_STARTED);
    }

    /// Called after each processed line (1-based).
    pub(crate) fn line(&mut self, processed: u64) {
        if processed % self.interval == 0 || processed == self.total_lines {
            self.emit(scan_percent(processed, self.total_lines));
        }
    }

    pub(crate) fn tokenized(&mut self) {
        if self.total_lines == 0 {
            self.emit(PROGRESS_EMPTY_SOURCE);
        }
        self.emit(PROGRESS_TOKENIZED);
    }
}

/// Wall-clock timer for a stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_percent_formula() {
        assert_eq!(scan_percent(0, 10), 10);
        assert_eq!(scan_percent(5, 10), 50);
        assert_eq!(scan_percent(10, 10), 90);
        assert_eq!(scan_percent(1, 3), 36);
        // more lines than counted (source grew between passes)
        assert_eq!(scan_percent(20, 10), 90);
        assert_eq!(scan_percent(0, 0), 50);
    }

    #[test]
    fn test_tracker_schedule() {
        let mut log = ProgressLog::new();
        {
            let mut tracker = ProgressTracker::new(&mut log, 200);
            tracker.started();
            tracker.begin_scan(450);
            for n in 1..=450 {
                tracker.line(n);
            }
            tracker.tokenized();
        }
        // 200 → 10 + 16000/450 = 45, 400 → 10 + 32000/450 = 81, 450 → 90
        assert_eq!(log.values, vec![10, 45, 81, 90, 95]);
    }

    #[test]
    fn test_tracker_empty_source() {
        let mut log = ProgressLog::new();
        {
            let mut tracker = ProgressTracker::new(&mut log, 200);
            tracker.started();
            tracker.begin_scan(0);
            tracker.tokenized();
        }
        assert_eq!(log.values, vec![10, 50, 95]);
    }

    #[test]
    fn test_tracker_is_monotonic() {
        let mut log = ProgressLog::new();
        {
            let mut tracker = ProgressTracker::new(&mut log, 1);
            tracker.started();
            tracker.begin_scan(3);
            tracker.line(1);
            tracker.line(2);
            tracker.line(3);
            tracker.tokenized();
        }
        assert!(log.values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(log.latest(), Some(PROGRESS_TOKENIZED));
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |p: u8| seen.push(p);
            sink.on_progress(10);
            sink.on_progress(95);
        }
        assert_eq!(seen, vec![10, 95]);
    }

    #[test]
    fn test_noop_sink_default() {
        let mut sink = NoopSink::default();
        sink.on_progress(42);
    }
}
