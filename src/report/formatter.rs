//! Text rendering of ranked entries.
//!
//! All functions are pure over their arguments: the same entries and
//! metadata always produce byte-identical text.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, FixedOffset, Local, SecondsFormat};
use tempfile::NamedTempFile;
use tracing::info;

use crate::errors::{Result, TagError};
use crate::pipeline::artifacts::RankedEntry;

/// Line between the report header and the listing.
pub const SEPARATOR: &str = "--------------------------------------------------";

/// Column width of the word in full listings.
pub const FULL_WORD_WIDTH: usize = 20;

/// Column width of the word in top-N listings.
pub const TOP_WORD_WIDTH: usize = 15;

/// Header fields of a persisted report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportMetadata {
    /// Name of the tagged text file; rendered as `unknown` when absent.
    pub text_name: Option<String>,
    /// Name of the stop-word file; rendered as `none` when absent.
    pub stop_words_name: Option<String>,
    pub generated: DateTime<FixedOffset>,
}

impl ReportMetadata {
    /// Metadata stamped with the current local time.
    pub fn now(text_name: Option<String>, stop_words_name: Option<String>) -> Self {
        Self {
            text_name,
            stop_words_name,
            generated: Local::now().into(),
        }
    }
}

/// `"<rank>) <word> : <count>"` for the first `min(n, len)` entries.
pub fn render_top_n(entries: &[RankedEntry], n: usize) -> String {
    let mut out = String::new();
    for (i, e) in entries.iter().take(n).enumerate() {
        let _ = writeln!(
            out,
            "{:>2}) {:<width$} : {}",
            i + 1,
            e.word,
            e.count,
            width = TOP_WORD_WIDTH
        );
    }
    out
}

/// `"<word> : <count>"` for every entry, word padded to 20 columns.
pub fn render_full(entries: &[RankedEntry]) -> String {
    let mut out = String::new();
    for e in entries {
        let _ = writeln!(out, "{:<width$} : {}", e.word, e.count, width = FULL_WORD_WIDTH);
    }
    out
}

/// Interactive listing: the top-N block followed by the full list.
pub fn render_summary(entries: &[RankedEntry], top_n: usize) -> String {
    let shown = top_n.min(entries.len());
    let mut out = String::new();
    out.push_str("--- Tags (sorted by frequency desc) ---\n");
    let _ = writeln!(out, "Top {shown} tags:");
    out.push_str(&render_top_n(entries, top_n));
    out.push_str("\nFull list:\n");
    out.push_str(&render_full(entries));
    out
}

fn render_header(meta: &ReportMetadata) -> String {
    format!(
        "Tags frequency output for: {}\nStop words file: {}\nGenerated: {}\n{}\n",
        meta.text_name.as_deref().unwrap_or("unknown"),
        meta.stop_words_name.as_deref().unwrap_or("none"),
        meta.generated.to_rfc3339_opts(SecondsFormat::Secs, true),
        SEPARATOR,
    )
}

/// Header plus the full ranked listing.
pub fn render_report(entries: &[RankedEntry], meta: &ReportMetadata) -> String {
    let mut out = render_header(meta);
    out.push_str(&render_full(entries));
    out
}

/// Write the rendered report to `sink`.
pub fn write_report<W: Write + ?Sized>(
    sink: &mut W,
    entries: &[RankedEntry],
    meta: &ReportMetadata,
) -> Result<()> {
    sink.write_all(render_report(entries, meta).as_bytes())
        .and_then(|_| sink.flush())
        .map_err(|e| TagError::io("report sink", e))
}

/// Save the report at `path`.
///
/// The text goes to a temporary file in the same directory, which is then
/// renamed over `path`. On failure `path` is left untouched.
pub fn save_report(path: &Path, entries: &[RankedEntry], meta: &ReportMetadata) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| TagError::io(dir, e))?;
    tmp.write_all(render_report(entries, meta).as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| TagError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| TagError::io(path, e.error))?;

    info!(path = %path.display(), entries = entries.len(), "report saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entries() -> Vec<RankedEntry> {
        vec![
            RankedEntry::new("a", 3),
            RankedEntry::new("b", 2),
            RankedEntry::new("c", 1),
        ]
    }

    fn meta() -> ReportMetadata {
        ReportMetadata {
            text_name: Some("book.txt".to_string()),
            stop_words_name: Some("stop.txt".to_string()),
            generated: FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2026, 10, 16, 9, 30, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_render_top_n() {
        let text = render_top_n(&entries(), 2);
        assert_eq!(
            text,
            " 1) a               : 3\n 2) b               : 2\n"
        );
    }

    #[test]
    fn test_render_top_n_larger_than_list() {
        assert_eq!(render_top_n(&entries(), 30).lines().count(), 3);
        assert_eq!(render_top_n(&entries(), 0), "");
    }

    #[test]
    fn test_render_full() {
        let text = render_full(&entries());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "a                    : 3");
        assert_eq!(lines[2], "c                    : 1");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_long_words_are_not_truncated() {
        let long = RankedEntry::new("pneumonoultramicroscopic", 1);
        assert_eq!(render_full(&[long]), "pneumonoultramicroscopic : 1\n");
    }

    #[test]
    fn test_report_layout() {
        let text = render_report(&entries(), &meta());
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Tags frequency output for: book.txt");
        assert_eq!(lines[1], "Stop words file: stop.txt");
        assert_eq!(lines[2], "Generated: 2026-10-16T09:30:00Z");
        assert_eq!(lines[3], SEPARATOR);
        assert_eq!(lines[4], "a                    : 3");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_report_defaults_for_missing_names() {
        let mut m = meta();
        m.text_name = None;
        m.stop_words_name = None;
        let text = render_report(&[], &m);
        assert!(text.starts_with("Tags frequency output for: unknown\nStop words file: none\n"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_report_is_deterministic() {
        assert_eq!(render_report(&entries(), &meta()), render_report(&entries(), &meta()));
    }

    #[test]
    fn test_summary_blocks() {
        let text = render_summary(&entries(), 2);
        assert!(text.contains("Top 2 tags:\n 1) a"));
        assert!(text.contains("\nFull list:\na "));
    }

    #[test]
    fn test_write_report_to_buffer() {
        let mut buf = Vec::new();
        write_report(&mut buf, &entries(), &meta()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render_report(&entries(), &meta()));
    }

    #[test]
    fn test_write_failure_is_io_error() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let err = write_report(&mut Broken, &entries(), &meta()).unwrap_err();
        assert!(matches!(err, TagError::Io { .. }));
    }

    #[test]
    fn test_save_report_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tags_output.txt");
        std::fs::write(&path, "old contents").unwrap();

        save_report(&path, &entries(), &meta()).unwrap();

        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(saved, render_report(&entries(), &meta()));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_report_into_missing_dir_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        let err = save_report(&path, &entries(), &meta()).unwrap_err();
        assert!(matches!(err, TagError::Io { .. }));
        assert!(!path.exists());
    }
}
