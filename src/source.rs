//! Line-oriented input sources.
//!
//! Both the text being tagged and the stop-word list are read through
//! [`LineSource`]. A source may be opened more than once: the extractor makes
//! one pass to count lines and a second pass to tokenize. Each pass owns its
//! reader and drops it when the pass ends, including on error.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

use crate::errors::{Result, TagError};

/// A re-openable source of UTF-8 text lines.
pub trait LineSource {
    /// Display name used in error messages and report headers.
    fn name(&self) -> String;

    /// Open a fresh reader positioned at the start of the source.
    fn open(&self) -> io::Result<Box<dyn BufRead + '_>>;
}

/// A file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bare file name, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

impl LineSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// An in-memory string, mostly useful for tests and piped input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemorySource {
    name: String,
    text: String,
}

impl InMemorySource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl LineSource for InMemorySource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn open(&self) -> io::Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(Cursor::new(self.text.as_bytes())))
    }
}

/// Feed every line of `source` to `visit`, without its line terminator.
///
/// Returns the number of lines read. Open, read and UTF-8 decode failures
/// are reported as [`TagError::Io`] naming the source; an error returned by
/// `visit` stops the pass and is passed through unchanged.
pub fn for_each_line<S, F>(source: &S, mut visit: F) -> Result<u64>
where
    S: LineSource + ?Sized,
    F: FnMut(&str) -> Result<()>,
{
    let name = source.name();
    let mut reader = source.open().map_err(|e| TagError::io(&name, e))?;
    let mut buf = String::new();
    let mut lines = 0u64;

    loop {
        buf.clear();
        let read = reader
            .read_line(&mut buf)
            .map_err(|e| TagError::io(&name, e))?;
        if read == 0 {
            break;
        }
        lines += 1;
        visit(trim_line_terminator(&buf))?;
    }

    Ok(lines)
}

/// Count the lines of `source` with a full read-through.
pub fn count_lines<S: LineSource + ?Sized>(source: &S) -> Result<u64> {
    for_each_line(source, |_| Ok(()))
}

fn trim_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
