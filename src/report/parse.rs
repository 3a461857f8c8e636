//! Reading a saved report back into a [`FrequencyMap`].

use crate::errors::{Result, TagError};
use crate::pipeline::artifacts::FrequencyMap;
use crate::report::formatter::SEPARATOR;

/// Parse the `<word> : <count>` lines that follow the header separator.
pub fn parse_report(text: &str) -> Result<FrequencyMap> {
    let mut lines = text.lines().enumerate();
    if !lines.by_ref().any(|(_, line)| line == SEPARATOR) {
        return Err(TagError::Report("missing header separator".to_string()));
    }

    let mut freq = FrequencyMap::new();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let lineno = idx + 1;
        let (word, count) = line
            .rsplit_once(" : ")
            .ok_or_else(|| TagError::Report(format!("line {lineno}: expected `<word> : <count>`")))?;

        let word = word.trim_end();
        let count: u64 = count
            .trim()
            .parse()
            .map_err(|_| TagError::Report(format!("line {lineno}: bad count {count:?}")))?;

        if freq.get(word) != 0 {
            return Err(TagError::Report(format!("line {lineno}: duplicate word {word:?}")));
        }
        if !freq.insert_count(word, count) {
            return Err(TagError::Report(format!("line {lineno}: bad word {word:?}")));
        }
    }
    Ok(freq)
}
