//! Typed results flowing between pipeline stages.
//!
//! The extractor produces a [`FrequencyMap`]; the report stage derives an
//! ordered `Vec<RankedEntry>` from it. Neither is mutated once its stage has
//! finished.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::nlp::tokenizer::is_token;

/// Word → occurrence count for one extraction run.
///
/// Every key is non-empty and matches `[a-z]+`; the only ways to add a word
/// are through the tokenizer or through a validated insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: FxHashMap<String, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of an already-normalized token.
    #[inline]
    pub(crate) fn record(&mut self, token: String) {
        debug_assert!(is_token(&token));
        *self.counts.entry(token).or_insert(0) += 1;
    }

    /// Insert a full count for `word`, returning `false` if the word is not
    /// a well-formed token.
    pub(crate) fn insert_count(&mut self, word: &str, count: u64) -> bool {
        if !is_token(word) {
            return false;
        }
        self.counts.insert(word.to_string(), count);
        true
    }

    /// Occurrence count of `word` (0 if absent).
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate over `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}

/// A `(word, count)` pair in display order.
///
/// Ordering is count descending, then word ascending, so two entries compare
/// equal only when both fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
