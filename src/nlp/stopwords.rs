//! Stop-word sets
//!
//! A [`StopWordSet`] is loaded from a line-oriented source (one word per
//! line) and can be seeded from the bundled lists of the `stop-words` crate.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};
use tracing::debug;

use crate::errors::Result;
use crate::source::{for_each_line, LineSource};

/// A set of lowercase stop words excluded from counting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: FxHashSet<String>,
}

impl StopWordSet {
    /// Create an empty set (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load stop words from a line source.
    ///
    /// Each line is trimmed and lowercased; blank lines are skipped. A read
    /// or decode failure discards everything loaded so far.
    pub fn load<S: LineSource + ?Sized>(source: &S) -> Result<Self> {
        let mut words = FxHashSet::default();
        let lines = for_each_line(source, |line| {
            let word = line.trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
            Ok(())
        })?;

        debug!(
            source = %source.name(),
            lines,
            words = words.len(),
            "loaded stop words"
        );
        Ok(Self { words })
    }

    /// Load stop words from a line source, then merge in the bundled list for
    /// `language` if one is given.
    pub fn load_with_language<S: LineSource + ?Sized>(
        source: &S,
        language: Option<&str>,
    ) -> Result<Self> {
        let mut set = Self::load(source)?;
        if let Some(language) = language {
            set.extend(&Self::builtin(language));
        }
        Ok(set)
    }

    /// Create a set from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let words = words
            .iter()
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Create a set from the bundled list for a language.
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi,
    /// hu, tr, pl, ar. Unknown languages fall back to English.
    pub fn builtin(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => LANGUAGE::English,
        };

        let words = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Self { words }
    }

    /// Merge another set into this one
    pub fn extend(&mut self, other: &StopWordSet) {
        self.words.extend(other.words.iter().cloned());
    }

    /// Check if a word is a stop word.
    ///
    /// Callers pass already-lowercased tokens; no normalization happens here.
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stop words in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
