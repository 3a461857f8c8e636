//! Natural Language Processing components
//!
//! This module provides tokenization and stop-word filtering.

pub mod stopwords;
pub mod tokenizer;
