//! ASCII letter tokenizer
//!
//! Any character that is not an ASCII letter separates tokens. Tokens are
//! lowercased, so every token matches `[a-z]+`.

/// Split a line into lowercase ASCII-letter tokens.
pub fn tokenize(line: &str) -> impl Iterator<Item = String> + '_ {
    line.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_ascii_lowercase())
}

/// Returns `true` if `word` is a well-formed token (`[a-z]+`).
pub fn is_token(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}
