//! Title tokenization.
//!
//! Deliberately naive: lowercase, then split on Unicode whitespace.
//! No stemming, no punctuation stripping, no locale-aware folding:
//! a word lookup finds exactly the whitespace-delimited tokens the
//! title contained.

/// Split `text` into lowercased words
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
