//! Canonical text form for question comparison.
//!
//! Raw text is never compared directly. Both the user query and every
//! stored question are reduced first: digits and punctuation dropped,
//! lowercased, split on Unicode word boundaries, each token stemmed,
//! stems joined with single spaces.

use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

/// Reduces text to its canonical comparable form.
///
/// Owns the stemmer; create one per process and share by reference.
pub struct TextNormalizer {
    stemmer: Stemmer,
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Normalize `text` for matching.
    ///
    /// Steps, in order: strip ASCII digits, strip ASCII punctuation,
    /// lowercase and trim, tokenize on word boundaries, stem each token,
    /// join with single spaces. Pure function of the input; empty and
    /// all-punctuation input normalize to the empty string.
    pub fn normalize(&self, text: &str) -> String {
        let cleaned: String = text
            .chars()
            .filter(|c| !c.is_ascii_digit() && !c.is_ascii_punctuation())
            .collect();
        let cleaned = cleaned.to_lowercase();

        cleaned
            .trim()
            .unicode_words()
            .map(|word| self.stemmer.stem(word).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
