// file: src/parser/normalizer.rs
// description: term and text normalization (case folding plus transliteration to ascii)
// reference: https://docs.rs/deunicode, https://docs.rs/unicode-normalization

use deunicode::deunicode_with_tofu;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

pub struct TermNormalizer;

impl TermNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Lowercases and transliterates to ascii: accents are stripped, other
    /// scripts are romanized (`Москва` -> `moskva`), and characters with no
    /// ascii spelling are dropped. The output is lowercase ascii, so applying
    /// it twice gives the same result.
    pub fn normalize(&self, text: &str) -> String {
        let stripped: String = text
            .to_lowercase()
            .nfkd()
            .filter(|c| !is_combining_mark(*c))
            .collect();

        deunicode_with_tofu(&stripped, "").to_ascii_lowercase()
    }
}

impl Default for TermNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
