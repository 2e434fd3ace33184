//! Whitespace tokenizer for line wrapping.

/// Split `text` on the space character into non-empty words.
///
/// Runs of spaces, and leading or trailing spaces, produce no empty words.
/// Only U+0020 separates words; other whitespace stays part of a word.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}
