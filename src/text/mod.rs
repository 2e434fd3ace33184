//! Byte-level text helpers: UTF-8 codepoint extraction and word splitting.
//!
//! Both are used by the layout engine on already tokenized words, so the
//! decoder only ever sees short, valid fragments.

mod decode;
mod tokenize;

pub use decode::{SPACE, decode, first_codepoint, is_continuation, last_codepoint};
pub use tokenize::split_words;

#[cfg(test)]
mod tests;
