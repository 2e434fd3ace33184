//! Word image cache with a full-flush size bound.
//!
//! Maps a word (byte-exact, case-sensitive) to the image the rasterizer
//! produced for it. There is no recency tracking: once the entry count
//! exceeds the threshold, the next lookup drops every entry first.

use std::collections::HashMap;
use std::rc::Rc;

use image::{Rgba, RgbaImage};

use crate::Result;
use crate::font::RasterBackend;

/// Entry count above which the cache is flushed.
pub const DEFAULT_MAX_ENTRIES: usize = 40_000;

/// Memoizes word rasterization for one font and colour.
///
/// Images are created only here and never mutated. Lookups hand out shared
/// handles, so a layout that is still holding images stays valid when a
/// later lookup flushes the cache.
#[derive(Debug)]
pub struct WordCache {
    words: HashMap<String, Rc<RgbaImage>>,
    max_entries: usize,
}

impl WordCache {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_MAX_ENTRIES)
    }

    /// Create a cache that flushes once it holds more than `max_entries`.
    pub fn with_threshold(max_entries: usize) -> Self {
        Self {
            words: HashMap::new(),
            max_entries,
        }
    }

    /// Return the image for `word`, rasterizing it through `backend` on a miss.
    ///
    /// Failed renders are not cached.
    pub fn get_or_render<B: RasterBackend + ?Sized>(
        &mut self,
        backend: &B,
        word: &str,
        color: Rgba<u8>,
    ) -> Result<Rc<RgbaImage>> {
        if self.words.len() > self.max_entries {
            log::debug!(
                "word cache: {} entries over limit {}, flushing",
                self.words.len(),
                self.max_entries
            );
            self.clear();
        }

        if let Some(image) = self.words.get(word) {
            return Ok(Rc::clone(image));
        }

        log::trace!("word cache: rasterizing {word:?}");
        let image = backend
            .render_word(word, color)
            .inspect_err(|e| log::warn!("word cache: failed to rasterize {word:?}: {e}"))?;
        let image = Rc::new(image);
        self.words.insert(word.to_owned(), Rc::clone(&image));
        Ok(image)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` currently has a cached image.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Flush threshold.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Release every cached image.
    pub fn clear(&mut self) {
        self.words.clear();
    }
}

impl Default for WordCache {
    fn default() -> Self {
        Self::new()
    }
}
