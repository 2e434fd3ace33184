//! Font context: one opened font, its derived spacing metrics, and the word
//! cache built on top of it.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use image::{Rgba, RgbaImage};

use crate::cache::WordCache;
use crate::config::Config;
use crate::font::discovery::find_default_font;
use crate::font::{FontdueBackend, GlyphMetrics, RasterBackend};
use crate::text::{SPACE, first_codepoint, last_codepoint};
use crate::{Error, Result};

/// Colour words are rendered in unless configured otherwise.
pub const DEFAULT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// A font at a fixed size and colour, plus the cache of words rendered with it.
///
/// Owns the backend (and with it the font resource) and every cached word
/// image; both are released when the atlas is dropped. Not meant for
/// concurrent use: one atlas per font/style, driven from one thread.
pub struct FontAtlas<B: RasterBackend = FontdueBackend> {
    backend: B,
    space: GlyphMetrics,
    color: Rgba<u8>,
    cache: WordCache,
}

impl FontAtlas<FontdueBackend> {
    /// Open the font at `path` at `size` pixels.
    pub fn open(path: impl AsRef<Path>, size: f32) -> Result<Self> {
        let backend = FontdueBackend::open(path.as_ref(), size)?;
        Self::with_backend(backend)
    }

    /// Build an atlas from configuration, discovering a font when no path is set.
    pub fn from_config(config: &Config) -> Result<Self> {
        let path = match config.font.path.clone() {
            Some(path) => path,
            None => find_default_font().ok_or_else(|| Error::FontNotFound {
                path: PathBuf::new(),
                message: "no font configured and no system font discovered".to_owned(),
            })?,
        };
        Ok(Self::open(path, config.font.effective_size())?
            .with_color(config.text.rgba())
            .with_cache_threshold(config.cache.max_entries))
    }
}

impl<B: RasterBackend> FontAtlas<B> {
    /// Wrap an already opened backend, reading the space glyph metrics once.
    pub fn with_backend(backend: B) -> Result<Self> {
        let space = backend.glyph_metrics(SPACE)?;
        Ok(Self {
            backend,
            space,
            color: DEFAULT_COLOR,
            cache: WordCache::new(),
        })
    }

    /// Render words in `color` from now on. Drops previously cached words.
    #[must_use]
    pub fn with_color(mut self, color: Rgba<u8>) -> Self {
        self.color = color;
        self.cache.clear();
        self
    }

    /// Flush the word cache once it holds more than `max_entries` words.
    #[must_use]
    pub fn with_cache_threshold(mut self, max_entries: usize) -> Self {
        self.cache = WordCache::with_threshold(max_entries);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn cache(&self) -> &WordCache {
        &self.cache
    }

    pub fn color(&self) -> Rgba<u8> {
        self.color
    }

    /// Font height in pixels.
    pub fn font_height(&self) -> u32 {
        self.backend.height()
    }

    /// Distance between consecutive lines in pixels.
    pub fn line_skip(&self) -> u32 {
        self.backend.line_skip()
    }

    /// Advance width of the space glyph.
    pub fn space_advance(&self) -> i32 {
        self.space.advance
    }

    /// Left inset of the space glyph.
    pub fn space_min_x(&self) -> i32 {
        self.space.min_x
    }

    /// Cached image for `word`, rasterizing it on a miss.
    pub fn word(&mut self, word: &str) -> Result<Rc<RgbaImage>> {
        self.cache.get_or_render(&self.backend, word, self.color)
    }

    /// Kerning between the last character of `word` and a following space.
    pub fn left_kerning(&self, word: &str) -> i32 {
        self.backend.kerning(last_codepoint(word), SPACE)
    }

    /// Kerning between a preceding space and the first character of `word`.
    pub fn right_kerning(&self, word: &str) -> i32 {
        self.backend.kerning(SPACE, first_codepoint(word))
    }

    /// Gap the rasterizer would leave for a single space between two words.
    pub fn join_width(&self, left: &str, right: &str) -> i32 {
        self.left_kerning(left) + self.space.advance + self.right_kerning(right)
    }

    /// Release every cached word image.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl<B: RasterBackend> Drop for FontAtlas<B> {
    fn drop(&mut self) {
        log::debug!("font atlas: releasing {} cached words", self.cache.len());
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::fixed::FixedBackend;

    #[test]
    fn space_metrics_read_at_construction() {
        let mut backend = FixedBackend::new();
        backend.space_advance = 5;
        backend.space_min_x = 1;
        let atlas = FontAtlas::with_backend(backend).expect("atlas");
        assert_eq!(atlas.space_advance(), 5);
        assert_eq!(atlas.space_min_x(), 1);
    }

    #[test]
    fn join_width_without_kerning_is_space_advance() {
        let atlas = FontAtlas::with_backend(FixedBackend::new()).expect("atlas");
        assert_eq!(atlas.join_width("hello", "world"), 4);
    }

    #[test]
    fn join_width_uses_boundary_kerning() {
        let backend = FixedBackend::new()
            .with_kerning('o', ' ', -1)
            .with_kerning(' ', 'W', -2)
            .with_kerning(' ', 'w', 3);
        let atlas = FontAtlas::with_backend(backend).expect("atlas");
        assert_eq!(atlas.left_kerning("hello"), -1);
        assert_eq!(atlas.right_kerning("World"), -2);
        assert_eq!(atlas.join_width("hello", "World"), -1 + 4 - 2);
        assert_eq!(atlas.join_width("hello", "world"), -1 + 4 + 3);
    }

    #[test]
    fn kerning_sees_multibyte_boundaries() {
        let backend = FixedBackend::new()
            .with_kerning('€', ' ', 2)
            .with_kerning(' ', 'é', -3);
        let atlas = FontAtlas::with_backend(backend).expect("atlas");
        assert_eq!(atlas.join_width("10€", "été"), 2 + 4 - 3);
    }

    #[test]
    fn color_change_drops_cached_words() {
        let mut atlas = FontAtlas::with_backend(FixedBackend::new()).expect("atlas");
        atlas.word("cached").expect("render");
        assert_eq!(atlas.cache().len(), 1);

        let red = Rgba([255, 0, 0, 255]);
        let mut atlas = atlas.with_color(red);
        assert!(atlas.cache().is_empty());
        let image = atlas.word("cached").expect("render");
        assert_eq!(*image.get_pixel(0, 0), red);
        assert_eq!(atlas.color(), red);
    }

    #[test]
    fn cache_threshold_is_configurable() {
        let atlas = FontAtlas::with_backend(FixedBackend::new())
            .expect("atlas")
            .with_cache_threshold(10);
        assert_eq!(atlas.cache().max_entries(), 10);
    }

    #[test]
    fn clear_empties_cache() {
        let mut atlas = FontAtlas::with_backend(FixedBackend::new()).expect("atlas");
        atlas.word("a").expect("render");
        atlas.word("b").expect("render");
        atlas.clear();
        assert!(atlas.cache().is_empty());
        assert_eq!(atlas.backend().renders(), 2);
    }

    #[test]
    fn metrics_come_from_backend() {
        let atlas = FontAtlas::with_backend(FixedBackend::new()).expect("atlas");
        assert_eq!(atlas.font_height(), 10);
        assert_eq!(atlas.line_skip(), 12);
    }

    #[test]
    fn open_missing_font_fails() {
        let err = FontAtlas::open("/nonexistent/font.ttf", 16.0)
            .err()
            .expect("must fail");
        assert!(matches!(err, Error::FontNotFound { .. }));
    }
}
