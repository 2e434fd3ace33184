//! Glyph rasterization service: the backend seam the layout engine calls into.
//!
//! `RasterBackend` is the contract the core depends on (metrics, kerning,
//! word rasterization, whole-string sizing). `FontdueBackend` is the
//! production implementation; `discovery` finds a usable font file when none
//! is configured.

pub mod discovery;
mod fontdue_backend;

#[cfg(test)]
pub(crate) mod fixed;

pub use fontdue_backend::FontdueBackend;

use image::{Rgba, RgbaImage};

use crate::Result;

/// Horizontal metrics of a single glyph, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphMetrics {
    /// Distance from the pen position to the leftmost inked pixel.
    pub min_x: i32,
    /// Pen advance after drawing the glyph.
    pub advance: i32,
}

/// Pixel dimensions of a piece of laid out text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSize {
    pub width: u32,
    pub height: u32,
}

impl TextSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A font opened at a fixed size, able to rasterize and measure text.
///
/// Codepoints are plain `u32` values as produced by [`crate::text::decode`].
/// Implementations own the underlying font resource and release it on drop.
pub trait RasterBackend {
    /// Metrics of the glyph for `codepoint`.
    fn glyph_metrics(&self, codepoint: u32) -> Result<GlyphMetrics>;

    /// Font height (ascent to descent) in pixels.
    fn height(&self) -> u32;

    /// Recommended distance between consecutive baselines in pixels.
    fn line_skip(&self) -> u32;

    /// Kerning adjustment between two codepoints; 0 when the font has none.
    fn kerning(&self, left: u32, right: u32) -> i32;

    /// Rasterize `word` in `color` onto a transparent image one font height
    /// tall.
    fn render_word(&self, word: &str, color: Rgba<u8>) -> Result<RgbaImage>;

    /// Size `text` would occupy rendered on a single line.
    fn text_size(&self, text: &str) -> Result<TextSize>;
}
