//! Deterministic test backend: every glyph is a solid block of fixed width.

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use image::{Rgba, RgbaImage};

use super::{GlyphMetrics, RasterBackend, TextSize};
use crate::{Error, Result};

pub(crate) struct FixedBackend {
    pub glyph_width: u32,
    pub space_advance: i32,
    pub space_min_x: i32,
    pub height: u32,
    pub line_skip: u32,
    pub kerning: HashMap<(u32, u32), i32>,
    /// Words whose rendering and sizing fail.
    pub failing: HashSet<String>,
    renders: Cell<usize>,
}

impl FixedBackend {
    pub fn new() -> Self {
        Self {
            glyph_width: 8,
            space_advance: 4,
            space_min_x: 0,
            height: 10,
            line_skip: 12,
            kerning: HashMap::new(),
            failing: HashSet::new(),
            renders: Cell::new(0),
        }
    }

    pub fn with_kerning(mut self, left: char, right: char, adjust: i32) -> Self {
        self.kerning.insert((left as u32, right as u32), adjust);
        self
    }

    pub fn failing_on(mut self, word: &str) -> Self {
        self.failing.insert(word.to_owned());
        self
    }

    /// Number of `render_word` calls so far.
    pub fn renders(&self) -> usize {
        self.renders.get()
    }

    /// Pixel width of `word` as rendered by this backend.
    pub fn width_of(&self, word: &str) -> u32 {
        word.chars().count() as u32 * self.glyph_width
    }

    fn check(&self, text: &str) -> Result<()> {
        if self.failing.contains(text) {
            return Err(Error::Raster(format!("refusing to rasterize {text:?}")));
        }
        Ok(())
    }
}

impl RasterBackend for FixedBackend {
    fn glyph_metrics(&self, codepoint: u32) -> Result<GlyphMetrics> {
        if codepoint == ' ' as u32 {
            Ok(GlyphMetrics {
                min_x: self.space_min_x,
                advance: self.space_advance,
            })
        } else {
            Ok(GlyphMetrics {
                min_x: 0,
                advance: self.glyph_width as i32,
            })
        }
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn line_skip(&self) -> u32 {
        self.line_skip
    }

    fn kerning(&self, left: u32, right: u32) -> i32 {
        self.kerning.get(&(left, right)).copied().unwrap_or(0)
    }

    fn render_word(&self, word: &str, color: Rgba<u8>) -> Result<RgbaImage> {
        self.check(word)?;
        self.renders.set(self.renders.get() + 1);
        Ok(RgbaImage::from_pixel(
            self.width_of(word),
            self.height,
            color,
        ))
    }

    fn text_size(&self, text: &str) -> Result<TextSize> {
        self.check(text)?;
        let width: i32 = text
            .chars()
            .map(|ch| {
                if ch == ' ' {
                    self.space_advance
                } else {
                    self.glyph_width as i32
                }
            })
            .sum();
        Ok(TextSize::new(width.max(0) as u32, self.height))
    }
}
