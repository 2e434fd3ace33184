//! `fontdue`-backed rasterizer.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

use super::{GlyphMetrics, RasterBackend, TextSize};
use crate::{Error, Result};

/// A single font face loaded with `fontdue` and fixed to one pixel size.
pub struct FontdueBackend {
    font: fontdue::Font,
    px: f32,
    ascent: i32,
    height: u32,
    line_skip: u32,
}

/// A glyph positioned along the pen line of a string.
struct PlacedGlyph {
    ch: char,
    pen_x: f32,
}

impl FontdueBackend {
    /// Open the font file at `path` at `size` pixels per em.
    pub fn open(path: &Path, size: f32) -> Result<Self> {
        let data = std::fs::read(path).map_err(|e| Error::FontNotFound {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let backend = Self::from_bytes(data, size).map_err(|e| match e {
            Error::FontNotFound { message, .. } => Error::FontNotFound {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
        log::debug!("font: opened {} at {size}px", path.display());
        Ok(backend)
    }

    /// Parse an in-memory font file. Errors carry an empty path.
    pub fn from_bytes(data: Vec<u8>, size: f32) -> Result<Self> {
        let unparsable = |message: String| Error::FontNotFound {
            path: PathBuf::new(),
            message,
        };
        let settings = fontdue::FontSettings {
            scale: size,
            ..fontdue::FontSettings::default()
        };
        let font = fontdue::Font::from_bytes(data, settings)
            .map_err(|e| unparsable(e.to_owned()))?;
        let lm = font
            .horizontal_line_metrics(size)
            .ok_or_else(|| unparsable("font has no horizontal line metrics".to_owned()))?;
        let ascent = lm.ascent.ceil() as i32;
        let height = (lm.ascent - lm.descent).ceil().max(1.0) as u32;
        let line_skip = lm.new_line_size.ceil().max(height as f32) as u32;
        Ok(Self {
            font,
            px: size,
            ascent,
            height,
            line_skip,
        })
    }

    /// Pen positions for every character of `text`, with pair kerning, plus
    /// the final pen position.
    fn place(&self, text: &str) -> (Vec<PlacedGlyph>, f32) {
        let mut glyphs = Vec::with_capacity(text.len());
        let mut pen_x = 0.0f32;
        let mut prev: Option<char> = None;
        for ch in text.chars() {
            if let Some(p) = prev {
                pen_x += self.font.horizontal_kern(p, ch, self.px).unwrap_or(0.0);
            }
            glyphs.push(PlacedGlyph { ch, pen_x });
            pen_x += self.font.metrics(ch, self.px).advance_width;
            prev = Some(ch);
        }
        (glyphs, pen_x)
    }

    /// Width covering both the advance and any ink overhanging it.
    fn extent(&self, glyphs: &[PlacedGlyph], advance: f32) -> u32 {
        let ink = glyphs
            .iter()
            .map(|g| {
                let m = self.font.metrics(g.ch, self.px);
                g.pen_x.round() as i32 + m.xmin + m.width as i32
            })
            .max()
            .unwrap_or(0);
        (advance.ceil() as i32).max(ink).max(0) as u32
    }
}

impl RasterBackend for FontdueBackend {
    fn glyph_metrics(&self, codepoint: u32) -> Result<GlyphMetrics> {
        let ch = char::from_u32(codepoint)
            .ok_or_else(|| Error::Raster(format!("invalid codepoint U+{codepoint:04X}")))?;
        let m = self.font.metrics(ch, self.px);
        Ok(GlyphMetrics {
            min_x: m.xmin,
            advance: m.advance_width.round() as i32,
        })
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn line_skip(&self) -> u32 {
        self.line_skip
    }

    fn kerning(&self, left: u32, right: u32) -> i32 {
        match (char::from_u32(left), char::from_u32(right)) {
            (Some(l), Some(r)) => self
                .font
                .horizontal_kern(l, r, self.px)
                .map_or(0, |k| k.round() as i32),
            _ => 0,
        }
    }

    fn render_word(&self, word: &str, color: Rgba<u8>) -> Result<RgbaImage> {
        let (glyphs, advance) = self.place(word);
        let width = self.extent(&glyphs, advance);
        if width == 0 {
            return Err(Error::Raster(format!("text {word:?} has zero width")));
        }

        let mut image = RgbaImage::new(width, self.height);
        let [r, g, b, a] = color.0;
        for glyph in &glyphs {
            let (m, coverage) = self.font.rasterize(glyph.ch, self.px);
            if m.width == 0 {
                continue;
            }
            let left = glyph.pen_x.round() as i32 + m.xmin;
            let top = self.ascent - (m.ymin + m.height as i32);
            for (i, &cov) in coverage.iter().enumerate() {
                if cov == 0 {
                    continue;
                }
                let x = left + (i % m.width) as i32;
                let y = top + (i / m.width) as i32;
                if x < 0 || y < 0 || x >= width as i32 || y >= self.height as i32 {
                    continue;
                }
                let alpha = (u16::from(cov) * u16::from(a) / 255) as u8;
                let px = image.get_pixel_mut(x as u32, y as u32);
                // Overlapping glyph boxes keep the stronger coverage.
                if alpha > px.0[3] {
                    *px = Rgba([r, g, b, alpha]);
                }
            }
        }
        Ok(image)
    }

    fn text_size(&self, text: &str) -> Result<TextSize> {
        let (glyphs, advance) = self.place(text);
        Ok(TextSize::new(self.extent(&glyphs, advance), self.height))
    }
}
