//! Compositing laid out word images into a single canvas.

use std::path::Path;

use image::{ImageFormat, RgbaImage, imageops};

use crate::Result;
use crate::layout::Layout;

/// How a canvas combines with whatever it is drawn onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Source pixels replace destination pixels, alpha included.
    #[default]
    None,
    /// Source is alpha-blended over the destination.
    Blend,
}

/// An RGBA image handed to the caller along with the blend mode it expects.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    blend: BlendMode,
}

impl Canvas {
    /// A fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            blend: BlendMode::None,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn blend_mode(&self) -> BlendMode {
        self.blend
    }

    pub fn set_blend_mode(&mut self, blend: BlendMode) {
        self.blend = blend;
    }

    /// Draw this canvas onto `target` with its top-left corner at `(x, y)`,
    /// honouring the canvas blend mode. Parts outside `target` are clipped.
    pub fn draw_onto(&self, target: &mut RgbaImage, x: i64, y: i64) {
        match self.blend {
            BlendMode::None => imageops::replace(target, &self.image, x, y),
            BlendMode::Blend => imageops::overlay(target, &self.image, x, y),
        }
    }

    /// Encode the canvas as PNG at `path`.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

/// Blit every word of `layout` onto a new canvas.
///
/// Words are copied without blending so overlapping glyph boxes overwrite
/// cleanly, alpha channel included. The finished canvas is switched to
/// alpha blending for whoever draws it next.
pub fn compose(layout: &Layout) -> Canvas {
    let mut canvas = Canvas::new(layout.width, layout.height);
    let mut y = 0i64;
    for line in &layout.lines {
        for word in &line.words {
            imageops::replace(&mut canvas.image, &*word.image, i64::from(word.x), y);
        }
        y += i64::from(layout.line_skip);
    }
    canvas.set_blend_mode(BlendMode::Blend);
    canvas
}
