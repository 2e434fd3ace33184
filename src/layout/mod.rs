//! Greedy line layout over cached word images.
//!
//! Two bounded-mode strategies share one packer. Rendering joins words with
//! the kerning-aware gap and places an over-wide word on its own line anyway;
//! measuring joins words with the flat space advance and rejects a word that
//! cannot fit on any line. The two can disagree by a few pixels, so callers
//! must not expect `measure` to predict `layout_for_render` exactly.

use std::rc::Rc;

use image::RgbaImage;

use crate::atlas::FontAtlas;
use crate::font::{RasterBackend, TextSize};
use crate::render::{Canvas, compose};
use crate::text::split_words;
use crate::{Error, Result};

/// How adjacent words are joined and what happens to a word wider than the
/// budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakStrategy {
    /// Kerning-aware join width; over-wide words are placed regardless.
    Kerned,
    /// Flat space advance; an over-wide word fails the layout.
    FlatAdvance,
}

impl BreakStrategy {
    fn join_width<B: RasterBackend>(self, atlas: &FontAtlas<B>, left: &str, right: &str) -> i32 {
        match self {
            Self::Kerned => atlas.join_width(left, right),
            Self::FlatAdvance => atlas.space_advance(),
        }
    }
}

/// One line produced by the packer: words `start..start + gaps.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSpan {
    /// Index of the first word on the line.
    pub start: usize,
    /// Gap inserted before each word on the line; the first is always 0.
    pub gaps: Vec<i32>,
    /// Running width: word widths plus gaps.
    pub width: i32,
}

impl LineSpan {
    /// Number of words on the line.
    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }
}

/// Pack `words` (with pixel `widths`) into lines under `max_width`.
///
/// A word joins the current line only when the new line width stays strictly
/// below the budget. `None` means unbounded: every word lands on one line.
pub fn break_lines<B: RasterBackend>(
    atlas: &FontAtlas<B>,
    words: &[&str],
    widths: &[i32],
    max_width: Option<u32>,
    strategy: BreakStrategy,
) -> Result<Vec<LineSpan>> {
    let budget = max_width.map(i64::from);
    let mut lines: Vec<LineSpan> = Vec::new();

    for (n, (&word, &width)) in words.iter().zip(widths).enumerate() {
        if let Some(line) = lines.last_mut() {
            let join = strategy.join_width(atlas, words[n - 1], word);
            let candidate = line.width + join + width;
            if budget.is_none_or(|max| i64::from(candidate) < max) {
                line.gaps.push(join);
                line.width = candidate;
                continue;
            }
        }

        if let (BreakStrategy::FlatAdvance, Some(max)) = (strategy, max_width) {
            if i64::from(width) >= i64::from(max) {
                return Err(Error::WordTooWide {
                    word: word.to_owned(),
                    width: width.max(0) as u32,
                    max_width: max,
                });
            }
        }
        lines.push(LineSpan {
            start: n,
            gaps: vec![0],
            width,
        });
    }

    Ok(lines)
}

/// A word image positioned on its line.
#[derive(Debug, Clone)]
pub struct PlacedWord {
    pub image: Rc<RgbaImage>,
    /// Gap inserted between the previous word and this one.
    pub gap: i32,
    /// Horizontal offset from the line start.
    pub x: i32,
}

#[derive(Debug, Clone, Default)]
pub struct Line {
    pub words: Vec<PlacedWord>,
    pub width: i32,
}

/// Line-broken word images ready for compositing.
#[derive(Debug, Clone)]
pub struct Layout {
    pub lines: Vec<Line>,
    /// Canvas width: the widest line.
    pub width: u32,
    /// Canvas height: line count times line skip, or one font height when
    /// there is nothing to draw.
    pub height: u32,
    /// Vertical distance between line origins.
    pub line_skip: u32,
}

impl Layout {
    /// A layout with no lines and a zero-width canvas `height` pixels tall.
    pub fn empty(height: u32, line_skip: u32) -> Self {
        Self {
            lines: Vec::new(),
            width: 0,
            height,
            line_skip,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn size(&self) -> TextSize {
        TextSize::new(self.width, self.height)
    }
}

impl<B: RasterBackend> FontAtlas<B> {
    /// Break `text` into lines of cached word images.
    ///
    /// Words are joined with the kerning-aware gap. With a budget, a word
    /// wider than `max_width` still gets its own line, so the result may be
    /// wider than requested.
    pub fn layout_for_render(&mut self, text: &str, max_width: Option<u32>) -> Result<Layout> {
        let words = split_words(text);
        if words.is_empty() {
            return Ok(Layout::empty(self.font_height(), self.line_skip()));
        }

        let images = words
            .iter()
            .map(|w| self.word(w))
            .collect::<Result<Vec<_>>>()?;
        let widths: Vec<i32> = images.iter().map(|img| img.width() as i32).collect();
        let spans = break_lines(self, &words, &widths, max_width, BreakStrategy::Kerned)?;

        let lines: Vec<Line> = spans
            .iter()
            .map(|span| {
                let mut x = 0;
                let words = span
                    .gaps
                    .iter()
                    .enumerate()
                    .map(|(m, &gap)| {
                        let image = Rc::clone(&images[span.start + m]);
                        x += gap;
                        let placed = PlacedWord { image, gap, x };
                        x += widths[span.start + m];
                        placed
                    })
                    .collect();
                Line {
                    words,
                    width: span.width,
                }
            })
            .collect();

        let line_skip = self.line_skip();
        let width = lines.iter().map(|l| l.width).max().unwrap_or(0).max(0) as u32;
        let height = line_skip * lines.len() as u32;
        Ok(Layout {
            lines,
            width,
            height,
            line_skip,
        })
    }

    /// Lay out and composite `text` into a new canvas owned by the caller.
    pub fn render_text(&mut self, text: &str, max_width: Option<u32>) -> Result<Canvas> {
        let layout = self.layout_for_render(text, max_width)?;
        Ok(compose(&layout))
    }

    /// Size `text` would need, without compositing.
    ///
    /// Unbounded mode asks the backend for the single-line size. Bounded
    /// mode packs words joined by the flat space advance and fails with
    /// [`Error::WordTooWide`] when a word meets or exceeds `max_width`.
    pub fn measure(&mut self, text: &str, max_width: Option<u32>) -> Result<TextSize> {
        if max_width.is_none() {
            return self
                .backend()
                .text_size(text)
                .inspect_err(|e| log::warn!("measure: size query for {text:?} failed: {e}"));
        }

        let words = split_words(text);
        if words.is_empty() {
            return Ok(TextSize::default());
        }

        let widths = words
            .iter()
            .map(|w| self.word(w).map(|img| img.width() as i32))
            .collect::<Result<Vec<_>>>()?;
        let spans = break_lines(self, &words, &widths, max_width, BreakStrategy::FlatAdvance)?;

        let width = spans.iter().map(|s| s.width).max().unwrap_or(0).max(0) as u32;
        Ok(TextSize::new(
            width,
            spans.len() as u32 * self.line_skip(),
        ))
    }

    /// Width of the widest single word, each sized on its own.
    ///
    /// This is the smallest budget under which bounded layout can succeed
    /// without splitting words.
    pub fn minimum_width(&self, text: &str) -> Result<u32> {
        split_words(text).iter().try_fold(0, |widest, word| -> Result<u32> {
            let size = self.backend().text_size(word)?;
            Ok(widest.max(size.width))
        })
    }
}
