//! Word-cached text rasterization with kerning-aware line wrapping.
//!
//! A [`FontAtlas`] owns one font at a fixed size and colour. Text is split
//! into words, each word is rasterized once and cached, and the cached images
//! are packed greedily into lines under an optional pixel width budget before
//! being composited into a single [`Canvas`].

pub mod atlas;
pub mod cache;
pub mod config;
mod error;
pub mod font;
pub mod layout;
pub mod render;
pub mod text;

pub use atlas::FontAtlas;
pub use error::{Error, Result};
pub use font::{FontdueBackend, GlyphMetrics, RasterBackend, TextSize};
pub use layout::{BreakStrategy, Layout};
pub use render::{BlendMode, Canvas};
