//! Configuration structures and loading logic.

mod io;

pub use io::{config_dir, config_path, parse_hex_color};

use std::path::PathBuf;

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::atlas::DEFAULT_COLOR;
use crate::cache::DEFAULT_MAX_ENTRIES;

pub const DEFAULT_FONT_SIZE: f32 = 16.0;
pub const MIN_FONT_SIZE: f32 = 6.0;
pub const MAX_FONT_SIZE: f32 = 128.0;

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub font: FontConfig,
    pub text: TextConfig,
    pub cache: CacheConfig,
}

/// Font file and size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font file to open. Discovered from the system font directories when
    /// unset.
    pub path: Option<PathBuf>,
    /// Size in pixels per em.
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl FontConfig {
    /// Returns `size` clamped to [`MIN_FONT_SIZE`, `MAX_FONT_SIZE`].
    pub fn effective_size(&self) -> f32 {
        self.size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
    }
}

/// Text style and wrapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Text colour as "#RRGGBB" or "#RGB" hex.
    pub color: String,
    /// Default line width budget in pixels. Unset means a single line.
    pub max_width: Option<u32>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            color: "#FFFFFF".to_owned(),
            max_width: None,
        }
    }
}

impl TextConfig {
    /// Parsed text colour, opaque. Falls back to white on invalid input.
    pub fn rgba(&self) -> Rgba<u8> {
        parse_hex_color(&self.color).unwrap_or_else(|| {
            log::warn!("config: invalid text color {:?}, using white", self.color);
            DEFAULT_COLOR
        })
    }
}

/// Word cache sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Entry count above which the whole cache is flushed.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
        }
    }
}
