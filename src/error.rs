//! Crate error type.

use std::path::PathBuf;

/// Errors produced while opening fonts, rasterizing, laying out or saving text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The font file could not be opened or parsed.
    #[error("font not found: {message}")]
    FontNotFound { path: PathBuf, message: String },

    /// The rasterization backend failed to render, size or measure text.
    #[error("rasterization failed: {0}")]
    Raster(String),

    /// A single word meets or exceeds the width budget, so no line can hold it.
    #[error("word {word:?} is {width}px wide but the line budget is {max_width}px")]
    WordTooWide {
        word: String,
        width: u32,
        max_width: u32,
    },

    /// The configuration file could not be read or parsed.
    #[error("config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
