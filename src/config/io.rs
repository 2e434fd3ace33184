//! Configuration file I/O: path resolution and loading.

use std::path::{Path, PathBuf};

use image::Rgba;

use super::Config;
use crate::{Error, Result};

/// Returns the platform-specific configuration directory for `word_atlas`.
pub fn config_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("word_atlas");
        }
        PathBuf::from(".").join("word_atlas")
    }
    #[cfg(not(target_os = "windows"))]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("word_atlas");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config").join("word_atlas");
        }
        PathBuf::from(".").join("word_atlas")
    }
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

impl Config {
    /// Reads and parses the config file at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: format!("failed to read: {e}"),
        })?;
        Self::parse(&data).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Loads config from `path`, returning defaults if the file doesn't
    /// exist or can't be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        let data = match std::fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("config: failed to read {}: {e}", path.display());
                }
                return Self::default();
            }
        };

        match Self::parse(&data) {
            Ok(cfg) => {
                log::debug!("config: loaded from {}", path.display());
                cfg
            }
            Err(e) => {
                log::warn!("config: parse error in {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Parses a TOML document.
    pub fn parse(data: &str) -> std::result::Result<Self, String> {
        toml::from_str(data).map_err(|e| e.to_string())
    }

    /// Serializes to a pretty TOML document.
    pub fn to_toml(&self) -> std::result::Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| e.to_string())
    }
}

/// Parse "#RRGGBB" or "#RGB" to an opaque colour. Returns None on invalid input.
pub fn parse_hex_color(s: &str) -> Option<Rgba<u8>> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    let bytes = hex.as_bytes();
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(std::str::from_utf8(&bytes[range]).ok()?, 16).ok()
    };
    match bytes.len() {
        6 => Some(Rgba([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255])),
        3 => Some(Rgba([
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
            255,
        ])),
        _ => None,
    }
}
