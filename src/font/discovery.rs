//! Platform font discovery: finding a default text font on disk.
//!
//! Pure discovery: no font loading or rasterizing.

#[cfg(not(target_os = "windows"))]
use std::collections::HashMap;
use std::path::PathBuf;

/// Proportional text fonts to try on Windows, in priority order.
#[cfg(target_os = "windows")]
const FONT_PATHS: &[&str] = &[
    r"C:\Windows\Fonts\segoeui.ttf",
    r"C:\Windows\Fonts\tahoma.ttf",
    r"C:\Windows\Fonts\arial.ttf",
];

/// Proportional text font filenames to try elsewhere, in priority order.
#[cfg(not(target_os = "windows"))]
const FONT_NAMES: &[&str] = &[
    "DejaVuSans.ttf",
    "NotoSans-Regular.ttf",
    "LiberationSans-Regular.ttf",
    "Ubuntu-R.ttf",
    "Cantarell-Regular.otf",
    "FreeSans.ttf",
    "Arial.ttf",
    "Helvetica.ttc",
    // Monospace last resort
    "DejaVuSansMono.ttf",
    "LiberationMono-Regular.ttf",
];

/// Find a usable default font file.
#[cfg(target_os = "windows")]
pub fn find_default_font() -> Option<PathBuf> {
    FONT_PATHS
        .iter()
        .map(|p| PathBuf::from(*p))
        .find(|p| p.exists())
}

/// Find a usable default font file.
#[cfg(not(target_os = "windows"))]
pub fn find_default_font() -> Option<PathBuf> {
    let index = build_font_index();
    let found = find_font_path(FONT_NAMES, &index);
    match &found {
        Some(path) => log::debug!("font discovery: using {}", path.display()),
        None => log::warn!(
            "font discovery: none of {} candidate fonts found",
            FONT_NAMES.len()
        ),
    }
    found
}

#[cfg(not(target_os = "windows"))]
fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(home) = std::env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join(".fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    dirs.push(PathBuf::from("/usr/share/fonts"));
    dirs.push(PathBuf::from("/usr/local/share/fonts"));
    dirs.push(PathBuf::from("/Library/Fonts"));
    dirs.push(PathBuf::from("/System/Library/Fonts"));
    dirs
}

/// Build a filename → full path index by scanning all font directories once.
#[cfg(not(target_os = "windows"))]
fn build_font_index() -> HashMap<String, PathBuf> {
    let mut index = HashMap::new();
    for dir in font_dirs() {
        index_font_dir(&dir, &mut index);
    }
    index
}

#[cfg(not(target_os = "windows"))]
fn index_font_dir(dir: &std::path::Path, index: &mut HashMap<String, PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(_) => return,
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            index_font_dir(&path, index);
        } else if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            index.entry(name.to_owned()).or_insert(path);
        } else {
            // Non-UTF-8 filename, skip.
        }
    }
}

/// Look up the first candidate filename present in the index.
#[cfg(not(target_os = "windows"))]
fn find_font_path(names: &[&str], index: &HashMap<String, PathBuf>) -> Option<PathBuf> {
    names.iter().find_map(|name| index.get(*name).cloned())
}
