// src/document.rs
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::error::TokenStatsError;

/// Reads a document and terminates every line with `\n`. Invalid UTF-8
/// sequences become U+FFFD instead of failing the read.
pub fn load_document(path: &Path) -> Result<String, TokenStatsError> {
    let bytes = fs::read(path).map_err(|source| TokenStatsError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Read {} bytes from {}", bytes.len(), path.display());
    let raw = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = raw {
        warn!("{} is not valid UTF-8; replaced invalid bytes", path.display());
    }
    Ok(normalize_line_endings(&raw))
}

/// Rebuilds `raw` line by line so CRLF input reads the same as LF input and
/// the last line is always terminated.
pub fn normalize_line_endings(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len() + 1);
    for line in raw.lines() {
        text.push_str(line);
        text.push('\n');
    }
    text
}

pub fn save_report(path: &Path, report: &str) -> Result<(), TokenStatsError> {
    fs::write(path, report).map_err(|source| TokenStatsError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote report to {}", path.display());
    Ok(())
}
