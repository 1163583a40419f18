use std::fs;
use std::path::Path;

use color_eyre::{Result, eyre::WrapErr};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookInfo {
    pub title: String,
    pub char_count: usize,
    /// Lines that are not blank.
    pub line_count: usize,
}

impl BookInfo {
    pub fn from_document(path: &Path, document: &str) -> Self {
        let title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            title,
            char_count: document.chars().count(),
            line_count: document.split('\n').filter(|l| !l.trim().is_empty()).count(),
        }
    }
}

/// Reads a text file as UTF-8.
///
/// A leading byte-order mark is dropped. Invalid sequences are replaced
/// rather than rejected; a warning is logged when that happens since the
/// file is then likely in another encoding.
pub fn load_document(path: &Path) -> Result<String> {
    let raw = fs::read(path).wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let bytes = raw.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&raw);
    let document = String::from_utf8_lossy(bytes).into_owned();
    if document.contains(char::REPLACEMENT_CHARACTER) {
        warn!(
            path = %path.display(),
            "file contains invalid UTF-8, it may use another encoding such as GBK"
        );
    }
    Ok(document)
}
