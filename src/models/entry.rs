//! File entry model.

use crate::core::workset::extract_numeric_tokens;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One selected media file in the working set.
///
/// Size and numeric tokens are captured once when the entry is created and
/// never refreshed; an entry goes stale if the file changes on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Full path to the file. Unique key within the working set.
    pub path: PathBuf,
    /// File name without path, extension included.
    pub filename: String,
    /// Extension with its leading dot, empty when the name has none.
    pub extension: String,
    /// File size in bytes, read at add time.
    pub size: u64,
    /// Maximal digit runs in the filename, left to right, original text
    /// preserved so leading zeros survive.
    pub numeric_tokens: Vec<String>,
}

impl FileEntry {
    /// Build an entry from a path, reading its size from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path)?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let extension = split_extension(&filename).1.to_string();
        let numeric_tokens = extract_numeric_tokens(&filename);

        Ok(Self {
            path: path.to_path_buf(),
            filename,
            extension,
            size: metadata.len(),
            numeric_tokens,
        })
    }

    /// Filename with the extension stripped.
    pub fn stem(&self) -> &str {
        split_extension(&self.filename).0
    }
}

/// Split a filename into (stem, extension-with-dot) at the last dot.
///
/// Names starting with a dot and names without one keep the whole string as
/// the stem, matching `os.path.splitext` semantics.
pub fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => filename.split_at(idx),
        _ => (filename, ""),
    }
}
