//! File collection module.
//!
//! Resolves the sources given on the command line into concrete video file
//! paths: explicit files are kept when they carry a video extension,
//! directories are walked and filtered.

use crate::utils::fs::is_video_file;
use crate::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Resolve a mixed list of files and directories into video file paths.
///
/// Missing sources are an error; non-video files given explicitly are
/// skipped silently, matching the behavior of a filtered file dialog.
pub fn collect_files(sources: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for source in sources {
        if !source.exists() {
            return Err(crate::Error::PathNotFound(source.display().to_string()));
        }
        if source.is_dir() {
            files.extend(scan_directory(source)?);
        } else if is_video_file(source) {
            files.push(source.clone());
        } else {
            tracing::debug!("Skipping non-video file: {}", source.display());
        }
    }

    Ok(files)
}

/// Walk a directory tree and return every video file in it.
pub fn scan_directory(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file() && is_video_file(entry.path()) {
            files.push(entry.path().to_path_buf());
        }
    }

    tracing::info!("Scanned {}: {} video files", path.display(), files.len());

    Ok(files)
}
