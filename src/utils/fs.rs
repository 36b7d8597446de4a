//! File system utilities.

use std::path::Path;

/// Supported video file extensions.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "wmv", "flv", "ts"];

/// Get file extension in lowercase.
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

/// Check if a file is a video file based on extension.
pub fn is_video_file(path: &Path) -> bool {
    get_extension(path)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Format a byte count for display.
pub fn format_file_size(size_bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let size = size_bytes as f64;
    if size < KB {
        format!("{} B", size_bytes)
    } else if size < MB {
        format!("{:.2} KB", size / KB)
    } else if size < GB {
        format!("{:.2} MB", size / MB)
    } else {
        format!("{:.2} GB", size / GB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_is_video_file() {
        assert!(is_video_file(&PathBuf::from("movie.mkv")));
        assert!(is_video_file(&PathBuf::from("movie.MP4")));
        assert!(is_video_file(&PathBuf::from("stream.ts")));
        assert!(!is_video_file(&PathBuf::from("movie.txt")));
        assert!(!is_video_file(&PathBuf::from("movie")));
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.00 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.00 GB");
    }
}
