//! Append-only operation log.
//!
//! One `[YYYY-MM-DD HH:MM:SS] message` line per event, local time. The
//! file is never rotated or truncated.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Handle to the append-only operation log file.
#[derive(Debug, Clone)]
pub struct OpLog {
    path: PathBuf,
}

impl OpLog {
    /// Create a handle for the given log file. The file itself is created
    /// lazily on first append.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The log file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped line. Write failures are downgraded to a
    /// warning; logging never aborts the operation being logged.
    pub fn append(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("[{}] {}\n", timestamp, message);

        if let Err(e) = self.append_line(&line) {
            tracing::warn!("Failed to write log {}: {}", self.path.display(), e);
        }
    }

    fn append_line(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())
    }

    /// Last `lines` lines of the log, fewer when the file is shorter.
    pub fn tail(&self, lines: usize) -> std::io::Result<Vec<String>> {
        let content = std::fs::read_to_string(&self.path)?;
        let all: Vec<&str> = content.lines().collect();
        let start = all.len().saturating_sub(lines);
        Ok(all[start..].iter().map(|s| s.to_string()).collect())
    }
}
