//! Rename pass.
//!
//! Builds the preview mapping and performs the sequential in-place rename
//! over the working set. Each entry is attempted independently: a failure
//! is logged and counted but never stops the batch.

use crate::core::naming::render_name;
use crate::core::workset::WorkingSet;
use crate::models::entry::{split_extension, FileEntry};
use crate::models::rule::{EpisodeSelection, RuleFields};
use crate::utils::oplog::OpLog;
use crate::Result;
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// One row of the preview mapping.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PreviewRow {
    /// Original filename.
    pub original: String,
    /// Computed new filename.
    pub renamed: String,
}

/// Compute the original -> new mapping for the whole set without touching
/// the filesystem.
pub fn build_preview(set: &WorkingSet, rule_text: &str, fields: &RuleFields) -> Vec<PreviewRow> {
    set.entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| PreviewRow {
            original: entry.filename.clone(),
            renamed: render_name(entry, index, rule_text, fields, set.selection()),
        })
        .collect()
}

/// Outcome counters for one rename pass.
#[derive(Debug, Default)]
pub struct RenameReport {
    /// Entries renamed (or already at their target name).
    pub succeeded: usize,
    /// Entries whose rename failed.
    pub failed: usize,
}

/// Rename every entry in the set's current order, one log line per attempt
/// plus a final summary line.
pub fn execute(
    set: &WorkingSet,
    rule_text: &str,
    fields: &RuleFields,
    log: &OpLog,
) -> RenameReport {
    let mut report = RenameReport::default();

    let pb = ProgressBar::new(set.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    for (index, entry) in set.entries().iter().enumerate() {
        pb.set_message(entry.filename.clone());

        match rename_entry(entry, index, rule_text, fields, set.selection()) {
            Ok(new_name) => {
                report.succeeded += 1;
                log.append(&format!("Renamed: {} -> {}", entry.filename, new_name));
            }
            Err(e) => {
                report.failed += 1;
                tracing::warn!("Rename failed for {}: {}", entry.filename, e);
                log.append(&format!("Rename failed: {} - {}", entry.filename, e));
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    log.append(&format!(
        "Batch complete: {} succeeded, {} failed",
        report.succeeded, report.failed
    ));

    report
}

/// Rename one entry in place within its directory.
///
/// When the computed target already exists and is not the source itself, a
/// `_<YYYYMMDDHHMMSS>` suffix is inserted before the extension and the
/// rename is retried exactly once; a second collision surfaces as the
/// rename error.
fn rename_entry(
    entry: &FileEntry,
    index: usize,
    rule_text: &str,
    fields: &RuleFields,
    selection: &EpisodeSelection,
) -> Result<String> {
    let mut new_name = render_name(entry, index, rule_text, fields, selection);

    let directory = entry
        .path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let mut new_path = directory.join(&new_name);

    if new_path == entry.path {
        return Ok(new_name);
    }

    if new_path.exists() {
        let timestamp = Local::now().format("%Y%m%d%H%M%S");
        let (stem, ext) = split_extension(&new_name);
        let suffixed = format!("{}_{}{}", stem, timestamp, ext);
        new_name = suffixed;
        new_path = directory.join(&new_name);
    }

    std::fs::rename(&entry.path, &new_path)?;

    Ok(new_name)
}
