//! Integration tests for the rename pass.
//!
//! Tests cover:
//! - Renaming in place
//! - Collision handling with the timestamp suffix
//! - Per-entry failure isolation
//! - Operation log format

use media_renamer::core::renamer::{build_preview, execute};
use media_renamer::core::workset::WorkingSet;
use media_renamer::models::rule::RuleFields;
use media_renamer::utils::oplog::OpLog;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const RULE: &str = "[Title] - [Season] - [Episode]";

fn make_files(dir: &TempDir, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = dir.path().join(name);
            fs::write(&path, "fake video content").unwrap();
            path
        })
        .collect()
}

fn show_fields() -> RuleFields {
    RuleFields {
        title: "Show".to_string(),
        ..Default::default()
    }
}

fn test_log(dir: &TempDir) -> OpLog {
    OpLog::new(dir.path().join("rename_log.txt"))
}

#[test]
fn test_preview_maps_in_set_order() {
    let temp_dir = TempDir::new().unwrap();
    let paths = make_files(&temp_dir, &["ep2.mkv", "ep1.mkv"]);

    let mut set = WorkingSet::new();
    set.add_files(&paths);

    let rows = build_preview(&set, RULE, &show_fields());
    assert_eq!(rows[0].original, "ep1.mkv");
    assert_eq!(rows[0].renamed, "Show - 1 - 01.mkv");
    assert_eq!(rows[1].original, "ep2.mkv");
    assert_eq!(rows[1].renamed, "Show - 1 - 02.mkv");

    // Preview never touches the filesystem.
    assert!(temp_dir.path().join("ep1.mkv").exists());
}

#[test]
fn test_rename_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let paths = make_files(&temp_dir, &["ep1.mkv", "ep2.mkv"]);

    let mut set = WorkingSet::new();
    set.add_files(&paths);

    let report = execute(&set, RULE, &show_fields(), &test_log(&temp_dir));

    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 0);
    assert!(temp_dir.path().join("Show - 1 - 01.mkv").exists());
    assert!(temp_dir.path().join("Show - 1 - 02.mkv").exists());
    assert!(!temp_dir.path().join("ep1.mkv").exists());
}

#[test]
fn test_collision_appends_timestamp_suffix() {
    let temp_dir = TempDir::new().unwrap();
    // The computed target already exists before the pass runs.
    fs::write(temp_dir.path().join("Show - 1 - 01.mkv"), "occupied").unwrap();
    let paths = make_files(&temp_dir, &["source.mkv"]);

    let mut set = WorkingSet::new();
    set.add_files(&paths);

    let report = execute(&set, RULE, &show_fields(), &test_log(&temp_dir));

    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 0);
    assert!(!temp_dir.path().join("source.mkv").exists());
    // The occupied target is untouched.
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("Show - 1 - 01.mkv")).unwrap(),
        "occupied"
    );

    // The source landed on the suffixed name instead.
    let suffix_re = regex::Regex::new(r"^Show - 1 - 01_\d{14}\.mkv$").unwrap();
    let suffixed: Vec<String> = fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| suffix_re.is_match(name))
        .collect();
    assert_eq!(suffixed.len(), 1);
}

#[test]
fn test_rename_to_own_name_is_a_success() {
    let temp_dir = TempDir::new().unwrap();
    let paths = make_files(&temp_dir, &["Show - 1 - 01.mkv"]);

    let mut set = WorkingSet::new();
    set.add_files(&paths);

    let report = execute(&set, RULE, &show_fields(), &test_log(&temp_dir));

    assert_eq!(report.succeeded, 1);
    assert_eq!(report.failed, 0);
    assert!(temp_dir.path().join("Show - 1 - 01.mkv").exists());
}

#[test]
fn test_failed_entry_does_not_stop_batch() {
    let temp_dir = TempDir::new().unwrap();
    let paths = make_files(&temp_dir, &["ep1.mkv", "ep2.mkv", "ep3.mkv"]);

    let mut set = WorkingSet::new();
    set.add_files(&paths);

    // ep2 disappears after it was added; its rename fails, the others run.
    fs::remove_file(temp_dir.path().join("ep2.mkv")).unwrap();

    let report = execute(&set, RULE, &show_fields(), &test_log(&temp_dir));

    assert_eq!(report.succeeded, 2);
    assert_eq!(report.failed, 1);
    assert!(temp_dir.path().join("Show - 1 - 01.mkv").exists());
    assert!(temp_dir.path().join("Show - 1 - 03.mkv").exists());
    assert!(!temp_dir.path().join("Show - 1 - 02.mkv").exists());
}

#[test]
fn test_log_lines_are_timestamped() {
    let temp_dir = TempDir::new().unwrap();
    let paths = make_files(&temp_dir, &["ep1.mkv"]);

    let mut set = WorkingSet::new();
    set.add_files(&paths);

    let log = test_log(&temp_dir);
    execute(&set, RULE, &show_fields(), &log);

    let lines = log.tail(100).unwrap();
    // One line per attempt plus the summary line.
    assert_eq!(lines.len(), 2);

    let line_re = regex::Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] ").unwrap();
    assert!(lines.iter().all(|line| line_re.is_match(line)));
    assert!(lines[0].contains("Renamed: ep1.mkv -> Show - 1 - 01.mkv"));
    assert!(lines[1].contains("Batch complete: 1 succeeded, 0 failed"));
}

#[test]
fn test_log_appends_across_batches() {
    let temp_dir = TempDir::new().unwrap();
    let log = test_log(&temp_dir);

    for round in 0..2 {
        let name = format!("take{}.mkv", round);
        let paths = make_files(&temp_dir, &[name.as_str()]);
        let mut set = WorkingSet::new();
        set.add_files(&paths);
        execute(&set, "[Title] [Episode]", &show_fields(), &log);
    }

    // Two batches, two lines each; nothing truncated in between.
    assert_eq!(log.tail(100).unwrap().len(), 4);
}
