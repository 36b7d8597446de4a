//! Rename command implementation.
//!
//! Validates the working set, shows the mapping, then performs the
//! sequential rename pass and prints the outcome summary.

use super::{build_working_set, resolve_rule};
use crate::cli::args::FieldArgs;
use crate::core::renamer;
use crate::models::config::Config;
use crate::utils::oplog::OpLog;
use crate::{Error, Result};
use colored::Colorize;
use std::path::PathBuf;

/// Rename the collected files in place.
pub fn rename_files(
    sources: &[PathBuf],
    fields: &FieldArgs,
    episode_token: Option<&str>,
    config: &Config,
    log_path: PathBuf,
) -> Result<()> {
    let set = build_working_set(sources, episode_token)?;

    // Validation happens before any filesystem mutation.
    if set.is_empty() {
        return Err(Error::NoFilesSelected);
    }

    let (rule, fields) = resolve_rule(fields, config);
    if fields.title.is_empty() {
        return Err(Error::TitleRequired);
    }

    let rows = renamer::build_preview(&set, rule.effective(), &fields);
    println!("{}", "[Rename]".bold().cyan());
    println!("  {} {}", "Rule:".bold(), rule.effective());
    println!();
    for row in &rows {
        println!("  {} -> {}", row.original, row.renamed.green());
    }
    println!();
    println!(
        "{}",
        format!("[WARNING] Renaming {} files in place...", set.len())
            .bold()
            .yellow()
    );

    let log = OpLog::new(log_path);
    let report = renamer::execute(&set, rule.effective(), &fields, &log);

    println!();
    println!("{}", "[Summary]".bold().green());
    println!("  {} {}", "Renamed:".bold(), report.succeeded);
    println!("  {} {}", "Failed:".bold(), report.failed);
    println!("  {} {}", "Log:".bold(), log.path().display());

    Ok(())
}
