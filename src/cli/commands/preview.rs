//! Preview command implementation.
//!
//! Builds the working set, renders the mapping and prints it without
//! performing any rename.

use super::{build_working_set, resolve_rule};
use crate::cli::args::FieldArgs;
use crate::core::renamer;
use crate::models::config::Config;
use crate::utils::fs::format_file_size;
use crate::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Print the original -> new mapping for the given sources.
pub fn preview_files(
    sources: &[PathBuf],
    fields: &FieldArgs,
    episode_token: Option<&str>,
    format: &str,
    config: &Config,
) -> Result<()> {
    let set = build_working_set(sources, episode_token)?;

    if set.is_empty() {
        println!("{}", "No video files found.".yellow());
        return Ok(());
    }

    let (rule, fields) = resolve_rule(fields, config);
    let rows = renamer::build_preview(&set, rule.effective(), &fields);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        "simple" => {
            for row in &rows {
                println!("{} -> {}", row.original, row.renamed);
            }
        }
        _ => {
            println!("{}", "[Preview]".bold().cyan());
            println!("  {} {}", "Rule:".bold(), rule.effective());
            println!("  {} {}", "Files:".bold(), set.len());
            println!();

            let width = rows
                .iter()
                .map(|r| r.original.len())
                .max()
                .unwrap_or(0)
                .max("Original".len());

            println!("  {:<width$}  {}", "Original".bold(), "Renamed".bold());
            for (row, entry) in rows.iter().zip(set.entries()) {
                println!(
                    "  {:<width$}  {}  ({})",
                    row.original,
                    row.renamed.green(),
                    format_file_size(entry.size)
                );
            }
        }
    }

    Ok(())
}
