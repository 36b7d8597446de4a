//! Tokens command implementation.

use super::build_working_set;
use crate::Result;
use colored::Colorize;
use std::path::PathBuf;

/// Print the distinct numeric-token candidates across the sources,
/// ascending by integer value.
pub fn list_tokens(sources: &[PathBuf]) -> Result<()> {
    let set = build_working_set(sources, None)?;
    let candidates = set.episode_candidates();

    if candidates.is_empty() {
        println!("{}", "No numeric tokens found in the filenames.".yellow());
        return Ok(());
    }

    println!("{}", "[Episode token candidates]".bold().cyan());
    for token in &candidates {
        println!("  {}", token);
    }
    println!();
    println!(
        "Pick one with {} on preview or rename.",
        "--episode-token <TOKEN>".cyan()
    );

    Ok(())
}
