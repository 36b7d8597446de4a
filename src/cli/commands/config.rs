//! Config command implementation.

use crate::cli::args::FieldArgs;
use crate::models::config::{self, Config};
use crate::models::rule::TEMPLATES;
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Print the current configuration snapshot.
pub fn show_config(config: &Config) {
    println!("{}", "[Config]".bold().cyan());
    println!("  {} {}", "Template:".bold(), display(&config.template));
    println!("  {} {}", "Custom rule:".bold(), display(&config.custom_rule));
    println!("  {} {}", "Media type:".bold(), display(&config.media_type));
    println!("  {} {}", "Title:".bold(), display(&config.title));
    println!("  {} {}", "Season:".bold(), display(&config.season));
    println!(
        "  {} {}",
        "Episode prefix:".bold(),
        display(&config.episode_prefix)
    );
    println!();
    println!("{}", "[Templates]".bold().cyan());
    for (index, template) in TEMPLATES.iter().enumerate() {
        println!("  {} {}", index, template);
    }
}

/// Merge the given values onto the loaded configuration and overwrite the
/// config file.
pub fn save_config(fields: &FieldArgs, current: &Config, path: &Path) -> Result<()> {
    let mut config = current.clone();

    if let Some(index) = fields.template {
        if let Some(template) = TEMPLATES.get(index) {
            config.template = template.to_string();
        }
    }
    if let Some(ref v) = fields.rule {
        config.custom_rule = v.clone();
    }
    if let Some(ref v) = fields.media_type {
        config.media_type = v.clone();
    }
    if let Some(ref v) = fields.title {
        config.title = v.clone();
    }
    if let Some(ref v) = fields.season {
        config.season = v.clone();
    }
    if let Some(ref v) = fields.episode_prefix {
        config.episode_prefix = v.clone();
    }

    config::save_config(&config, path)?;
    println!(
        "{} {}",
        "[OK] Config saved to:".bold().green(),
        path.display()
    );

    Ok(())
}

fn display(value: &str) -> &str {
    if value.is_empty() {
        "(unset)"
    } else {
        value
    }
}
