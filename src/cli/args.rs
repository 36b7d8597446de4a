//! Command line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Media Renamer - Batch-rename video files with naming templates
#[derive(Parser, Debug)]
#[command(name = "media-renamer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Use an alternate config file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Preview the rename mapping without touching any file
    Preview {
        /// Files or directories to add to the working set
        #[arg(value_name = "SOURCES", required = true)]
        sources: Vec<PathBuf>,

        #[command(flatten)]
        fields: FieldArgs,

        /// Numeric token value to use as the episode number
        #[arg(long, value_name = "TOKEN")]
        episode_token: Option<String>,

        /// Output format: table, simple, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Rename the collected files in place
    Rename {
        /// Files or directories to add to the working set
        #[arg(value_name = "SOURCES", required = true)]
        sources: Vec<PathBuf>,

        #[command(flatten)]
        fields: FieldArgs,

        /// Numeric token value to use as the episode number
        #[arg(long, value_name = "TOKEN")]
        episode_token: Option<String>,
    },

    /// List numeric tokens that could serve as episode numbers
    Tokens {
        /// Files or directories to inspect
        #[arg(value_name = "SOURCES", required = true)]
        sources: Vec<PathBuf>,
    },

    /// Show or save the configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Inspect the operation log
    Log {
        #[command(subcommand)]
        action: LogAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,

    /// Save the given values on top of the current configuration
    Save {
        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum LogAction {
    /// Print the tail of the operation log
    Show {
        /// Number of lines to print
        #[arg(short = 'n', long, default_value_t = 20)]
        lines: usize,
    },
}

/// Naming rule and field overrides shared by several commands.
///
/// Values not given fall back to the loaded configuration field-by-field.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Predefined template index (0-based)
    #[arg(short, long, value_name = "INDEX")]
    pub template: Option<usize>,

    /// Custom naming rule; overrides the template when non-empty
    #[arg(short, long, value_name = "RULE")]
    pub rule: Option<String>,

    /// Media type label
    #[arg(short, long, value_name = "TYPE")]
    pub media_type: Option<String>,

    /// Title
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Season
    #[arg(short, long, value_name = "SEASON")]
    pub season: Option<String>,

    /// Episode number prefix
    #[arg(short, long, value_name = "PREFIX")]
    pub episode_prefix: Option<String>,
}
