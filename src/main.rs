//! Media Renamer CLI
//!
//! A command-line tool for batch-renaming video files with naming
//! templates, natural sort ordering and episode-number inference.

use clap::Parser;
use media_renamer::cli::{
    args::{Cli, Commands, ConfigAction, LogAction},
    commands::{config as config_cmd, log as log_cmd, preview, rename, tokens},
};
use media_renamer::models::config;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Load the config snapshot, best effort; defaults on any failure
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(config::config_file_path);
    let loaded = config::load_config(&config_path);

    // Run the appropriate command
    match cli.command {
        Commands::Preview {
            sources,
            fields,
            episode_token,
            format,
        } => {
            preview::preview_files(&sources, &fields, episode_token.as_deref(), &format, &loaded)?;
        }

        Commands::Rename {
            sources,
            fields,
            episode_token,
        } => {
            rename::rename_files(
                &sources,
                &fields,
                episode_token.as_deref(),
                &loaded,
                config::log_file_path(),
            )?;
        }

        Commands::Tokens { sources } => {
            tokens::list_tokens(&sources)?;
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                config_cmd::show_config(&loaded);
            }
            ConfigAction::Save { fields } => {
                config_cmd::save_config(&fields, &loaded, &config_path)?;
            }
        },

        Commands::Log { action } => match action {
            LogAction::Show { lines } => {
                log_cmd::show_log(config::log_file_path(), lines)?;
            }
        },
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("media_renamer=debug")
    } else {
        EnvFilter::new("media_renamer=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
