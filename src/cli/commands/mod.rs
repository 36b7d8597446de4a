//! Command implementations.

pub mod config;
pub mod log;
pub mod preview;
pub mod rename;
pub mod tokens;

use crate::cli::args::FieldArgs;
use crate::core::scanner;
use crate::core::workset::WorkingSet;
use crate::models::config::Config;
use crate::models::rule::{NamingRule, RuleFields};
use crate::Result;
use std::path::PathBuf;

/// Collect the sources into a working set and apply the episode-token
/// selection when given.
pub(crate) fn build_working_set(
    sources: &[PathBuf],
    episode_token: Option<&str>,
) -> Result<WorkingSet> {
    let paths = scanner::collect_files(sources)?;

    let mut set = WorkingSet::new();
    let added = set.add_files(&paths);
    tracing::info!("Added {} files to the working set", added);

    if let Some(token) = episode_token {
        set.select_episode_token(token);
    }

    Ok(set)
}

/// Resolve the effective rule and field values: loaded config first,
/// command-line overrides on top, field-by-field.
pub(crate) fn resolve_rule(args: &FieldArgs, config: &Config) -> (NamingRule, RuleFields) {
    let mut rule = config.naming_rule();
    if let Some(index) = args.template {
        rule.set_template_index(index);
    }
    if let Some(ref custom) = args.rule {
        rule.custom = custom.clone();
    }

    let mut fields = config.rule_fields();
    if let Some(ref v) = args.media_type {
        fields.media_type = v.clone();
    }
    if let Some(ref v) = args.title {
        fields.title = v.clone();
    }
    if let Some(ref v) = args.season {
        fields.season = v.clone();
    }
    if let Some(ref v) = args.episode_prefix {
        fields.episode_prefix = v.clone();
    }

    (rule, fields)
}
