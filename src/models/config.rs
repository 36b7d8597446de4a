//! Configuration model.

use crate::models::rule::{NamingRule, RuleFields};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted snapshot of the naming rule and field values.
///
/// All keys are optional strings; unknown keys in the file are ignored, and
/// a missing key leaves the corresponding field at its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Selected predefined template text.
    #[serde(default)]
    pub template: String,
    /// Custom rule override.
    #[serde(default)]
    pub custom_rule: String,
    /// Media type label.
    #[serde(default)]
    pub media_type: String,
    /// Title.
    #[serde(default)]
    pub title: String,
    /// Season.
    #[serde(default)]
    pub season: String,
    /// Episode prefix. Older config files wrote this key as `episode`.
    #[serde(default, alias = "episode")]
    pub episode_prefix: String,
}

impl Config {
    /// Build the naming rule from the stored values. A template string not
    /// in the predefined list is ignored.
    pub fn naming_rule(&self) -> NamingRule {
        let mut rule = NamingRule::default();
        rule.set_template(&self.template);
        rule.custom = self.custom_rule.clone();
        rule
    }

    /// Build the rule fields from the stored values.
    pub fn rule_fields(&self) -> RuleFields {
        RuleFields {
            media_type: self.media_type.clone(),
            title: self.title.clone(),
            season: self.season.clone(),
            episode_prefix: self.episode_prefix.clone(),
        }
    }
}

/// Get the configuration directory path.
pub fn config_dir_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("media_renamer")
}

/// Default config file location.
pub fn config_file_path() -> PathBuf {
    config_dir_path().join("config.json")
}

/// Default operation log location.
pub fn log_file_path() -> PathBuf {
    config_dir_path().join("rename_log.txt")
}

/// Load configuration from a file, best effort.
///
/// A missing file or unreadable JSON yields the defaults; individual
/// unrecognized values are dropped field-by-field when applied.
pub fn load_config(path: &Path) -> Config {
    if path.exists() {
        if let Ok(content) = std::fs::read_to_string(path) {
            match serde_json::from_str(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable config {}: {}", path.display(), e);
                }
            }
        }
    }

    Config::default()
}

/// Write the configuration to a file, overwriting any previous snapshot.
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json)?;

    tracing::info!("Config saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rule::TEMPLATES;

    #[test]
    fn test_unknown_template_ignored() {
        let config = Config {
            template: "[Bogus]".to_string(),
            ..Default::default()
        };
        assert_eq!(config.naming_rule().template, TEMPLATES[0]);
    }

    #[test]
    fn test_known_template_applied() {
        let config = Config {
            template: TEMPLATES[2].to_string(),
            ..Default::default()
        };
        assert_eq!(config.naming_rule().template, TEMPLATES[2]);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let config = load_config(Path::new("/nonexistent/config.json"));
        assert!(config.title.is_empty());
        assert!(config.custom_rule.is_empty());
    }
}
