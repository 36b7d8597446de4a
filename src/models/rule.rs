//! Naming rule and field models.

use serde::{Deserialize, Serialize};

/// Predefined naming templates, in display order.
pub const TEMPLATES: &[&str] = &[
    "[MediaType] - [Title] - [Season] - [Episode]",
    "[Title] - [Season] - [Episode]",
    "[MediaType] - [Title]",
    "[Title]",
];

/// The active naming rule: a selected predefined template plus an optional
/// free-text override. The override wins when non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingRule {
    /// Selected predefined template text.
    pub template: String,
    /// Custom rule text, empty when unused.
    pub custom: String,
}

impl Default for NamingRule {
    fn default() -> Self {
        Self {
            template: TEMPLATES[0].to_string(),
            custom: String::new(),
        }
    }
}

impl NamingRule {
    /// The rule text actually applied: custom override if non-empty,
    /// otherwise the selected template.
    pub fn effective(&self) -> &str {
        if self.custom.is_empty() {
            &self.template
        } else {
            &self.custom
        }
    }

    /// Set the template from a stored value, ignoring strings that are not
    /// in the predefined list.
    pub fn set_template(&mut self, template: &str) {
        if TEMPLATES.contains(&template) {
            self.template = template.to_string();
        }
    }

    /// Set the template by list index.
    pub fn set_template_index(&mut self, index: usize) {
        if let Some(t) = TEMPLATES.get(index) {
            self.template = t.to_string();
        }
    }
}

/// Field values substituted into the rule. Empty means "use the default".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleFields {
    /// Media type label (e.g. a series/movie category).
    pub media_type: String,
    /// Title; falls back to each entry's filename stem when empty.
    pub title: String,
    /// Season; falls back to "1" when empty.
    pub season: String,
    /// Prefix prepended to the computed episode digits.
    pub episode_prefix: String,
}

/// Which numeric token, if any, the user designated as the episode number.
///
/// Unset at startup and after a clear; persists across adds once chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EpisodeSelection {
    /// No token chosen; episode numbers fall back to list position.
    #[default]
    Unset,
    /// A chosen token value, matched by string equality against each
    /// entry's tokens.
    Token(String),
}

impl EpisodeSelection {
    /// The chosen token value, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            EpisodeSelection::Unset => None,
            EpisodeSelection::Token(t) => Some(t),
        }
    }
}
