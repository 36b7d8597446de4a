//! Naming engine.
//!
//! Pure placeholder substitution: no I/O, deterministic for a given entry,
//! position, rule and field values.

use crate::models::entry::FileEntry;
use crate::models::rule::{EpisodeSelection, RuleFields};

/// Season used when the field is empty.
const DEFAULT_SEASON: &str = "1";

/// Compute the new filename for one entry.
///
/// `index` is the entry's zero-based position in the working set and serves
/// as the episode fallback when no selected token matches. Unmatched
/// placeholders in the rule are left as literal text.
pub fn render_name(
    entry: &FileEntry,
    index: usize,
    rule_text: &str,
    fields: &RuleFields,
    selection: &EpisodeSelection,
) -> String {
    let digits = episode_digits(entry, index, selection);
    let full_episode = format!("{}{}", fields.episode_prefix, digits);

    let title = if fields.title.is_empty() {
        entry.stem()
    } else {
        fields.title.as_str()
    };
    let season = if fields.season.is_empty() {
        DEFAULT_SEASON
    } else {
        fields.season.as_str()
    };

    // Ordered substitution list; every occurrence of each placeholder is
    // replaced literally.
    let substitutions: [(&str, &str); 4] = [
        ("[MediaType]", fields.media_type.as_str()),
        ("[Title]", title),
        ("[Season]", season),
        ("[Episode]", full_episode.as_str()),
    ];

    let mut name = rule_text.to_string();
    for (placeholder, value) in substitutions {
        name = name.replace(placeholder, value);
    }

    // Rules that spell out a season marker (季 or EP) together with the 集
    // grouping character collapse to one canonical shape. Kept exactly as
    // the historical behavior, including its trigger condition.
    if (name.contains('季') || name.contains("EP")) && name.contains('集') {
        name = format!("{} - {} - {}", title, season, full_episode);
    }

    format!("{}{}", name, entry.extension)
}

/// Episode digits for one entry: the selected token when it matches by
/// string equality, otherwise the one-based position. Padded to at least
/// two digits, never truncated.
fn episode_digits(entry: &FileEntry, index: usize, selection: &EpisodeSelection) -> String {
    if let Some(token) = selection.token() {
        if let Some(matched) = entry.numeric_tokens.iter().find(|t| t.as_str() == token) {
            return pad_episode(matched);
        }
    }
    pad_episode(&(index + 1).to_string())
}

/// Zero-pad to at least two digits.
fn pad_episode(digits: &str) -> String {
    format!("{:0>2}", digits)
}
