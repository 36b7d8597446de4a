//! Working set: the ordered collection of selected files.
//!
//! Keeps entries in natural filename order, extracts numeric tokens,
//! and supports designating one token value as the episode number.

use crate::models::entry::FileEntry;
use crate::models::rule::EpisodeSelection;
use crate::{Error, Result};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::PathBuf;

/// Extract the maximal digit runs from a filename, left to right.
///
/// Original text is preserved, so `"007"` stays `"007"`.
pub fn extract_numeric_tokens(filename: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    if let Ok(re) = regex::Regex::new(r"\d+") {
        for m in re.find_iter(filename) {
            tokens.push(m.as_str().to_string());
        }
    }
    tokens
}

/// One piece of a natural sort key: a text run or a digit run.
///
/// Digit runs compare numerically, text runs as strings; mismatched kinds
/// at the same position fall back to comparing the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    raw: String,
    value: Option<u128>,
}

impl Segment {
    fn text(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            value: None,
        }
    }

    fn digits(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            value: raw.parse().ok(),
        }
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.value, other.value) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => self.raw.cmp(&other.raw),
        }
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split a filename into its natural sort key.
///
/// The key alternates text and digit segments starting with a (possibly
/// empty) text run, so keys from different names stay position-aligned.
/// Guarantees `"ep2.mp4"` sorts before `"ep10.mp4"`.
pub fn natural_sort_key(name: &str) -> Vec<Segment> {
    let mut key = Vec::new();
    if let Ok(re) = regex::Regex::new(r"\d+") {
        let mut last = 0;
        for m in re.find_iter(name) {
            key.push(Segment::text(&name[last..m.start()]));
            key.push(Segment::digits(m.as_str()));
            last = m.end();
        }
        key.push(Segment::text(&name[last..]));
    } else {
        key.push(Segment::text(name));
    }
    key
}

/// The ordered working set of selected files.
///
/// Order is significant: it drives both display and the positional episode
/// fallback. Owned by the single control thread; no locking.
#[derive(Debug, Default)]
pub struct WorkingSet {
    entries: Vec<FileEntry>,
    selection: EpisodeSelection,
}

impl WorkingSet {
    /// Create an empty working set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in their current order.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The current episode-token selection.
    pub fn selection(&self) -> &EpisodeSelection {
        &self.selection
    }

    /// Add files to the set and re-sort by natural filename order.
    ///
    /// Paths already present are skipped silently; unreadable files are
    /// skipped with a warning. Returns the number of entries added.
    pub fn add_files(&mut self, paths: &[PathBuf]) -> usize {
        let mut added = 0;

        for path in paths {
            if self.entries.iter().any(|e| &e.path == path) {
                continue;
            }
            match FileEntry::from_path(path) {
                Ok(entry) => {
                    self.entries.push(entry);
                    added += 1;
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable file {}: {}", path.display(), e);
                }
            }
        }

        self.entries
            .sort_by_cached_key(|e| natural_sort_key(&e.filename));

        added
    }

    /// Remove one entry by its current position. The episode selection is
    /// left untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<FileEntry> {
        if index >= self.entries.len() {
            return Err(Error::InvalidIndex(index));
        }
        Ok(self.entries.remove(index))
    }

    /// Reset to empty and drop any episode selection.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.selection = EpisodeSelection::Unset;
    }

    /// Distinct numeric-token values across all entries, ascending by
    /// integer value.
    pub fn episode_candidates(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for token in self.entries.iter().flat_map(|e| e.numeric_tokens.iter()) {
            if seen.insert(token.clone()) {
                candidates.push(token.clone());
            }
        }

        candidates.sort_by_key(|t| t.parse::<u128>().unwrap_or(0));
        candidates
    }

    /// Designate a token value as the episode number and re-sort the set by
    /// each entry's matching token. Entries without a match sort first, as
    /// if their episode number were 0. The selection persists across
    /// subsequent adds until `clear`.
    pub fn select_episode_token(&mut self, token: &str) {
        self.selection = EpisodeSelection::Token(token.to_string());
        let token = token.to_string();
        self.entries.sort_by_key(|e| matched_token_value(e, &token));
    }
}

/// Integer value of the entry's token matching the selection, 0 when the
/// entry has no such token.
fn matched_token_value(entry: &FileEntry, token: &str) -> u128 {
    entry
        .numeric_tokens
        .iter()
        .find(|t| t.as_str() == token)
        .and_then(|t| t.parse().ok())
        .unwrap_or(0)
}
