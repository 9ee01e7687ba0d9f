//! History text scanning and alias scoring.
//!
//! Counts every `git <word>` occurrence in raw history text. The text is
//! never parsed line by line, so zsh extended entries (`: 1700000000:0;git
//! status`), bash and PowerShell lines all match the same way.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::alias::AliasRef;

/// Occurrence counts keyed by `"git <subcommand>"`
pub type UsageCounts = HashMap<String, u64>;

// ASCII word characters only, so `git café` counts as `git caf`
static GIT_INVOCATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"git\s+([A-Za-z0-9_-]+)").expect("static regex is valid")
});

/// Usage key for a subcommand or alias name
pub fn usage_key(word: &str) -> String {
    format!("git {}", word)
}

/// Count `git <word>` invocations in history text
pub fn scan_usage(text: &str) -> UsageCounts {
    let mut counts = UsageCounts::new();

    for cap in GIT_INVOCATION.captures_iter(text) {
        if let Some(word) = cap.get(1) {
            *counts.entry(usage_key(word.as_str())).or_insert(0) += 1;
        }
    }

    counts
}

/// Score one alias against mined counts
///
/// `round(exact + weight * base)` where `exact` counts literal uses of the
/// alias name and `base` counts uses of the aliased subcommand.
pub fn score_alias(counts: &UsageCounts, alias: &AliasRef, weight: f64) -> u64 {
    let exact = counts.get(&usage_key(&alias.name)).copied().unwrap_or(0);
    let base = match alias.base_command() {
        "" => 0,
        cmd => counts.get(&usage_key(cmd)).copied().unwrap_or(0),
    };

    let score = exact as f64 + weight.max(0.0) * base as f64;
    score.round() as u64
}

/// Top usage keys by count, ties broken alphabetically
pub fn top_usage(counts: &UsageCounts, limit: usize) -> Vec<(String, u64)> {
    let mut entries: Vec<(String, u64)> = counts
        .iter()
        .map(|(key, count)| (key.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);
    entries
}
