//! Alias name suggestions for a git command.
//!
//! Five independent schemes propose candidates, each with a fixed priority:
//! - semantic (100): conventional names like `co` for `checkout`
//! - abbreviation (90): first letter of each word
//! - vowel removal (80): leading consonants of each word
//! - first-letter (70): first letter joined with the remaining words
//! - truncation (60): prefixes of the first word
//!
//! Candidates are deduplicated, filtered against names already taken, and
//! ranked by priority with shorter names winning ties.

mod schemes;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Maximum suggestions returned per request
pub const MAX_SUGGESTIONS: usize = 8;

/// Naming heuristic that produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    Semantic,
    Abbreviation,
    VowelRemoval,
    FirstLetter,
    Truncation,
}

impl Scheme {
    /// Base priority; higher wins
    pub fn priority(self) -> i32 {
        match self {
            Scheme::Semantic => 100,
            Scheme::Abbreviation => 90,
            Scheme::VowelRemoval => 80,
            Scheme::FirstLetter => 70,
            Scheme::Truncation => 60,
        }
    }
}

/// A proposed alias name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasSuggestion {
    pub alias: String,
    pub command: String,
    pub scheme: Scheme,
    pub reason: String,
    pub priority: i32,
}

impl AliasSuggestion {
    fn new(
        alias: impl Into<String>,
        command: impl Into<String>,
        scheme: Scheme,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            command: command.into(),
            scheme,
            reason: reason.into(),
            priority: scheme.priority(),
        }
    }

    fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Suggests alias names, avoiding names already in use
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    existing: HashSet<String>,
}

impl SuggestionEngine {
    pub fn new<I, S>(existing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            existing: existing.into_iter().map(Into::into).collect(),
        }
    }

    /// Replace the set of taken names (call after the alias list changes)
    pub fn set_existing_names<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.existing = names.into_iter().map(Into::into).collect();
    }

    pub fn existing_names(&self) -> &HashSet<String> {
        &self.existing
    }

    /// Ranked suggestions for a command such as `"checkout -b"`, best first
    pub fn suggest(&self, command: &str) -> Vec<AliasSuggestion> {
        if command.trim().is_empty() {
            return vec![];
        }

        let candidates = schemes::semantic(command)
            .into_iter()
            .chain(schemes::abbreviation(command))
            .chain(schemes::vowel_removal(command))
            .chain(schemes::first_letter(command))
            .chain(schemes::truncation(command));

        let mut seen = HashSet::new();
        let mut suggestions: Vec<AliasSuggestion> = candidates
            .filter(|s| {
                !s.alias.is_empty()
                    && !self.existing.contains(&s.alias)
                    && seen.insert(s.alias.clone())
            })
            .collect();

        suggestions.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.alias.chars().count().cmp(&b.alias.chars().count()))
        });
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}
