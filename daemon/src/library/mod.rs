//! Query API over the bundled alias library.

mod data;

use std::collections::BTreeSet;

use serde::Serialize;

use data::LIBRARY;

/// A predefined alias with its category and a short description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LibraryAlias {
    pub name: &'static str,
    pub command: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

impl LibraryAlias {
    fn matches(&self, needle: &str) -> bool {
        [self.name, self.command, self.category, self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Every library alias, in table order
pub fn all() -> &'static [LibraryAlias] {
    LIBRARY
}

/// Distinct category names, sorted
pub fn categories() -> Vec<&'static str> {
    LIBRARY
        .iter()
        .map(|a| a.category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn by_category(category: &str) -> Vec<&'static LibraryAlias> {
    LIBRARY.iter().filter(|a| a.category == category).collect()
}

/// Case-insensitive substring search over name, command, category and
/// description. A blank query returns the whole library.
pub fn search(query: &str) -> Vec<&'static LibraryAlias> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return LIBRARY.iter().collect();
    }

    LIBRARY.iter().filter(|a| a.matches(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique() {
        let names: BTreeSet<_> = all().iter().map(|a| a.name).collect();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        let cats = categories();
        let mut sorted = cats.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(cats, sorted);
        assert!(cats.contains(&"checkout"));
        assert!(cats.contains(&"short"));
    }

    #[test]
    fn test_by_category() {
        let checkout = by_category("checkout");
        let names: Vec<_> = checkout.iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["co", "cong", "cob"]);

        assert!(by_category("Checkout").is_empty());
        assert!(by_category("nope").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = search("  CHERRY-pick ");
        assert!(!hits.is_empty());
        assert!(hits.iter().any(|a| a.name == "cp"));
        assert!(hits.iter().all(|a| a.matches("cherry-pick")));
    }

    #[test]
    fn test_search_matches_description() {
        let hits = search("fast-forward");
        let names: Vec<_> = hits.iter().map(|a| a.name).collect();
        assert!(names.contains(&"pf"));
        assert!(names.contains(&"mncnf"));
    }

    #[test]
    fn test_blank_search_returns_everything() {
        assert_eq!(search("").len(), all().len());
        assert_eq!(search("   ").len(), all().len());
        assert!(search("zzzz-no-such-alias").is_empty());
    }

    #[test]
    fn test_serializes_flat() {
        let json = serde_json::to_value(search("cob")[0]).unwrap();
        assert_eq!(json["name"], "cob");
        assert_eq!(json["command"], "checkout -b");
        assert_eq!(json["category"], "checkout");
    }
}
