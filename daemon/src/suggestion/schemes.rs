//! The five naming heuristics.
//!
//! Each scheme looks at the command independently and returns raw
//! candidates. Filtering against taken names and ranking happens in the
//! engine.

use super::{AliasSuggestion, Scheme};

/// Conventional short aliases for common git subcommands
const KNOWN_ALIASES: &[(&str, &str, &str)] = &[
    ("status", "st", "Git status"),
    ("checkout", "co", "Git checkout"),
    ("commit", "ci", "Git commit"),
    ("branch", "br", "Git branch"),
    ("push", "ps", "Git push"),
    ("pull", "pl", "Git pull"),
    ("merge", "mg", "Git merge"),
    ("rebase", "rb", "Git rebase"),
    ("stash", "sh", "Git stash"),
    ("diff", "df", "Git diff"),
    ("log", "lg", "Git log"),
    ("fetch", "fe", "Git fetch"),
    ("remote", "rm", "Git remote"),
    ("reset", "rs", "Git reset"),
    ("cherry", "cp", "Git cherry-pick"),
];

fn words(command: &str) -> Vec<&str> {
    command.split_whitespace().collect()
}

/// Words that are not flags
fn plain_words(command: &str) -> Vec<&str> {
    command
        .split_whitespace()
        .filter(|w| !w.starts_with('-'))
        .collect()
}

fn first_char(word: &str) -> String {
    word.chars().take(1).collect()
}

fn prefix(word: &str, len: usize) -> String {
    word.chars().take(len).collect()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Git-aware names from the conventional table, plus flag-specific variants
pub fn semantic(command: &str) -> Vec<AliasSuggestion> {
    let parts = words(command);
    let Some((&sub, flags)) = parts.split_first() else {
        return vec![];
    };
    let has = |flag: &str| flags.iter().any(|f| *f == flag);
    let make = |alias: &str, reason: &str| AliasSuggestion::new(alias, command, Scheme::Semantic, reason);

    let mut suggestions = vec![];

    if let Some((_, alias, reason)) = KNOWN_ALIASES.iter().find(|(cmd, _, _)| *cmd == sub) {
        suggestions.push(make(*alias, *reason));
    }

    match sub {
        "commit" if has("-m") => suggestions.push(make("cm", "Git commit -m")),
        "checkout" if has("-b") => suggestions.push(make("cb", "Git checkout -b")),
        "log" if has("--oneline") || has("--graph") => {
            suggestions.push(make("lo", "Git log --oneline"));
        }
        "push" if has("--force") || has("-f") => suggestions.push(make("pf", "Git push --force")),
        "stash" if flags.first() == Some(&"pop") => suggestions.push(make("sp", "Git stash pop")),
        _ => {}
    }

    suggestions
}

/// First letter of each word, for two to four words
pub fn abbreviation(command: &str) -> Vec<AliasSuggestion> {
    let parts = plain_words(command);
    if parts.len() < 2 {
        return vec![];
    }

    let abbr: String = parts.iter().map(|w| first_char(w)).collect();
    if !(2..=4).contains(&char_len(&abbr)) {
        return vec![];
    }

    vec![AliasSuggestion::new(
        abbr,
        command,
        Scheme::Abbreviation,
        "First-letter abbreviation",
    )]
}

/// Up to three consonants per word, at most six overall
pub fn vowel_removal(command: &str) -> Vec<AliasSuggestion> {
    let consonants: Vec<String> = plain_words(command)
        .iter()
        .map(|word| {
            word.chars()
                .filter(|c| !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
                .take(3)
                .collect::<String>()
        })
        .filter(|s| !s.is_empty())
        .collect();

    if consonants.is_empty() {
        return vec![];
    }

    let alias = prefix(&consonants.concat(), 6);
    let squashed: String = command.split_whitespace().collect();
    if char_len(&alias) < 2 || alias == squashed {
        return vec![];
    }

    vec![AliasSuggestion::new(
        alias,
        command,
        Scheme::VowelRemoval,
        "Vowel removal",
    )]
}

/// First letter of the first word joined with the following words
pub fn first_letter(command: &str) -> Vec<AliasSuggestion> {
    let parts = plain_words(command);
    if parts.len() < 2 {
        return vec![];
    }

    let mut suggestions = vec![];
    let lead = first_char(parts[0]);

    let combo = format!("{}{}", lead, parts[1..].concat());
    if (2..=8).contains(&char_len(&combo)) {
        suggestions.push(AliasSuggestion::new(
            combo,
            command,
            Scheme::FirstLetter,
            "First-letter combination",
        ));
    }

    if char_len(parts[1]) >= 2 {
        let short = format!("{}{}", lead, prefix(parts[1], 2));
        suggestions.push(
            AliasSuggestion::new(short, command, Scheme::FirstLetter, "Short combination")
                .with_priority(Scheme::FirstLetter.priority() - 5),
        );
    }

    suggestions
}

/// Progressive prefixes of the first word
pub fn truncation(command: &str) -> Vec<AliasSuggestion> {
    let Some(word) = plain_words(command).first().copied() else {
        return vec![];
    };

    let len = char_len(word);
    if len <= 2 {
        return vec![];
    }

    (2..=(len - 1).min(4))
        .map(|n| {
            AliasSuggestion::new(
                prefix(word, n),
                command,
                Scheme::Truncation,
                format!("Truncated to {} chars", n),
            )
            .with_priority(Scheme::Truncation.priority() - (n as i32 - 2))
        })
        .collect()
}
