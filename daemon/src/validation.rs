//! Safety checks for alias commands.
//!
//! Warnings never make a command invalid; only an empty command does.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Patterns that make an alias destructive, with their warning text
const DANGEROUS_PATTERNS: &[(&str, &str)] = &[
    (r"rm\s+(-rf|-fr|--recursive)", "Contains recursive delete (rm -rf)"),
    (r"push\s+(?:\S.*)?--force", "Contains force push (--force)"),
    (r"push\s+(?:\S.*)?-f\b", "Contains force push (-f)"),
    (r"reset\s+--hard", "Contains hard reset (reset --hard)"),
    (r"clean\s+(?:\S.*)?-fd", "Contains force clean (clean -fd)"),
    (r"branch\s+(?:\S.*)?-D", "Contains force branch delete (-D)"),
];

static COMPILED: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    DANGEROUS_PATTERNS
        .iter()
        .filter_map(|(pattern, message)| Regex::new(pattern).ok().map(|re| (re, *message)))
        .collect()
});

/// Outcome of validating an alias command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// Check an alias command for emptiness and destructive patterns
pub fn validate_command(command: &str) -> ValidationResult {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    if command.trim().is_empty() {
        errors.push("Command cannot be empty".to_string());
        return ValidationResult {
            valid: false,
            warnings,
            errors,
        };
    }

    for (re, message) in COMPILED.iter() {
        if re.is_match(command) {
            warnings.push(message.to_string());
        }
    }

    if command.starts_with('!') {
        warnings.push("This is a shell command alias (starts with !). Use with caution.".to_string());
    }

    ValidationResult {
        valid: errors.is_empty(),
        warnings,
        errors,
    }
}
