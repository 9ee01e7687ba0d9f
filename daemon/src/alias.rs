//! Alias data model shared by ranking, transfer and the RPC surface.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where an alias lives in git configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Global,
    Local,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::Local => write!(f, "local"),
        }
    }
}

/// A git alias as owned by the host's alias store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alias {
    pub name: String,
    pub command: String,
    #[serde(default)]
    pub scope: Scope,
    /// Repository path for local aliases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_path: Option<String>,
    /// Usage score, recomputed on every read and never persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u64>,
}

impl Alias {
    pub fn new(name: impl Into<String>, command: impl Into<String>, scope: Scope) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            scope,
            local_path: None,
            score: None,
        }
    }

    /// `{name, command}` view used for scoring
    pub fn to_ref(&self) -> AliasRef {
        AliasRef {
            name: self.name.clone(),
            command: self.command.clone(),
        }
    }
}

/// Minimal `{name, command}` pair consumed by the ranking service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRef {
    pub name: String,
    pub command: String,
}

impl AliasRef {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }

    /// First whitespace-delimited token of the aliased command
    pub fn base_command(&self) -> &str {
        self.command.split_whitespace().next().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_command() {
        assert_eq!(AliasRef::new("cb", "checkout -b").base_command(), "checkout");
        assert_eq!(AliasRef::new("st", "  status ").base_command(), "status");
        assert_eq!(AliasRef::new("x", "").base_command(), "");
    }

    #[test]
    fn test_alias_serialization() {
        let mut alias = Alias::new("co", "checkout", Scope::Local);
        alias.local_path = Some("/src/repo".to_string());

        let json = serde_json::to_value(&alias).unwrap();
        assert_eq!(json["scope"], "local");
        assert_eq!(json["localPath"], "/src/repo");
        assert!(json.get("score").is_none());
    }

    #[test]
    fn test_scope_defaults_to_global() {
        let alias: Alias = serde_json::from_str(r#"{"name":"st","command":"status"}"#).unwrap();
        assert_eq!(alias.scope, Scope::Global);
        assert_eq!(alias.scope.to_string(), "global");
    }
}
