//! Export and import of alias lists as JSON.
//!
//! ```json
//! {
//!   "version": "1.0.0",
//!   "exportedAt": "2026-02-22T16:30:00Z",
//!   "aliases": [{ "name": "co", "command": "checkout", "scope": "global" }]
//! }
//! ```

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::alias::Alias;
use crate::error::{Error, Result};

/// Format version written by this build
pub const EXPORT_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub version: String,
    pub exported_at: String,
    pub aliases: Vec<Alias>,
}

/// Write aliases to `path`; scores are not persisted
pub fn export_aliases(aliases: &[Alias], path: &Path) -> Result<PathBuf> {
    let data = ExportData {
        version: EXPORT_VERSION.to_string(),
        exported_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        aliases: aliases
            .iter()
            .cloned()
            .map(|mut alias| {
                alias.score = None;
                alias
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&data)?;
    std::fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Exported {} aliases to {}", data.aliases.len(), path.display());
    Ok(path.to_path_buf())
}

/// Read and validate aliases from an export file
pub fn import_aliases(path: &Path) -> Result<Vec<Alias>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let data: ExportData = serde_json::from_str(&content).map_err(|source| Error::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;

    for alias in &data.aliases {
        if alias.name.trim().is_empty() {
            return Err(Error::InvalidAlias(
                "missing or invalid \"name\" field".to_string(),
            ));
        }
        if alias.command.trim().is_empty() {
            return Err(Error::InvalidAlias(format!(
                "\"{}\" has a missing or invalid \"command\" field",
                alias.name
            )));
        }
    }

    info!("Imported {} aliases from {}", data.aliases.len(), path.display());
    Ok(data.aliases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::Scope;

    #[test]
    fn test_export_writes_envelope() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.json");
        let mut co = Alias::new("co", "checkout", Scope::Global);
        co.score = Some(12);

        export_aliases(&[co], &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["aliases"][0]["name"], "co");
        assert!(json["aliases"][0].get("score").is_none());

        let exported_at = json["exportedAt"].as_str().unwrap();
        assert!(exported_at.ends_with('Z'));
        assert_eq!(exported_at.len(), 20);
    }

    #[test]
    fn test_export_then_import_local_alias() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.json");
        let mut lg = Alias::new("lg", "log --oneline --graph", Scope::Local);
        lg.local_path = Some("/src/project".to_string());

        export_aliases(std::slice::from_ref(&lg), &path).unwrap();
        assert_eq!(import_aliases(&path).unwrap(), vec![lg]);
    }

    #[test]
    fn test_import_defaults_scope() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.json");
        std::fs::write(
            &path,
            r#"{"version":"1.0.0","exportedAt":"2026-01-01T00:00:00Z","aliases":[{"name":"st","command":"status"}]}"#,
        )
        .unwrap();

        let aliases = import_aliases(&path).unwrap();
        assert_eq!(aliases[0].scope, Scope::Global);
    }

    #[test]
    fn test_import_rejects_empty_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.json");
        std::fs::write(
            &path,
            r#"{"version":"1.0.0","exportedAt":"2026-01-01T00:00:00Z","aliases":[{"name":"","command":"checkout","scope":"global"}]}"#,
        )
        .unwrap();

        assert!(matches!(import_aliases(&path), Err(Error::InvalidAlias(_))));
    }

    #[test]
    fn test_import_rejects_empty_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.json");
        std::fs::write(
            &path,
            r#"{"version":"1.0.0","exportedAt":"2026-01-01T00:00:00Z","aliases":[{"name":"co","command":""}]}"#,
        )
        .unwrap();

        let err = import_aliases(&path).unwrap_err();
        assert!(err.to_string().contains("\"co\""));
    }

    #[test]
    fn test_import_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aliases.json");
        std::fs::write(&path, "[1, 2").unwrap();

        assert!(matches!(import_aliases(&path), Err(Error::InvalidJson { .. })));
    }

    #[test]
    fn test_import_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            import_aliases(&dir.path().join("gone.json")),
            Err(Error::Read { .. })
        ));
    }
}
