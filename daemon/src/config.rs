//! Daemon configuration.
//!
//! Read from `config.json` in the platform config directory, then
//! overridden by `GITALIAS_*` environment variables. Every field has a
//! default, so a missing or partial file is fine.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Overrides the ranking cache freshness window, in milliseconds
pub const ENV_CACHE_TTL_MS: &str = "GITALIAS_CACHE_TTL_MS";
/// Replaces the platform history file list (`PATH`-style separators)
pub const ENV_HISTFILES: &str = "GITALIAS_HISTFILES";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// How long mined usage counts stay fresh (default: 5000)
    #[serde(default = "default_cache_ttl_ms")]
    pub cache_ttl_ms: u64,
    /// Weight of raw subcommand usage relative to literal alias use (default: 0.2)
    #[serde(default = "default_base_command_weight")]
    pub base_command_weight: f64,
    /// Upper bound on one history read pass (default: 2000)
    #[serde(default = "default_read_timeout_ms")]
    pub read_timeout_ms: u64,
    /// Explicit history files; `None` uses the platform table
    #[serde(default)]
    pub history_files: Option<Vec<PathBuf>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_ms: default_cache_ttl_ms(),
            base_command_weight: default_base_command_weight(),
            read_timeout_ms: default_read_timeout_ms(),
            history_files: None,
        }
    }
}

fn default_cache_ttl_ms() -> u64 { 5_000 }
fn default_base_command_weight() -> f64 { 0.2 }
fn default_read_timeout_ms() -> u64 { 2_000 }

impl Config {
    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "gitalias")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load from the default location and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Load from a file; a missing file yields defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| Error::InvalidJson {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_CACHE_TTL_MS) {
            self.cache_ttl_ms = value.trim().parse().map_err(|_| Error::InvalidEnv {
                var: ENV_CACHE_TTL_MS,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(ENV_HISTFILES) {
            let files: Vec<PathBuf> = std::env::split_paths(&value)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            if !files.is_empty() {
                self.history_files = Some(files);
            }
        }

        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_millis(self.cache_ttl_ms)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }
}
