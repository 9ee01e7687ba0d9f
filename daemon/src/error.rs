//! Error type for fallible library operations.
//!
//! Ranking and suggestion never fail; only config loading and alias
//! import/export surface errors.

use std::path::PathBuf;

/// Library error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize aliases: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid alias: {0}")]
    InvalidAlias(String),

    #[error("invalid value for {var}: {value}")]
    InvalidEnv { var: &'static str, value: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
