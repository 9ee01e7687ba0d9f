//! JSON-RPC 2.0 protocol types for gitalias daemon communication.

use serde::{Deserialize, Serialize};

use crate::alias::{Alias, AliasRef};

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;
pub const INTERNAL_ERROR: i32 = -32603;
pub const OPERATION_FAILED: i32 = -32000;

/// JSON-RPC request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub jsonrpc: Option<String>,
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// JSON-RPC response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl Response {
    pub fn success(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<serde_json::Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(RpcError {
                code,
                message,
                data: None,
            }),
        }
    }
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Parameters for the "scores" method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoresParams {
    pub aliases: Vec<AliasRef>,
}

/// Parameters for the "usage" method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageParams {
    /// Maximum keys to return (default: 20)
    #[serde(default = "default_usage_limit")]
    pub limit: usize,
}

fn default_usage_limit() -> usize { 20 }

impl Default for UsageParams {
    fn default() -> Self {
        Self {
            limit: default_usage_limit(),
        }
    }
}

/// One `git <word>` usage count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageEntry {
    pub key: String,
    pub count: u64,
}

/// Parameters for the "set_existing" method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetExistingParams {
    pub names: Vec<String>,
}

/// Parameters for the "suggest" method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestParams {
    /// Command being aliased, e.g. "checkout -b"
    pub command: String,
    /// Replaces the engine's taken names before suggesting
    #[serde(default)]
    pub existing: Option<Vec<String>>,
}

/// Parameters for the "library" method
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryParams {
    /// Only aliases in this category
    #[serde(default)]
    pub category: Option<String>,
}

/// Parameters for the "library_search" method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySearchParams {
    pub query: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Parameters for the "validate" method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateParams {
    pub command: String,
}

/// Parameters for the "export" method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportParams {
    pub aliases: Vec<Alias>,
    pub path: String,
}

/// Parameters for the "import" method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportParams {
    pub path: String,
}
