//! Socket request handling.
//!
//! One newline-terminated JSON-RPC request per connection, one response
//! line back.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde::de::DeserializeOwned;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error};

use crate::config::Config;
use crate::library::{self, LibraryAlias};
use crate::protocol::{
    self, ExportParams, ImportParams, LibraryParams, LibrarySearchParams, Request, Response,
    ScoresParams, SetExistingParams, SuggestParams, UsageEntry, UsageParams, ValidateParams,
};
use crate::ranking::{HistorySource, RankingService, ShellHistory};
use crate::suggestion::SuggestionEngine;
use crate::{transfer, validation};

/// Get the socket path for the daemon
pub fn socket_path() -> PathBuf {
    if let Ok(runtime_dir) = std::env::var("XDG_RUNTIME_DIR") {
        PathBuf::from(runtime_dir).join("gitalias.sock")
    } else {
        // SAFETY: getuid has no preconditions and cannot fail
        PathBuf::from(format!("/tmp/gitalias-{}.sock", unsafe { libc::getuid() }))
    }
}

/// Shared daemon state
pub struct AppState<S: HistorySource = ShellHistory> {
    pub ranking: RankingService<S>,
    pub suggestions: RwLock<SuggestionEngine>,
}

impl AppState<ShellHistory> {
    pub fn new(config: &Config) -> Self {
        Self::with_ranking(RankingService::new(config))
    }
}

impl<S: HistorySource> AppState<S> {
    pub fn with_ranking(ranking: RankingService<S>) -> Self {
        Self {
            ranking,
            suggestions: RwLock::new(SuggestionEngine::default()),
        }
    }
}

/// Serve a single client connection
pub async fn handle_client<R, W, S>(reader: R, mut writer: W, state: &AppState<S>)
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
    S: HistorySource,
{
    let mut reader = BufReader::new(reader);
    let mut line = String::new();

    match reader.read_line(&mut line).await {
        Ok(0) => return, // EOF
        Ok(_) => {}
        Err(e) => {
            error!("Failed to read from client: {}", e);
            return;
        }
    }

    let response = match serde_json::from_str::<Request>(&line) {
        Ok(request) => handle_request(request, state).await,
        Err(e) => Response::error(None, protocol::PARSE_ERROR, format!("Parse error: {}", e)),
    };

    let response_json = match serde_json::to_string(&response) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            format!(
                r#"{{"jsonrpc":"2.0","error":{{"code":{},"message":"Serialize error"}}}}"#,
                protocol::INTERNAL_ERROR
            )
        }
    };

    if let Err(e) = writer.write_all(response_json.as_bytes()).await {
        error!("Failed to write response: {}", e);
        return;
    }
    if let Err(e) = writer.write_all(b"\n").await {
        error!("Failed to write newline: {}", e);
        return;
    }
    if let Err(e) = writer.shutdown().await {
        debug!("Failed to shutdown writer: {}", e);
    }
}

/// Decode params, mapping absence and shape errors to RPC errors
fn parse_params<T: DeserializeOwned>(request: &Request) -> Result<T, Response> {
    let Some(params) = request.params.clone() else {
        return Err(Response::error(
            request.id.clone(),
            protocol::INVALID_PARAMS,
            "Missing params".to_string(),
        ));
    };

    serde_json::from_value(params).map_err(|e| {
        Response::error(
            request.id.clone(),
            protocol::INVALID_PARAMS,
            format!("Invalid params: {}", e),
        )
    })
}

pub async fn handle_request<S: HistorySource>(request: Request, state: &AppState<S>) -> Response {
    debug!("Handling request: {:?}", request.method);
    let id = request.id.clone();

    match request.method.as_str() {
        "scores" => match parse_params::<ScoresParams>(&request) {
            Ok(params) => {
                let scores = state.ranking.get_scores(&params.aliases).await;
                Response::success(id, serde_json::json!({ "scores": scores }))
            }
            Err(response) => response,
        },
        "usage" => {
            let params = match request.params {
                Some(_) => parse_params::<UsageParams>(&request),
                None => Ok(UsageParams::default()),
            };
            match params {
                Ok(params) => {
                    let usage: Vec<UsageEntry> = state
                        .ranking
                        .usage(params.limit)
                        .await
                        .into_iter()
                        .map(|(key, count)| UsageEntry { key, count })
                        .collect();
                    Response::success(id, serde_json::json!({ "usage": usage }))
                }
                Err(response) => response,
            }
        }
        "set_existing" => match parse_params::<SetExistingParams>(&request) {
            Ok(params) => {
                state
                    .suggestions
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .set_existing_names(params.names);
                Response::success(id, serde_json::json!({ "ok": true }))
            }
            Err(response) => response,
        },
        "suggest" => match parse_params::<SuggestParams>(&request) {
            Ok(params) => {
                // Replace and suggest under one guard
                let suggestions = match params.existing {
                    Some(existing) => {
                        let mut engine = state
                            .suggestions
                            .write()
                            .unwrap_or_else(PoisonError::into_inner);
                        engine.set_existing_names(existing);
                        engine.suggest(&params.command)
                    }
                    None => state
                        .suggestions
                        .read()
                        .unwrap_or_else(PoisonError::into_inner)
                        .suggest(&params.command),
                };
                Response::success(id, serde_json::json!({ "suggestions": suggestions }))
            }
            Err(response) => response,
        },
        "library" => {
            let params = match request.params {
                Some(_) => parse_params::<LibraryParams>(&request),
                None => Ok(LibraryParams::default()),
            };
            match params {
                Ok(params) => {
                    let aliases: Vec<&LibraryAlias> = match params.category.as_deref() {
                        Some(category) => library::by_category(category),
                        None => library::all().iter().collect(),
                    };
                    Response::success(
                        id,
                        serde_json::json!({
                            "aliases": aliases,
                            "categories": library::categories(),
                        }),
                    )
                }
                Err(response) => response,
            }
        }
        "library_search" => match parse_params::<LibrarySearchParams>(&request) {
            Ok(params) => {
                let mut aliases = library::search(&params.query);
                if let Some(category) = params.category.as_deref() {
                    aliases.retain(|a| a.category == category);
                }
                Response::success(id, serde_json::json!({ "aliases": aliases }))
            }
            Err(response) => response,
        },
        "validate" => match parse_params::<ValidateParams>(&request) {
            Ok(params) => {
                let result = validation::validate_command(&params.command);
                match serde_json::to_value(result) {
                    Ok(value) => Response::success(id, value),
                    Err(e) => Response::error(id, protocol::INTERNAL_ERROR, e.to_string()),
                }
            }
            Err(response) => response,
        },
        "export" => match parse_params::<ExportParams>(&request) {
            Ok(params) => match transfer::export_aliases(&params.aliases, Path::new(&params.path)) {
                Ok(path) => Response::success(
                    id,
                    serde_json::json!({ "path": path.to_string_lossy() }),
                ),
                Err(e) => Response::error(id, protocol::OPERATION_FAILED, format!("Export failed: {}", e)),
            },
            Err(response) => response,
        },
        "import" => match parse_params::<ImportParams>(&request) {
            Ok(params) => match transfer::import_aliases(Path::new(&params.path)) {
                Ok(aliases) => Response::success(id, serde_json::json!({ "aliases": aliases })),
                Err(e) => Response::error(id, protocol::OPERATION_FAILED, format!("Import failed: {}", e)),
            },
            Err(response) => response,
        },
        "ping" => Response::success(id, serde_json::json!({ "pong": true })),
        _ => Response::error(
            id,
            protocol::METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        ),
    }
}
