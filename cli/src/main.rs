use std::io::{BufRead, BufReader, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "gitalias")]
#[command(about = "Rank git aliases by shell usage and suggest names for new ones")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest alias names for a git command
    Suggest {
        /// Command to alias, without the leading `git` (e.g. checkout -b)
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
        /// Alias names already taken, comma separated
        #[arg(long, value_delimiter = ',')]
        existing: Option<Vec<String>>,
        /// Output names only, one per line
        #[arg(long)]
        plain: bool,
    },
    /// Score aliases by shell history usage
    Scores {
        /// Aliases as name=command pairs
        #[arg(required = true)]
        aliases: Vec<String>,
    },
    /// Show the most used git subcommands in shell history
    Usage {
        /// Maximum entries
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Check an alias command for destructive patterns
    Validate {
        /// Alias command
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
    /// Export aliases to a JSON file
    Export {
        /// Output file
        path: String,
        /// Aliases as name=command pairs
        #[arg(required = true)]
        aliases: Vec<String>,
        /// Scope recorded for the exported aliases
        #[arg(long, value_enum, default_value_t = ScopeArg::Global)]
        scope: ScopeArg,
    },
    /// Read and validate aliases from a JSON export
    Import {
        /// Export file
        path: String,
    },
    /// Browse or search the bundled alias library
    Library {
        /// Search name, command, category and description
        query: Option<String>,
        /// Only aliases in this category
        #[arg(short, long)]
        category: Option<String>,
        /// List category names instead of aliases
        #[arg(long, conflicts_with_all = ["query", "category"])]
        categories: bool,
    },
    /// Show daemon status
    Status,
    /// Ping the daemon
    Ping,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScopeArg {
    Global,
    Local,
}

impl ScopeArg {
    fn as_str(self) -> &'static str {
        match self {
            ScopeArg::Global => "global",
            ScopeArg::Local => "local",
        }
    }
}

fn socket_path() -> PathBuf {
    if let Ok(runtime_dir) = std::env::var("XDG_RUNTIME_DIR") {
        PathBuf::from(runtime_dir).join("gitalias.sock")
    } else {
        PathBuf::from(format!(
            "/tmp/gitalias-{}.sock",
            unsafe { libc::getuid() }
        ))
    }
}

#[derive(Serialize)]
struct RpcRequest {
    jsonrpc: &'static str,
    id: u64,
    method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<serde_json::Value>,
}

impl RpcRequest {
    fn new(method: &str, params: Option<serde_json::Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            id: 1,
            method: method.to_string(),
            params,
        }
    }
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<serde_json::Value>,
    error: Option<RpcError>,
}

#[derive(Deserialize)]
struct RpcError {
    code: i32,
    message: String,
}

fn send_rpc(request: &RpcRequest) -> Result<serde_json::Value> {
    let socket = socket_path();

    let mut stream = UnixStream::connect(&socket)
        .with_context(|| format!("Failed to connect to daemon at {}", socket.display()))?;

    stream.set_read_timeout(Some(Duration::from_secs(5)))?;
    stream.set_write_timeout(Some(Duration::from_secs(5)))?;

    let request_json = serde_json::to_string(request)?;
    writeln!(stream, "{}", request_json)?;
    stream.flush()?;

    let mut reader = BufReader::new(stream);
    let mut response_line = String::new();
    reader.read_line(&mut response_line)?;

    let response: RpcResponse = serde_json::from_str(&response_line)?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error {}: {}", error.code, error.message);
    }

    response.result.context("No result in response")
}

/// Split `name=command` into an alias object
fn parse_alias(pair: &str) -> Result<serde_json::Value> {
    let (name, command) = pair
        .split_once('=')
        .with_context(|| format!("Expected name=command, got {:?}", pair))?;

    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Alias name is empty in {:?}", pair);
    }

    Ok(serde_json::json!({ "name": name, "command": command.trim() }))
}

/// Expand `~` and make the path absolute, since the daemon has its own cwd
fn resolve_path(path: &str) -> Result<String> {
    let expanded = shellexpand::tilde(path);
    let absolute = std::path::absolute(expanded.as_ref())
        .with_context(|| format!("Invalid path {}", expanded))?;
    Ok(absolute.to_string_lossy().to_string())
}

fn cmd_suggest(command: &str, existing: Option<&[String]>, plain: bool) -> Result<()> {
    let mut params = serde_json::json!({ "command": command });
    if let Some(names) = existing {
        params["existing"] = serde_json::json!(names);
    }

    let result = send_rpc(&RpcRequest::new("suggest", Some(params)))?;

    if let Some(suggestions) = result.get("suggestions").and_then(|s| s.as_array()) {
        if suggestions.is_empty() && !plain {
            println!("No suggestions");
        }
        for entry in suggestions {
            let alias = entry.get("alias").and_then(|a| a.as_str()).unwrap_or("");
            if plain {
                println!("{}", alias);
            } else {
                let scheme = entry.get("scheme").and_then(|s| s.as_str()).unwrap_or("?");
                let reason = entry.get("reason").and_then(|r| r.as_str()).unwrap_or("");
                println!("{:<8} {:<14} {}", alias, scheme, reason);
            }
        }
    }

    Ok(())
}

fn cmd_scores(pairs: &[String]) -> Result<()> {
    let aliases = pairs
        .iter()
        .map(|p| parse_alias(p))
        .collect::<Result<Vec<_>>>()?;

    let result = send_rpc(&RpcRequest::new(
        "scores",
        Some(serde_json::json!({ "aliases": aliases })),
    ))?;

    if let Some(scores) = result.get("scores").and_then(|s| s.as_object()) {
        let mut entries: Vec<(&String, u64)> = scores
            .iter()
            .map(|(name, score)| (name, score.as_u64().unwrap_or(0)))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        for (name, score) in entries {
            println!("{:>6}  {}", score, name);
        }
    }

    Ok(())
}

fn cmd_usage(limit: usize) -> Result<()> {
    let result = send_rpc(&RpcRequest::new(
        "usage",
        Some(serde_json::json!({ "limit": limit })),
    ))?;

    if let Some(usage) = result.get("usage").and_then(|u| u.as_array()) {
        if usage.is_empty() {
            println!("No git usage found in shell history");
        }
        for entry in usage {
            let key = entry.get("key").and_then(|k| k.as_str()).unwrap_or("");
            let count = entry.get("count").and_then(|c| c.as_u64()).unwrap_or(0);
            println!("{:>6}  {}", count, key);
        }
    }

    Ok(())
}

fn cmd_validate(command: &str) -> Result<()> {
    let result = send_rpc(&RpcRequest::new(
        "validate",
        Some(serde_json::json!({ "command": command })),
    ))?;

    let valid = result.get("valid").and_then(|v| v.as_bool()).unwrap_or(false);
    for key in ["errors", "warnings"] {
        if let Some(messages) = result.get(key).and_then(|m| m.as_array()) {
            let label = if key == "errors" { "error" } else { "warning" };
            for message in messages.iter().filter_map(|m| m.as_str()) {
                println!("{}: {}", label, message);
            }
        }
    }

    if !valid {
        anyhow::bail!("Invalid alias command");
    }
    println!("ok");
    Ok(())
}

fn cmd_export(path: &str, pairs: &[String], scope: ScopeArg) -> Result<()> {
    let aliases = pairs
        .iter()
        .map(|p| {
            let mut alias = parse_alias(p)?;
            alias["scope"] = serde_json::json!(scope.as_str());
            Ok(alias)
        })
        .collect::<Result<Vec<_>>>()?;

    let result = send_rpc(&RpcRequest::new(
        "export",
        Some(serde_json::json!({ "aliases": aliases, "path": resolve_path(path)? })),
    ))?;

    let written = result.get("path").and_then(|p| p.as_str()).unwrap_or(path);
    eprintln!("Exported {} aliases to {}", pairs.len(), written);
    Ok(())
}

fn cmd_import(path: &str) -> Result<()> {
    let result = send_rpc(&RpcRequest::new(
        "import",
        Some(serde_json::json!({ "path": resolve_path(path)? })),
    ))?;

    if let Some(aliases) = result.get("aliases").and_then(|a| a.as_array()) {
        for alias in aliases {
            let name = alias.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let command = alias.get("command").and_then(|c| c.as_str()).unwrap_or("");
            let scope = alias.get("scope").and_then(|s| s.as_str()).unwrap_or("global");
            println!("{}\t{}\t{}", scope, name, command);
        }
        eprintln!("Read {} aliases", aliases.len());
    }

    Ok(())
}

fn cmd_library(query: Option<&str>, category: Option<&str>, categories: bool) -> Result<()> {
    let request = match query {
        Some(query) => RpcRequest::new(
            "library_search",
            Some(serde_json::json!({ "query": query, "category": category })),
        ),
        None => RpcRequest::new(
            "library",
            category.map(|c| serde_json::json!({ "category": c })),
        ),
    };
    let result = send_rpc(&request)?;

    if categories {
        if let Some(names) = result.get("categories").and_then(|c| c.as_array()) {
            for name in names.iter().filter_map(|n| n.as_str()) {
                println!("{}", name);
            }
        }
        return Ok(());
    }

    if let Some(aliases) = result.get("aliases").and_then(|a| a.as_array()) {
        if aliases.is_empty() {
            println!("No matching aliases");
        }
        for alias in aliases {
            let name = alias.get("name").and_then(|n| n.as_str()).unwrap_or("");
            let command = alias.get("command").and_then(|c| c.as_str()).unwrap_or("");
            let description = alias.get("description").and_then(|d| d.as_str()).unwrap_or("");
            println!("{:<14} {:<40} {}", name, command, description);
        }
    }

    Ok(())
}

fn cmd_status() -> Result<()> {
    match send_rpc(&RpcRequest::new("ping", None)) {
        Ok(_) => {
            println!("Daemon: running");
            println!("Socket: {}", socket_path().display());
        }
        Err(e) => {
            println!("Daemon: not running ({})", e);
        }
    }

    Ok(())
}

fn cmd_ping() -> Result<()> {
    let result = send_rpc(&RpcRequest::new("ping", None))?;

    if result.get("pong").is_some() {
        println!("pong");
        Ok(())
    } else {
        anyhow::bail!("Unexpected response: {:?}", result);
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Suggest { command, existing, plain } => {
            cmd_suggest(&command.join(" "), existing.as_deref(), plain)?;
        }
        Commands::Scores { aliases } => {
            cmd_scores(&aliases)?;
        }
        Commands::Usage { limit } => {
            cmd_usage(limit)?;
        }
        Commands::Validate { command } => {
            cmd_validate(&command.join(" "))?;
        }
        Commands::Export { path, aliases, scope } => {
            cmd_export(&path, &aliases, scope)?;
        }
        Commands::Import { path } => {
            cmd_import(&path)?;
        }
        Commands::Library { query, category, categories } => {
            cmd_library(query.as_deref(), category.as_deref(), categories)?;
        }
        Commands::Status => {
            cmd_status()?;
        }
        Commands::Ping => {
            cmd_ping()?;
        }
    }

    Ok(())
}
