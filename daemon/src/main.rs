use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::UnixListener;
use tracing::{debug, info, warn};

use gitalias_daemon::Config;
use gitalias_daemon::server::{AppState, handle_client, socket_path};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gitalias_daemon=info".parse()?),
        )
        .init();

    let config = Config::load().context("Failed to load configuration")?;
    let socket = socket_path();

    info!("Starting gitalias daemon");
    info!("Socket: {}", socket.display());
    debug!("Config: {:?}", config);

    // Remove existing socket if present
    if socket.exists() {
        std::fs::remove_file(&socket)
            .with_context(|| format!("Failed to remove stale socket {}", socket.display()))?;
    }

    // Ensure parent directory exists
    if let Some(parent) = socket.parent() {
        std::fs::create_dir_all(parent).ok();
    }

    let state = Arc::new(AppState::new(&config));

    let listener = UnixListener::bind(&socket)
        .with_context(|| format!("Failed to bind {}", socket.display()))?;
    info!("Listening on {}", socket.display());

    loop {
        tokio::select! {
            accepted = listener.accept() => match accepted {
                Ok((stream, _addr)) => {
                    debug!("New client connected");
                    let state = Arc::clone(&state);
                    tokio::spawn(async move {
                        let (reader, writer) = stream.into_split();
                        handle_client(reader, writer, &*state).await;
                    });
                }
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                }
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down");
                break;
            }
        }
    }

    std::fs::remove_file(&socket).ok();
    Ok(())
}
