//! Video Catalog Server
//!
//! Serves a directory of media assets as a JSON listing of videos. Files
//! sharing a base name are grouped into one record holding the `.mp4`
//! video, the `.webp` thumbnail and the `.json` metadata file.

mod config;
mod config_file;
mod error;
mod http;
mod index;
#[cfg(test)]
mod integration;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, ServerConfig};
use crate::error::{Result, ServerError};
use crate::http::create_router;
use crate::state::AppState;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "video-catalog";

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let first = args.next();

    // `--init-config [path]` writes a default configuration file and exits
    if first.as_deref() == Some("--init-config") {
        let path = args.next().unwrap_or_else(|| "config.toml".to_string());
        config_file::generate_default_config(&path)?;
        println!("Wrote default configuration to {}", path);
        return Ok(());
    }

    // Load configuration
    let config_path = first.unwrap_or_else(|| "config.toml".to_string());
    let loaded = config_file::load_server_config(&config_path);
    let config = loaded.config;

    // Initialize logging
    init_logging(&config);

    tracing::info!("{} v{} starting", APP_NAME, VERSION);
    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!("Configuration loaded: {:?}", config);
    match &config.store_dir {
        Some(dir) if dir.is_dir() => tracing::info!("Serving media store {:?}", dir),
        Some(dir) => tracing::warn!("Media store {:?} is not a directory", dir),
        None => tracing::warn!("No media store configured; video listing will be rejected"),
    }

    // Create application state
    let state = Arc::new(AppState::new(config.clone()));

    // Build router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = config
        .socket_addr()
        .parse()
        .map_err(|e| ServerError::Config(format!("invalid listen address: {}", e)))?;
    tracing::info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize logging with tracing
fn init_logging(config: &ServerConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_filter().into());

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
