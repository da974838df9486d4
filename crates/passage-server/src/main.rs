//! # passage-server
//!
//! HTTP backend for the Passage immigration-consulting site.
//!
//! This binary provides:
//! - **REST API** (axum) for consultation requests, contact messages,
//!   fundraising campaigns and contributions, all kept in process memory
//! - **Request logging** for every `/api` call
//! - **Static hosting** of the built front-end with client-side routing
//!   fallback, when `STATIC_DIR` is set

mod api;
mod config;
mod error;
mod request_log;


use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use passage_shared::constants::APP_NAME;
use passage_store::{MemStorage, Storage};

use crate::api::AppState;
use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,passage_server=debug")),
        )
        .init();

    info!("Starting {} server v{}", APP_NAME, env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = ServerConfig::from_env();
    info!(?config, "Loaded configuration");

    // -----------------------------------------------------------------------
    // 3. Initialize storage (one instance for the life of the process)
    // -----------------------------------------------------------------------
    let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());

    let http_addr = config.http_addr;
    let app_state = AppState {
        storage,
        config: Arc::new(config),
    };

    // -----------------------------------------------------------------------
    // 4. Run the HTTP server (blocks until shutdown)
    // -----------------------------------------------------------------------
    tokio::select! {
        result = api::serve(app_state, http_addr) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "HTTP server failed");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
