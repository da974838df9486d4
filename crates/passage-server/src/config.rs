//! Server configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the server can start with zero
//! configuration for local development.

use std::net::SocketAddr;
use std::path::PathBuf;

use passage_shared::constants::{
    DEFAULT_HTTP_PORT, DEFAULT_LOG_BODY_PREVIEW, DEFAULT_MAX_BODY_SIZE,
};

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address for the HTTP (axum) server.
    /// Env: `HTTP_ADDR`, or `PORT` to bind `0.0.0.0` on that port.
    /// Default: `0.0.0.0:5000`
    pub http_addr: SocketAddr,

    /// Directory holding the built front-end. When set, every non-API path
    /// is served from it with an `index.html` fallback.
    /// Env: `STATIC_DIR`
    /// Default: unset (API only).
    pub static_dir: Option<PathBuf>,

    /// Maximum accepted request body in bytes.
    /// Env: `MAX_BODY_SIZE`
    /// Default: 1 MiB
    pub max_body_size: usize,

    /// How many characters of each API response body the request log echoes.
    /// Env: `LOG_BODY_PREVIEW` (`0` disables the preview)
    /// Default: `80`
    pub log_body_preview: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_addr: ([0, 0, 0, 0], DEFAULT_HTTP_PORT).into(),
            static_dir: None,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            log_body_preview: DEFAULT_LOG_BODY_PREVIEW,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            match port.parse::<u16>() {
                Ok(port) => config.http_addr = ([0, 0, 0, 0], port).into(),
                Err(_) => tracing::warn!(value = %port, "Invalid PORT, using default"),
            }
        }

        // HTTP_ADDR wins over PORT when both are set.
        if let Some(addr) = lookup("HTTP_ADDR") {
            if let Ok(parsed) = addr.parse::<SocketAddr>() {
                config.http_addr = parsed;
            } else {
                tracing::warn!(
                    value = %addr,
                    "Invalid HTTP_ADDR, using default"
                );
            }
        }

        if let Some(dir) = lookup("STATIC_DIR") {
            if !dir.is_empty() {
                config.static_dir = Some(PathBuf::from(dir));
            }
        }

        if let Some(val) = lookup("MAX_BODY_SIZE") {
            match val.parse::<usize>() {
                Ok(n) if n > 0 => config.max_body_size = n,
                _ => tracing::warn!(value = %val, "Invalid MAX_BODY_SIZE, using default"),
            }
        }

        if let Some(val) = lookup("LOG_BODY_PREVIEW") {
            match val.parse::<usize>() {
                Ok(n) => config.log_body_preview = n,
                Err(_) => tracing::warn!(value = %val, "Invalid LOG_BODY_PREVIEW, using default"),
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}
