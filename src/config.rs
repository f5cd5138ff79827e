//! Server configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the media store directory
pub const STORE_DIR_ENV: &str = "PRO_TUBE_STORE_DIR";

/// Fallback store directory when nothing is configured
pub const DEFAULT_STORE_DIR: &str = "store";

/// Origins allowed by default (local frontend dev servers)
pub const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Parse a format name, falling back to `Pretty` for anything unknown
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory holding the `.mp4`/`.webp`/`.json` assets.
    /// `None` means unset; queries then answer Bad Request.
    pub store_dir: Option<PathBuf>,

    /// Enable CORS
    pub cors_enabled: bool,

    /// Allowed CORS origins; `*` allows any origin
    pub cors_allowed_origins: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,

    /// Log output format
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            store_dir: Some(PathBuf::from(DEFAULT_STORE_DIR)),
            cors_enabled: true,
            cors_allowed_origins: DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Apply `PRO_TUBE_STORE_DIR`, `HOST` and `PORT` from a variable lookup.
    ///
    /// An empty store directory value clears the setting. An unparsable
    /// port is ignored; the returned list describes what was ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut ignored = Vec::new();

        if let Some(dir) = lookup(STORE_DIR_ENV) {
            let dir = dir.trim();
            self.store_dir = if dir.is_empty() {
                None
            } else {
                Some(PathBuf::from(dir))
            };
        }

        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            self.host = host.trim().to_string();
        }

        if let Some(port) = lookup("PORT") {
            match port.trim().parse() {
                Ok(port) => self.port = port,
                Err(e) => ignored.push(format!("Ignoring invalid PORT {:?}: {}", port, e)),
            }
        }

        ignored
    }

    /// Default `EnvFilter` directive derived from `log_level`
    pub fn log_filter(&self) -> String {
        format!(
            "video_catalog={},tower_http={}",
            self.log_level, self.log_level
        )
    }
}
