//! Configuration file support
//!
//! Loads server configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{LogFormat, ServerConfig, DEFAULT_CORS_ORIGINS, DEFAULT_STORE_DIR};
use crate::error::{Result, ServerError};

/// Configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Server settings
    pub server: ServerSettings,
    /// Media store settings
    pub store: Option<StoreSettings>,
    /// CORS settings
    pub cors: Option<CorsSettings>,
    /// Logging settings
    pub logging: Option<LoggingSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Host address to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Directory holding the media assets
    pub dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsSettings {
    /// Enable CORS
    pub enabled: Option<bool>,
    /// Allowed origins
    pub allowed_origins: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn default_config() -> Self {
        Self {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            store: Some(StoreSettings {
                dir: Some(DEFAULT_STORE_DIR.to_string()),
            }),
            cors: Some(CorsSettings {
                enabled: Some(true),
                allowed_origins: Some(
                    DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect(),
                ),
            }),
            logging: Some(LoggingSettings {
                level: "info".to_string(),
                format: Some("pretty".to_string()),
            }),
        }
    }

    /// Convert to ServerConfig
    pub fn into_server_config(self) -> ServerConfig {
        let defaults = ServerConfig::default();

        // A present `[store]` section with an empty or missing `dir` means unset.
        let store_dir = match self.store {
            Some(store) => store
                .dir
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from),
            None => defaults.store_dir,
        };

        let (cors_enabled, cors_allowed_origins) = match self.cors {
            Some(cors) => (
                cors.enabled.unwrap_or(defaults.cors_enabled),
                cors.allowed_origins.unwrap_or(defaults.cors_allowed_origins),
            ),
            None => (defaults.cors_enabled, defaults.cors_allowed_origins),
        };

        let (log_level, log_format) = match self.logging {
            Some(logging) => (
                logging.level,
                logging
                    .format
                    .as_deref()
                    .map(LogFormat::from_name)
                    .unwrap_or(defaults.log_format),
            ),
            None => (defaults.log_level, defaults.log_format),
        };

        ServerConfig {
            host: self.server.host,
            port: self.server.port,
            store_dir,
            cors_enabled,
            cors_allowed_origins,
            log_level,
            log_format,
        }
    }
}

/// Generate default configuration file at the specified path
pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    ConfigFile::default_config().to_file(path)
}

/// Configuration resolved at startup, with problems found while loading it.
///
/// Loading happens before logging is initialized, so warnings are carried
/// back to the caller instead of being logged here.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: ServerConfig,
    pub warnings: Vec<String>,
}

/// Load the server configuration from `path`.
///
/// A missing file yields defaults; an unreadable or malformed one also
/// yields defaults plus a warning. Environment overrides are applied last.
pub fn load_server_config<P: AsRef<Path>>(path: P) -> LoadedConfig {
    load_server_config_with(path, |key| std::env::var(key).ok())
}

/// Same as [`load_server_config`], with overrides read through `lookup`
pub fn load_server_config_with<P, F>(path: P, lookup: F) -> LoadedConfig
where
    P: AsRef<Path>,
    F: Fn(&str) -> Option<String>,
{
    let path = path.as_ref();
    let mut warnings = Vec::new();
    let mut config = if path.exists() {
        match ConfigFile::from_file(path) {
            Ok(cf) => cf.into_server_config(),
            Err(e) => {
                warnings.push(format!(
                    "Failed to load config file {}: {}. Using defaults.",
                    path.display(),
                    e
                ));
                ServerConfig::default()
            }
        }
    } else {
        ServerConfig::default()
    };
    warnings.extend(config.apply_overrides(lookup));
    LoadedConfig { config, warnings }
}
