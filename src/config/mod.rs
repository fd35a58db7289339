//! # Service Configuration
//!
//! Loaded once at startup from a JSON file. Every field has a default, so an
//! empty object (or no file at all) is a valid configuration.
//!
//! ```json
//! {
//!   "server": { "host": "0.0.0.0", "port": 8080, "cors_origins": [] },
//!   "seed_sample_data": true,
//!   "log": { "filter": "info", "json": false }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info")
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output (default: false)
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Top-level service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Load the sample catalogue into an empty store (default: true)
    #[serde(default = "default_seed")]
    pub seed_sample_data: bool,

    #[serde(default)]
    pub log: LogConfig,
}

fn default_seed() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            seed_sample_data: default_seed(),
            log: LogConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
