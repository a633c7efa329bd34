//! Server configuration from environment variables and optional TOML file.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum upload body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_body_bytes() -> usize {
    // Allow large record batches during uploads.
    50 * 1024 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("failed to read config file: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config file: {}", e))
    }

    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): bind host
    /// - `PORT` (optional, default: 8080): bind port
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| default_host());
        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| "PORT must be a valid port number".to_string())?,
            Err(_) => default_port(),
        };
        Ok(Self {
            host,
            port,
            max_body_bytes: default_max_body_bytes(),
        })
    }

    /// Resolve configuration: file named by `SENTINELA_CONFIG` when set,
    /// environment variables otherwise.
    pub fn load() -> Result<Self, String> {
        match env::var("SENTINELA_CONFIG") {
            Ok(path) => Self::from_file(path),
            Err(_) => Self::from_env(),
        }
    }

    /// Bind address string, e.g. `0.0.0.0:8080`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
