//! Application settings loaded from environment variables.

use std::env;
use std::time::Duration;

use super::constants::{
    DEFAULT_MONGO_URI, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub mongo_uri: String,
    /// Explicit database name; falls back to the one in `mongo_uri`
    pub database_name: Option<String>,
    pub server_selection_timeout: Duration,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("mongo_uri", &"[REDACTED]")
            .field("database_name", &self.database_name)
            .field("server_selection_timeout", &self.server_selection_timeout)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            mongo_uri: lookup("MONGO_URI").unwrap_or_else(|| DEFAULT_MONGO_URI.to_string()),
            database_name: lookup("MONGO_DB_NAME").filter(|name| !name.is_empty()),
            server_selection_timeout: Duration::from_secs(
                lookup("MONGO_SERVER_SELECTION_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_SERVER_SELECTION_TIMEOUT_SECS),
            ),
            server_host: lookup("HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
