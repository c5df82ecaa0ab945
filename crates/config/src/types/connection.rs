//! Connection configuration types for the Grafana API client.
//!
//! Responsibilities:
//! - Define connection settings (base URL, TLS verification).
//! - Define the main `Config` structure combining connection and auth.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `skip_verify` defaults to `false`; TLS certificates are verified unless opted out.
//! - `Config::default()` targets a local development server.

use crate::constants::DEFAULT_BASE_URL;
use crate::types::auth::AuthConfig;
use serde::{Deserialize, Serialize};

/// Connection configuration for a Grafana server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the Grafana server (e.g., https://grafana.example.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    #[serde(default)]
    pub skip_verify: bool,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Default for Config {
    /// Creates a development configuration pointing at `http://localhost:3000`
    /// with an empty token. Production use should go through `ConfigLoader`.
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string(), "")
    }
}

impl Config {
    /// Create a new config with the specified base URL and bearer token.
    pub fn new(base_url: String, token: impl Into<String>) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
            },
            auth: AuthConfig::new(token),
        }
    }

    /// Whether TLS certificates should be verified.
    pub fn verify_tls(&self) -> bool {
        !self.connection.skip_verify
    }
}
