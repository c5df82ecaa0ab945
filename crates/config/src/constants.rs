//! Centralized constants for the Grafana API workspace.
//!
//! Default values shared by the config, client and CLI crates.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default Grafana server URL used for local development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Endpoint Defaults
// =============================================================================

/// Default result-count limit for folder listings.
pub const DEFAULT_FOLDER_LIMIT: u32 = 1000;

/// Default datasource access mode.
pub const DEFAULT_DATASOURCE_ACCESS: &str = "proxy";

// =============================================================================
// Logging Defaults
// =============================================================================

/// Default append-only log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "grafana_api.log";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable holding the Grafana base URL.
pub const ENV_BASE_URL: &str = "GRAFANA_URL";

/// Environment variable holding the bearer token.
pub const ENV_TOKEN: &str = "GRAFANA_TOKEN";

/// Environment variable disabling TLS certificate verification.
pub const ENV_SKIP_VERIFY: &str = "GRAFANA_SKIP_VERIFY";

/// Environment variable overriding the log file path.
pub const ENV_LOG_FILE: &str = "GRAFANA_LOG_FILE";
