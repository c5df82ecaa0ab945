//! Shared test utilities for grafana-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point the command at a `mockito` server with the test token.
//!
//! Invariants / Assumptions:
//! - `GRAFANA_TOKEN` is set to "abc123" unless overridden.
//! - Log output goes to a shared file under the system temp directory.

#![allow(dead_code)]

use assert_cmd::Command;
pub use mockito::{Matcher, Server, ServerGuard};
pub use predicates::prelude::*;
pub use serde_json::json;

/// Bearer token every hermetic command sends.
pub const TOKEN: &str = "abc123";

/// Expected `Authorization` header value for [`TOKEN`].
pub const AUTH_HEADER: &str = "Bearer abc123";

/// Returns a hermetic `grafana-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `GRAFANA_TOKEN` is set to a dummy value to satisfy config validation.
/// - Other connection env vars are cleared so nothing leaks from the host.
pub fn grafana_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("grafana-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("GRAFANA_TOKEN", TOKEN);
    cmd.env(
        "GRAFANA_LOG_FILE",
        std::env::temp_dir().join("grafana-cli-tests.log"),
    );

    // Clear potential host leakage
    cmd.env_remove("GRAFANA_URL")
        .env_remove("GRAFANA_SKIP_VERIFY")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `grafana-cli` command aimed at the mock server.
pub fn grafana_cmd_for(server: &ServerGuard) -> Command {
    let mut cmd = grafana_cmd();
    cmd.env("GRAFANA_URL", server.url());
    cmd
}
