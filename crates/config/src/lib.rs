//! Configuration management for the Grafana API client.
//!
//! This crate provides the connection and authentication types consumed by
//! `grafana-client`, and a loader that assembles them from builder values,
//! environment variables and an optional `.env` file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{AuthConfig, Config, ConnectionConfig};
