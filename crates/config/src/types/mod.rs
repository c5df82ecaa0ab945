//! Configuration type definitions for the Grafana API client.
//!
//! Responsibilities:
//! - Define the connection and authentication configuration types.
//! - Provide serialization helpers for sensitive values.
//!
//! Does NOT handle:
//! - Loading configuration from the environment (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - The bearer token is always held as a `secrecy::SecretString`.

mod auth;
mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
