//! Common test utilities for integration tests.
//!
//! Every test talks to a local `mockito` server; the client under test is
//! pointed at it with the token `abc123`.

#![allow(dead_code)]

pub use grafana_client::GrafanaClient;
pub use mockito::{Matcher, Server, ServerGuard};
pub use serde_json::{Value, json};

/// Bearer token used by every test client.
pub const TOKEN: &str = "abc123";

/// Expected `Authorization` header value for [`TOKEN`].
pub const AUTH_HEADER: &str = "Bearer abc123";

/// Build a client targeting the mock server.
pub fn client_for(server: &ServerGuard) -> GrafanaClient {
    GrafanaClient::new(server.url(), TOKEN, true).expect("client should build")
}

/// Unwrap a `json!` object literal into a map.
pub fn object(value: Value) -> serde_json::Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
