//! Error types for the Grafana client.
//!
//! Only transport failures and undecodable success bodies are errors.
//! Non-200 statuses and empty bodies are returned as data (see
//! [`crate::response`]).

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Grafana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure (DNS, TLS, refused connection, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// No bearer token was supplied to the builder.
    #[error("A bearer token is required")]
    MissingToken,

    /// A 200 response whose body is not valid JSON.
    #[error("Invalid response format (status {status}): {message}")]
    InvalidResponse { status: u16, message: String },
}

impl ClientError {
    /// Check if this error came from the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpError(_))
    }
}
