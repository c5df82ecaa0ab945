//! Error types for configuration loading.
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, URLs).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Base URL is required. Set GRAFANA_URL or pass --base-url.")]
    MissingBaseUrl,

    #[error("A bearer token is required. Set GRAFANA_TOKEN or pass --token.")]
    MissingToken,

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// Only the byte index of the failure is kept, never the offending line.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotenv_parse_error_does_not_echo_contents() {
        let err = ConfigError::DotenvParse { error_index: 12 };
        let message = err.to_string();
        assert!(message.contains("position 12"));
        assert!(message.contains("DOTENV_DISABLED"));
    }

    #[test]
    fn test_invalid_value_names_variable() {
        let err = ConfigError::InvalidValue {
            var: "GRAFANA_SKIP_VERIFY".to_string(),
            message: "must be true or false".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for GRAFANA_SKIP_VERIFY: must be true or false"
        );
    }
}
