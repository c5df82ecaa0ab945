//! Client builder for constructing [`GrafanaClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, token)
//! - Normalizing the base URL (removing trailing slashes)
//! - Deriving the hostname used as the log scope
//! - Configuring the underlying HTTP client (TLS verification, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`GrafanaClient`] methods)
//! - Installing a log subscriber (see [`crate::logging`])
//!
//! # Invariants
//! - `base_url` and `token` are required and must be provided before `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - No request timeout is set beyond the transport default
//! - Disabling TLS verification only affects HTTPS connections; HTTP connections log a warning

use grafana_config::Config;
use grafana_config::constants::DEFAULT_MAX_REDIRECTS;
use secrecy::SecretString;
use tracing::Span;

use crate::client::GrafanaClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`GrafanaClient`].
///
/// # Example
///
/// ```rust,no_run
/// use grafana_client::GrafanaClient;
/// use secrecy::SecretString;
///
/// let client = GrafanaClient::builder()
///     .base_url("https://grafana.example.com".to_string())
///     .token(SecretString::new("abc123".to_string().into()))
///     .verify_tls(false)
///     .build()?;
/// # Ok::<(), grafana_client::ClientError>(())
/// ```
pub struct GrafanaClientBuilder {
    base_url: Option<String>,
    token: Option<SecretString>,
    verify_tls: bool,
    span: Option<Span>,
}

impl Default for GrafanaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            token: None,
            verify_tls: true,
            span: None,
        }
    }
}

impl GrafanaClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Grafana server, e.g. `https://grafana.example.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the bearer token sent on every request.
    pub fn token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    /// Set whether to verify TLS certificates (default: `true`).
    ///
    /// # Security Warning
    /// Only disable verification for development servers with self-signed
    /// certificates.
    pub fn verify_tls(mut self, verify: bool) -> Self {
        self.verify_tls = verify;
        self
    }

    /// Use `span` as the logging scope instead of the default
    /// `grafana_api{hostname=...}` span.
    ///
    /// An injected span is created by the caller, so it is only recorded if a
    /// subscriber was installed before it was created.
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Pre-configure the builder from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.token = Some(config.auth.token.clone());
        self.verify_tls = config.verify_tls();
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`GrafanaClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing, does not
    /// parse, or has no host.
    /// Returns [`ClientError::MissingToken`] if `token` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<GrafanaClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let parsed = url::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        let hostname = parsed
            .host_str()
            .ok_or_else(|| ClientError::InvalidUrl(format!("{base_url}: missing host")))?
            .to_string();

        let token = self.token.ok_or(ClientError::MissingToken)?;

        let mut http_builder = reqwest::blocking::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if !self.verify_tls {
            if parsed.scheme() == "https" {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "TLS verification disabled for a non-HTTPS URL; the setting has no effect"
                );
            }
        }

        let http = http_builder.build()?;


        Ok(GrafanaClient {
            http,
            base_url,
            hostname,
            token,
            verify_tls: self.verify_tls,
            span: self.span,
        })
    }
}
