//! Main Grafana HTTP API client and API methods.
//!
//! This module provides [`GrafanaClient`], which turns method calls into
//! authenticated requests and hands every response to
//! [`crate::response::normalize`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `dashboards`: Dashboard methods
//! - `datasources`: Datasource methods
//! - `folders`: Folder methods
//!
//! # What this module does NOT handle:
//! - Endpoint paths and identifier encoding (in [`crate::endpoints`])
//! - Request payload construction (in [`crate::models`])
//! - Installing a log subscriber (see [`crate::logging`])
//!
//! # Invariants
//! - Every request carries `Authorization: Bearer <token>`
//! - Every operation is a single blocking round trip with no retry
//! - Log events are emitted inside the client's span, which carries the
//!   server hostname

pub mod builder;

mod dashboards;
mod datasources;
mod folders;

use reqwest::Method;
use reqwest::blocking::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};
use tracing::Span;

use crate::error::Result;
use crate::response::{NormalizedResult, normalize};

/// Grafana HTTP API client.
///
/// All fields are read-only after construction, so a client can be shared
/// between threads (for example behind an `Arc`).
///
/// # Creating a Client
///
/// ```rust,no_run
/// use grafana_client::GrafanaClient;
/// use secrecy::SecretString;
///
/// let client = GrafanaClient::builder()
///     .base_url("https://grafana.example.com".to_string())
///     .token(SecretString::new("abc123".to_string().into()))
///     .build()?;
///
/// let dashboard = client.get_dashboard_by_uid("xyz")?;
/// if dashboard.is_error() {
///     eprintln!("lookup failed: {dashboard}");
/// }
/// # Ok::<(), grafana_client::ClientError>(())
/// ```
#[derive(Debug)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::blocking::Client,
    pub(crate) base_url: String,
    pub(crate) hostname: String,
    pub(crate) token: SecretString,
    pub(crate) verify_tls: bool,
    pub(crate) span: Option<Span>,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Build a client from a base URL, a bearer token and the TLS verification flag.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>, verify_tls: bool) -> Result<Self> {
        Self::builder()
            .base_url(base_url.into())
            .token(SecretString::new(token.into().into()))
            .verify_tls(verify_tls)
            .build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Hostname of the target server, used as the log scope.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Whether TLS certificates are verified.
    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// Span that scopes the events of one request.
    ///
    /// Without an injected span a fresh `grafana_api{hostname=...}` span is
    /// created per call, so a subscriber installed after the client was built
    /// still sees the hostname.
    fn log_span(&self) -> Span {
        match &self.span {
            Some(span) => span.clone(),
            None => tracing::info_span!("grafana_api", hostname = %self.hostname),
        }
    }

    /// Start an authenticated request to `path` (relative to the base URL).
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(hostname = %self.hostname, %method, path, "Sending request");

        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .header(
                "Authorization",
                format!("Bearer {}", self.token.expose_secret()),
            )
    }

    /// Execute a request and normalize its response.
    ///
    /// Transport failures are returned as errors; every HTTP status is data.
    pub(crate) fn send(
        &self,
        builder: RequestBuilder,
        success_message: &str,
    ) -> Result<NormalizedResult> {
        let span = self.log_span();
        let _entered = span.enter();

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?;

        normalize(status, &body, success_message)
    }
}
