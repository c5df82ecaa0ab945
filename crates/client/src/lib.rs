//! Grafana HTTP management API client.
//!
//! This crate wraps the dashboard, datasource and folder endpoints of a
//! Grafana server. Every operation is a single blocking round trip whose
//! response is normalized into a [`NormalizedResult`]: the JSON body on
//! success, the error body tagged with `customStatusCode` otherwise, or
//! `{"statusCode": ...}` when the server sent nothing back. Only transport
//! failures surface as [`ClientError`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod models;
pub mod response;

pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use error::{ClientError, Result};
pub use logging::{LoggingConfig, LoggingError, LoggingGuard};
pub use models::{
    CreateDashboardParams, CreateDatasourceParams, CreateFolderParams, DEFAULT_FOLDER_LIMIT,
};
pub use response::NormalizedResult;
