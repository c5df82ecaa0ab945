//! Grafana HTTP API paths.
//!
//! Path builders for every endpoint the client calls. Identifiers are
//! percent-encoded as a single path segment; query parameters are attached by
//! the caller through `reqwest`.

pub mod url_encoding;

use url_encoding::encode_path_segment;

/// Create or update a dashboard.
pub const DASHBOARDS_DB: &str = "/api/dashboards/db";

/// Search endpoint, used to list dashboards with `type=dash-db`.
pub const SEARCH: &str = "/api/search";

/// Search type selecting dashboards only.
pub const SEARCH_TYPE_DASHBOARD: &str = "dash-db";

/// List datasources.
pub const DATASOURCES: &str = "/api/datasources";

/// Create a datasource. Grafana accepts the trailing slash form.
pub const DATASOURCES_CREATE: &str = "/api/datasources/";

/// List or create folders.
pub const FOLDERS: &str = "/api/folders";

pub fn dashboard_by_uid(uid: &str) -> String {
    format!("/api/dashboards/uid/{}", encode_path_segment(uid))
}

pub fn datasource_by_uid(uid: &str) -> String {
    format!("{}/uid/{}", DATASOURCES, encode_path_segment(uid))
}

pub fn datasource_by_name(name: &str) -> String {
    format!("{}/name/{}", DATASOURCES, encode_path_segment(name))
}

pub fn datasource_health_by_uid(uid: &str) -> String {
    format!("{}/health", datasource_by_uid(uid))
}

pub fn folder_by_uid(uid: &str) -> String {
    format!("{}/{}", FOLDERS, encode_path_segment(uid))
}
