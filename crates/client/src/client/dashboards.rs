//! Dashboard API methods for [`GrafanaClient`].
//!
//! # What this module handles:
//! - Creating (or overwriting) dashboards
//! - Getting and deleting dashboards by UID
//! - Listing dashboards through the search endpoint
//!
//! # What this module does NOT handle:
//! - Payload construction (in [`crate::models::CreateDashboardParams`])

use reqwest::Method;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::CreateDashboardParams;
use crate::response::NormalizedResult;

impl GrafanaClient {
    /// Create or update a dashboard.
    pub fn create_dashboard(&self, params: &CreateDashboardParams) -> Result<NormalizedResult> {
        let builder = self
            .request(Method::POST, endpoints::DASHBOARDS_DB)
            .json(&params.payload());

        self.send(
            builder,
            &format!(
                "Dashboard created with the name {}.",
                params.title().unwrap_or("<untitled>")
            ),
        )
    }

    /// Get a dashboard and its metadata by UID.
    pub fn get_dashboard_by_uid(&self, uid: &str) -> Result<NormalizedResult> {
        let builder = self.request(Method::GET, &endpoints::dashboard_by_uid(uid));
        self.send(builder, &format!("Dashboard with UID {uid} is found."))
    }

    /// Delete a dashboard by UID.
    pub fn delete_dashboard_by_uid(&self, uid: &str) -> Result<NormalizedResult> {
        let builder = self.request(Method::DELETE, &endpoints::dashboard_by_uid(uid));
        self.send(builder, &format!("Dashboard with UID {uid} deleted successfully."))
    }

    /// List all dashboards (search filtered to `dash-db`).
    pub fn get_all_dashboards(&self) -> Result<NormalizedResult> {
        let builder = self
            .request(Method::GET, endpoints::SEARCH)
            .query(&[("type", endpoints::SEARCH_TYPE_DASHBOARD)]);

        self.send(builder, "All dashboards are returned.")
    }
}
