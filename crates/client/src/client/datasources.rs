//! Datasource API methods for [`GrafanaClient`].

use reqwest::Method;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::CreateDatasourceParams;
use crate::response::NormalizedResult;

impl GrafanaClient {
    /// List all datasources.
    pub fn get_all_datasources(&self) -> Result<NormalizedResult> {
        let builder = self.request(Method::GET, endpoints::DATASOURCES);
        self.send(builder, "All datasources are returned.")
    }

    /// Get a datasource by UID.
    pub fn get_datasource_by_uid(&self, uid: &str) -> Result<NormalizedResult> {
        let builder = self.request(Method::GET, &endpoints::datasource_by_uid(uid));
        self.send(builder, &format!("Datasource with UID {uid} is returned."))
    }

    /// Get a datasource by name.
    pub fn get_datasource_by_name(&self, name: &str) -> Result<NormalizedResult> {
        let builder = self.request(Method::GET, &endpoints::datasource_by_name(name));
        self.send(
            builder,
            &format!("Datasource with the name {name} is returned."),
        )
    }

    /// Create a datasource.
    pub fn create_datasource(&self, params: &CreateDatasourceParams) -> Result<NormalizedResult> {
        let builder = self
            .request(Method::POST, endpoints::DATASOURCES_CREATE)
            .json(&params.payload());

        self.send(
            builder,
            &format!("The datasource with the name {} is created.", params.name),
        )
    }

    /// Delete a datasource by UID.
    pub fn delete_datasource_by_uid(&self, uid: &str) -> Result<NormalizedResult> {
        let builder = self.request(Method::DELETE, &endpoints::datasource_by_uid(uid));
        self.send(builder, &format!("The datasource with UID {uid} is deleted."))
    }

    /// Run the datasource health check by UID.
    pub fn get_datasource_health_by_uid(&self, uid: &str) -> Result<NormalizedResult> {
        let builder = self.request(Method::GET, &endpoints::datasource_health_by_uid(uid));
        self.send(builder, "Datasource health is returned.")
    }
}
