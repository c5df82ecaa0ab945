//! Folder API methods for [`GrafanaClient`].

use reqwest::Method;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{CreateFolderParams, DEFAULT_FOLDER_LIMIT};
use crate::response::NormalizedResult;

impl GrafanaClient {
    /// List folders, returning at most `limit` entries (default 1000).
    pub fn get_all_folders(&self, limit: Option<u32>) -> Result<NormalizedResult> {
        let limit = limit.unwrap_or(DEFAULT_FOLDER_LIMIT);
        let builder = self
            .request(Method::GET, endpoints::FOLDERS)
            .query(&[("limit", limit)]);

        self.send(builder, "All folders are returned.")
    }

    /// Get a folder by UID.
    pub fn get_folder_by_uid(&self, uid: &str) -> Result<NormalizedResult> {
        let builder = self.request(Method::GET, &endpoints::folder_by_uid(uid));
        self.send(builder, &format!("The folder with UID {uid} is returned."))
    }

    /// Create a folder.
    pub fn create_folder(&self, params: &CreateFolderParams) -> Result<NormalizedResult> {
        let builder = self
            .request(Method::POST, endpoints::FOLDERS)
            .json(&params.payload());

        self.send(
            builder,
            &format!("A folder with the title {} is created.", params.title),
        )
    }

    /// Delete a folder by UID.
    pub fn delete_folder_by_uid(&self, uid: &str) -> Result<NormalizedResult> {
        let builder = self.request(Method::DELETE, &endpoints::folder_by_uid(uid));
        self.send(builder, &format!("The folder with UID {uid} is deleted."))
    }
}
