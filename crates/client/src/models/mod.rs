//! Request payload types for the Grafana API.
//!
//! Each `Create*Params` struct names its required fields directly and holds
//! optional fields as `Option`. `payload()` builds the JSON object sent to
//! the server; a `None` field is left out of the object entirely rather than
//! sent as `null`.

mod dashboards;
mod datasources;
mod folders;

pub use dashboards::CreateDashboardParams;
pub use datasources::CreateDatasourceParams;
pub use folders::{CreateFolderParams, DEFAULT_FOLDER_LIMIT};
