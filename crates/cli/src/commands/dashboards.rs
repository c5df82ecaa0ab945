//! Dashboards command implementation.
//!
//! Responsibilities:
//! - List, fetch, delete and create dashboards.
//! - Load dashboard definitions from JSON files.
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate).

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use grafana_client::{CreateDashboardParams, GrafanaClient, NormalizedResult};
use tracing::info;

use super::read_json_object;

#[derive(Subcommand)]
pub enum DashboardsCommand {
    /// List all dashboards
    List,
    /// Get a dashboard by UID
    Get {
        /// Dashboard UID
        uid: String,
    },
    /// Delete a dashboard by UID
    Delete {
        /// Dashboard UID
        uid: String,
    },
    /// Create or update a dashboard from a JSON definition
    Create {
        /// JSON file holding the definition (at least a `dashboard` object)
        #[arg(short, long, value_name = "FILE")]
        file: PathBuf,
        /// Numeric ID of the target folder
        #[arg(long)]
        folder_id: Option<i64>,
        /// UID of the target folder
        #[arg(long)]
        folder_uid: Option<String>,
        /// Commit message stored with the dashboard version
        #[arg(short, long)]
        message: Option<String>,
        /// Replace an existing dashboard with the same UID or title
        #[arg(long)]
        overwrite: Option<bool>,
    },
}

pub fn run(client: &GrafanaClient, command: DashboardsCommand) -> Result<NormalizedResult> {
    let result = match command {
        DashboardsCommand::List => client.get_all_dashboards()?,
        DashboardsCommand::Get { uid } => client.get_dashboard_by_uid(&uid)?,
        DashboardsCommand::Delete { uid } => client.delete_dashboard_by_uid(&uid)?,
        DashboardsCommand::Create {
            file,
            folder_id,
            folder_uid,
            message,
            overwrite,
        } => {
            info!(file = %file.display(), "Loading dashboard definition");
            let mut params = CreateDashboardParams::new(read_json_object(&file)?);
            if let Some(id) = folder_id {
                params = params.with_folder_id(id);
            }
            if let Some(uid) = folder_uid {
                params = params.with_folder_uid(uid);
            }
            if let Some(message) = message {
                params = params.with_message(message);
            }
            if let Some(overwrite) = overwrite {
                params = params.with_overwrite(overwrite);
            }
            client.create_dashboard(&params)?
        }
    };
    Ok(result)
}
