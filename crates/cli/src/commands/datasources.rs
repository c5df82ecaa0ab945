//! Datasources command implementation.

use anyhow::Result;
use clap::Subcommand;
use grafana_client::{CreateDatasourceParams, GrafanaClient, NormalizedResult};
use grafana_config::constants::DEFAULT_DATASOURCE_ACCESS;

use super::parse_json_object;

#[derive(Subcommand)]
pub enum DatasourcesCommand {
    /// List all datasources
    List,
    /// Get a datasource by UID
    Get {
        /// Datasource UID
        uid: String,
    },
    /// Get a datasource by name
    GetByName {
        /// Datasource name
        name: String,
    },
    /// Create a datasource
    Create {
        /// Display name
        #[arg(long)]
        name: String,
        /// Plugin type (e.g. prometheus, loki)
        #[arg(long = "type", value_name = "TYPE")]
        kind: String,
        /// URL the datasource connects to
        #[arg(long)]
        url: String,
        /// Access mode
        #[arg(long, default_value = DEFAULT_DATASOURCE_ACCESS)]
        access: String,
        /// Extra fields as a JSON object, merged into the payload last
        #[arg(long, value_name = "JSON")]
        extra: Option<String>,
    },
    /// Delete a datasource by UID
    Delete {
        /// Datasource UID
        uid: String,
    },
    /// Run the health check of a datasource by UID
    Health {
        /// Datasource UID
        uid: String,
    },
}

pub fn run(client: &GrafanaClient, command: DatasourcesCommand) -> Result<NormalizedResult> {
    let result = match command {
        DatasourcesCommand::List => client.get_all_datasources()?,
        DatasourcesCommand::Get { uid } => client.get_datasource_by_uid(&uid)?,
        DatasourcesCommand::GetByName { name } => client.get_datasource_by_name(&name)?,
        DatasourcesCommand::Create {
            name,
            kind,
            url,
            access,
            extra,
        } => {
            let mut params = CreateDatasourceParams::new(name, kind, url).with_access(access);
            if let Some(extra) = extra {
                params = params.with_extra(parse_json_object(&extra, "--extra")?);
            }
            client.create_datasource(&params)?
        }
        DatasourcesCommand::Delete { uid } => client.delete_datasource_by_uid(&uid)?,
        DatasourcesCommand::Health { uid } => client.get_datasource_health_by_uid(&uid)?,
    };
    Ok(result)
}
