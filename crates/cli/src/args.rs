//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Bind global connection options to their `GRAFANA_*` environment variables
//!   (`GRAFANA_SKIP_VERIFY` is left to the configuration loader).
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use grafana_config::constants::{ENV_BASE_URL, ENV_LOG_FILE, ENV_TOKEN};

use crate::commands;

#[derive(Parser)]
#[command(name = "grafana-cli")]
#[command(about = "Grafana CLI - Manage dashboards, datasources and folders", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  grafana-cli dashboards list\n  grafana-cli -b https://grafana.example.com -t $GRAFANA_TOKEN folders list --limit 50\n  grafana-cli dashboards create --file board.json --folder-uid ops --overwrite true\n  grafana-cli datasources create --name prom --type prometheus --url http://prom:9090\n"
)]
pub struct Cli {
    /// Base URL of the Grafana server (e.g., https://grafana.example.com)
    #[arg(short, long, global = true, env = ENV_BASE_URL)]
    pub base_url: Option<String>,

    /// Service account or API token sent as a bearer token
    #[arg(short, long, global = true, env = ENV_TOKEN, hide_env_values = true)]
    pub token: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    ///
    /// Without the flag, GRAFANA_SKIP_VERIFY (true/false, 1/0, yes/no) is read
    /// by the configuration loader.
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Path of the append-only log file
    #[arg(long, global = true, env = ENV_LOG_FILE, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create, read, list and delete dashboards
    Dashboards {
        #[command(subcommand)]
        command: commands::dashboards::DashboardsCommand,
    },

    /// Create, read, list, delete and health-check datasources
    Datasources {
        #[command(subcommand)]
        command: commands::datasources::DatasourcesCommand,
    },

    /// Create, read, list and delete folders
    Folders {
        #[command(subcommand)]
        command: commands::folders::FoldersCommand,
    },
}
