//! Grafana CLI - Command-line front end for the Grafana management API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute dashboard, datasource and folder operations via the client library.
//! - Print the normalized result as pretty JSON.
//!
//! Does NOT handle:
//! - Request construction or response normalization (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - The logging guard lives until `main` returns so the log file is flushed.

mod args;
mod commands;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use clap::Parser;
use grafana_client::{GrafanaClient, LoggingConfig, NormalizedResult};
use grafana_config::{Config, ConfigLoader};

fn main() -> ExitCode {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load .env file: {e}");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    let mut logging = LoggingConfig::new();
    if let Some(ref path) = cli.log_file {
        logging = logging.with_log_file(path.clone());
    }
    let _guard = match logging.init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(result) => {
            match serde_json::to_string_pretty(&result) {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    eprintln!("Error: {e}");
                    return ExitCode::FAILURE;
                }
            }
            if result.is_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<NormalizedResult> {
    let config = build_config(&cli)?;
    let client = GrafanaClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to build Grafana client")?;

    match cli.command {
        Commands::Dashboards { command } => commands::dashboards::run(&client, command),
        Commands::Datasources { command } => commands::datasources::run(&client, command),
        Commands::Folders { command } => commands::folders::run(&client, command),
    }
}

/// Command-line values first, then the environment fills whatever is unset.
fn build_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref token) = cli.token {
        loader = loader.with_token(token.clone());
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    loader
        .from_env()
        .context("Failed to load configuration from environment")?
        .build()
        .context("Failed to build configuration")
}
