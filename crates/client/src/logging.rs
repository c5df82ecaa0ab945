//! Log subscriber setup for applications using the client.
//!
//! The client itself only emits `tracing` events inside its
//! `grafana_api{hostname=...}` span. Installing a subscriber is left to the
//! application, once per process, so that building several clients never
//! duplicates log output.
//!
//! [`LoggingConfig::init`] installs the usual arrangement: every event at
//! info level and above is appended to a log file, and warnings are mirrored
//! to stderr.
//!
//! # Usage
//!
//! ```rust,ignore
//! use grafana_client::LoggingConfig;
//!
//! let _guard = LoggingConfig::new().with_log_file("/var/log/grafana_api.log").init()?;
//! // Use clients...
//! // Dropping the guard flushes the file writer.
//! ```

use std::path::{Path, PathBuf};

use grafana_config::constants::{DEFAULT_LOG_FILE, ENV_LOG_FILE};
use grafana_config::env_var_or_none;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for the process-wide log subscriber.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Append-only log file
    pub log_file: PathBuf,
    /// Minimum level written to the log file (overridable with `RUST_LOG`)
    pub file_level: Level,
    /// Minimum level mirrored to stderr
    pub console_level: Level,
    /// Whether to mirror events to stderr at all
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            file_level: Level::INFO,
            console_level: Level::WARN,
            console: true,
        }
    }
}

impl LoggingConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults, with the log file taken from `GRAFANA_LOG_FILE` when set.
    pub fn from_env() -> Self {
        let config = Self::default();
        match env_var_or_none(ENV_LOG_FILE) {
            Some(path) => config.with_log_file(path),
            None => config,
        }
    }

    /// Builder method to set the log file path.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Builder method to set the file level.
    pub fn with_file_level(mut self, level: Level) -> Self {
        self.file_level = level;
        self
    }

    /// Builder method to set the stderr level.
    pub fn with_console_level(mut self, level: Level) -> Self {
        self.console_level = level;
        self
    }

    /// Builder method to control the stderr layer.
    pub fn with_console(mut self, enable: bool) -> Self {
        self.console = enable;
        self
    }

    /// Install the global subscriber.
    ///
    /// # Returns
    /// A guard that must be held until shutdown so buffered file output is
    /// flushed.
    ///
    /// # Errors
    /// Returns an error if the log file cannot be opened or a global
    /// subscriber is already installed.
    pub fn init(&self) -> Result<LoggingGuard, LoggingError> {
        let (directory, file_name) = split_log_path(&self.log_file)?;

        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(file_name)
            .build(directory)
            .map_err(|e| LoggingError::Appender(e.to_string()))?;
        let (writer, file_guard) = tracing_appender::non_blocking(appender);

        let file_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(self.file_level).into())
            .from_env_lossy();

        let file_layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_filter(file_filter);

        let console_layer = self.console.then(|| {
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(LevelFilter::from_level(self.console_level))
        });

        tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer)
            .try_init()
            .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

        Ok(LoggingGuard {
            _file_guard: file_guard,
        })
    }
}

/// Split a log path into its directory (defaulting to `.`) and file name.
fn split_log_path(path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(path.to_path_buf()))?
        .to_string();

    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok((directory, file_name))
}

/// Guard that keeps the non-blocking file writer alive.
///
/// Dropping it flushes pending log lines.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
}

/// Errors that can occur during logging initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log file path: {0}")]
    InvalidPath(PathBuf),

    #[error("Failed to open log file: {0}")]
    Appender(String),

    #[error("A global log subscriber is already installed: {0}")]
    AlreadyInitialized(String),
}
