//! Command implementations for the Grafana CLI.
//!
//! Each submodule owns one resource: its clap subcommand enum and a `run`
//! function that maps the subcommand onto a single client call.

pub mod dashboards;
pub mod datasources;
pub mod folders;

use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

/// Parses `text` as a JSON object, naming `what` in any error.
pub(crate) fn parse_json_object(text: &str, what: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(text).with_context(|| format!("{what} is not valid JSON"))? {
        Value::Object(map) => Ok(map),
        other => bail!("{what} must be a JSON object, got {}", json_kind(&other)),
    }
}

/// Reads a JSON object from a file.
pub(crate) fn read_json_object(path: &Path) -> Result<Map<String, Value>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_json_object(&text, &path.display().to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
