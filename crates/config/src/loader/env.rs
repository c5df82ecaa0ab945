//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Builder values set before `from_env()` are not overwritten.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use secrecy::SecretString;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_BASE_URL, ENV_SKIP_VERIFY, ENV_TOKEN};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.base_url().is_none()
        && let Some(url) = env_var_or_none(ENV_BASE_URL)
    {
        loader.set_base_url(Some(url));
    }
    if !loader.has_token()
        && let Some(token) = env_var_or_none(ENV_TOKEN)
    {
        loader.set_token(Some(SecretString::new(token.into())));
    }
    if loader.skip_verify().is_none()
        && let Some(skip) = env_var_or_none(ENV_SKIP_VERIFY)
    {
        loader.set_skip_verify(Some(parse_bool(ENV_SKIP_VERIFY, &skip)?));
    }
    Ok(())
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be true or false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_blank_values() {
        temp_env::with_vars(
            [
                ("GRAFANA_TEST_BLANK", Some("   ")),
                ("GRAFANA_TEST_PADDED", Some("  value  ")),
            ],
            || {
                assert_eq!(env_var_or_none("GRAFANA_TEST_BLANK"), None);
                assert_eq!(
                    env_var_or_none("GRAFANA_TEST_PADDED"),
                    Some("value".to_string())
                );
                assert_eq!(env_var_or_none("GRAFANA_TEST_UNSET_VARIABLE"), None);
            },
        );
    }

    #[test]
    fn test_parse_bool_accepts_common_spellings() {
        assert!(parse_bool("X", "TRUE").unwrap());
        assert!(parse_bool("X", "1").unwrap());
        assert!(!parse_bool("X", "no").unwrap());
        assert!(matches!(
            parse_bool("X", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
