//! Authentication types for Grafana API configuration.
//!
//! Responsibilities:
//! - Hold the static bearer token used on every request.
//! - Handle serialization of the secret value.
//!
//! Does NOT handle:
//! - Token issuance, rotation or validation (the server owns that).
//!
//! Invariants:
//! - The token uses `secrecy::SecretString` so it never appears in `Debug` output.
//! - Serialization writes the token in plain text; secrecy is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Bearer token (service account or API key).
    #[serde(with = "secret_string")]
    pub token: SecretString,
}

impl AuthConfig {
    /// Create an auth config from a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into().into()),
        }
    }
}
