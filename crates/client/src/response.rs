//! Response normalization.
//!
//! Every endpoint funnels its HTTP response through [`normalize`], which maps
//! status and body into one [`NormalizedResult`]:
//!
//! - empty body: `{"statusCode": <status>}`, whatever the status
//! - status other than 200: the decoded JSON object with
//!   `"customStatusCode": <status>` inserted
//! - status 200: the decoded JSON body, untouched
//!
//! A non-200 body that is not a JSON object is kept under `"rawBody"` next to
//! `"customStatusCode"`. A 200 body that is not JSON is the only HTTP-level
//! outcome reported as an error.

use std::fmt;
use std::ops::Deref;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::{ClientError, Result};

/// Key holding the status code of an empty response.
pub const STATUS_CODE_KEY: &str = "statusCode";

/// Key injected into non-200 response bodies.
pub const CUSTOM_STATUS_CODE_KEY: &str = "customStatusCode";

/// Key holding a non-200 body that is not a JSON object.
pub const RAW_BODY_KEY: &str = "rawBody";

/// The uniform result returned by every client operation.
///
/// Success and HTTP-level failure share this type. The status recorded by
/// [`normalize`] is kept beside the JSON value, so keys inside a 200 body
/// never change how the result is classified. Serializes as the JSON value
/// alone.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedResult {
    value: Value,
    status: Option<u16>,
}

impl NormalizedResult {
    /// Wrap a verbatim success body (no recorded status).
    pub fn new(value: Value) -> Self {
        Self {
            value,
            status: None,
        }
    }

    fn with_status(value: Value, status: u16) -> Self {
        Self {
            value,
            status: Some(status),
        }
    }

    /// Status code recorded by normalization, if any.
    ///
    /// Returns `None` for 200 responses with a body, whatever keys that body
    /// holds, since nothing is injected on the success path.
    pub fn status_code(&self) -> Option<u16> {
        self.status
    }

    /// Whether this result records a status other than 200.
    pub fn is_error(&self) -> bool {
        self.status.is_some_and(|status| status != 200)
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.value
    }

    /// Consume the result and return the underlying JSON value.
    pub fn into_inner(self) -> Value {
        self.value
    }
}

impl Serialize for NormalizedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl Deref for NormalizedResult {
    type Target = Value;

    fn deref(&self) -> &Value {
        &self.value
    }
}

impl PartialEq<Value> for NormalizedResult {
    fn eq(&self, other: &Value) -> bool {
        self.value == *other
    }
}

impl From<NormalizedResult> for Value {
    fn from(result: NormalizedResult) -> Self {
        result.value
    }
}

impl fmt::Display for NormalizedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Normalize a completed HTTP response.
///
/// `success_message` is logged at info level when the status is 200 and the
/// body is non-empty. Empty bodies and non-200 statuses log a warning.
///
/// # Errors
///
/// Returns [`ClientError::InvalidResponse`] only when a 200 response carries a
/// body that is not valid JSON.
pub fn normalize(status: u16, body: &[u8], success_message: &str) -> Result<NormalizedResult> {
    if body.is_empty() {
        warn!(status, "Empty response returned.");
        let mut map = Map::new();
        map.insert(STATUS_CODE_KEY.to_string(), Value::from(status));
        return Ok(NormalizedResult::with_status(Value::Object(map), status));
    }

    if status != 200 {
        warn!("The request returns a non 200 status code: {}", status);
        let value = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut map)) => {
                map.insert(CUSTOM_STATUS_CODE_KEY.to_string(), Value::from(status));
                Value::Object(map)
            }
            Ok(other) => with_raw_body(status, other),
            Err(e) => {
                tracing::debug!(status, error = %e, "Non-200 body is not JSON");
                with_raw_body(
                    status,
                    Value::String(String::from_utf8_lossy(body).into_owned()),
                )
            }
        };
        return Ok(NormalizedResult::with_status(value, status));
    }

    let value: Value =
        serde_json::from_slice(body).map_err(|e| ClientError::InvalidResponse {
            status,
            message: e.to_string(),
        })?;

    info!("{}", success_message);
    Ok(NormalizedResult::new(value))
}

fn with_raw_body(status: u16, raw: Value) -> Value {
    let mut map = Map::new();
    map.insert(CUSTOM_STATUS_CODE_KEY.to_string(), Value::from(status));
    map.insert(RAW_BODY_KEY.to_string(), raw);
    Value::Object(map)
}
