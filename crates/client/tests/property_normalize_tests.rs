//! Property-based tests for response normalization.
//!
//! This module uses proptest to verify, for arbitrary statuses and bodies:
//! - an empty body always yields exactly `{"statusCode": status}`
//! - a non-200 object body gains `customStatusCode` and nothing else changes
//! - a 200 body comes back verbatim

use grafana_client::response::normalize;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

// =============================================================================
// Helper Strategies
// =============================================================================

/// Arbitrary JSON leaf values.
fn leaf_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::from),
    ]
}

/// Arbitrary JSON objects that never contain `customStatusCode`.
fn object_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-z][a-zA-Z0-9]{0,10}", leaf_strategy(), 0..8).prop_map(|m| {
        m.into_iter()
            .filter(|(k, _)| k != "customStatusCode")
            .collect()
    })
}

/// HTTP statuses other than 200.
fn non_200_status() -> impl Strategy<Value = u16> {
    (100u16..600).prop_filter("status must differ from 200", |s| *s != 200)
}

proptest! {
    #[test]
    fn prop_empty_body_is_status_only(status in 100u16..600) {
        let result = normalize(status, b"", "ok").unwrap();
        prop_assert_eq!(result.into_inner(), json!({"statusCode": status}));
    }

    #[test]
    fn prop_non_200_injects_status_only(status in non_200_status(), body in object_strategy()) {
        let raw = serde_json::to_vec(&body).unwrap();
        let result = normalize(status, &raw, "ok").unwrap().into_inner();

        let map = result.as_object().unwrap();
        prop_assert_eq!(map.len(), body.len() + 1);
        prop_assert_eq!(map.get("customStatusCode"), Some(&json!(status)));
        for (key, value) in &body {
            prop_assert_eq!(map.get(key), Some(value));
        }
    }

    #[test]
    fn prop_200_is_verbatim(body in object_strategy()) {
        let value = Value::Object(body);
        let raw = serde_json::to_vec(&value).unwrap();
        let result = normalize(200, &raw, "ok").unwrap();
        prop_assert!(result.status_code().is_none());
        prop_assert_eq!(result.into_inner(), value);
    }

    #[test]
    fn prop_200_array_is_verbatim(items in prop::collection::vec(leaf_strategy(), 0..10)) {
        let value = Value::Array(items);
        let raw = serde_json::to_vec(&value).unwrap();
        prop_assert_eq!(normalize(200, &raw, "ok").unwrap().into_inner(), value);
    }
}
