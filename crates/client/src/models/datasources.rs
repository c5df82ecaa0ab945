//! Datasource payloads.

use grafana_config::constants::DEFAULT_DATASOURCE_ACCESS;
use serde_json::{Map, Value};

/// Parameters for `POST /api/datasources/`.
///
/// `extra` entries are merged after the four fixed fields, so they can
/// override `name`, `type`, `url` or `access`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateDatasourceParams {
    pub name: String,
    /// Plugin type, e.g. `prometheus` (sent as `type`).
    pub kind: String,
    pub url: String,
    /// Access mode, `proxy` unless set.
    pub access: String,
    pub extra: Option<Map<String, Value>>,
}

impl CreateDatasourceParams {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            url: url.into(),
            access: DEFAULT_DATASOURCE_ACCESS.to_string(),
            extra: None,
        }
    }

    pub fn with_access(mut self, access: impl Into<String>) -> Self {
        self.access = access.into();
        self
    }

    pub fn with_extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Build the request body.
    pub fn payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        payload.insert("name".to_string(), Value::from(self.name.as_str()));
        payload.insert("type".to_string(), Value::from(self.kind.as_str()));
        payload.insert("url".to_string(), Value::from(self.url.as_str()));
        payload.insert("access".to_string(), Value::from(self.access.as_str()));

        if let Some(extra) = &self.extra {
            for (key, value) in extra {
                payload.insert(key.clone(), value.clone());
            }
        }

        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_access_defaults_to_proxy() {
        let params = CreateDatasourceParams::new("prom", "prometheus", "http://prom:9090");
        assert_eq!(
            Value::Object(params.payload()),
            json!({
                "name": "prom",
                "type": "prometheus",
                "url": "http://prom:9090",
                "access": "proxy"
            })
        );
    }

    #[test]
    fn test_explicit_access() {
        let params =
            CreateDatasourceParams::new("prom", "prometheus", "http://prom:9090").with_access("direct");
        assert_eq!(params.payload().get("access"), Some(&json!("direct")));
    }

    #[test]
    fn test_extra_fields_are_merged() {
        let mut extra = Map::new();
        extra.insert("isDefault".to_string(), json!(true));
        extra.insert("jsonData".to_string(), json!({"httpMethod": "POST"}));

        let params =
            CreateDatasourceParams::new("prom", "prometheus", "http://prom:9090").with_extra(extra);
        let payload = params.payload();

        assert_eq!(payload.len(), 6);
        assert_eq!(payload.get("isDefault"), Some(&json!(true)));
        assert_eq!(payload.get("jsonData"), Some(&json!({"httpMethod": "POST"})));
        assert_eq!(payload.get("access"), Some(&json!("proxy")));
    }

    #[test]
    fn test_extra_fields_override_fixed_fields() {
        let mut extra = Map::new();
        extra.insert("access".to_string(), json!("direct"));
        extra.insert("url".to_string(), json!("http://other:9090"));

        let params =
            CreateDatasourceParams::new("prom", "prometheus", "http://prom:9090").with_extra(extra);
        let payload = params.payload();

        assert_eq!(payload.get("access"), Some(&json!("direct")));
        assert_eq!(payload.get("url"), Some(&json!("http://other:9090")));
        assert_eq!(payload.get("name"), Some(&json!("prom")));
    }
}
