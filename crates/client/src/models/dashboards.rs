//! Dashboard payloads.

use serde_json::{Map, Value};

/// Parameters for `POST /api/dashboards/db`.
///
/// `definition` is the full request object (typically
/// `{"dashboard": {...}}`). Optional fields are inserted after it and win
/// over a key of the same name in the definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateDashboardParams {
    pub definition: Map<String, Value>,
    pub folder_id: Option<i64>,
    pub folder_uid: Option<String>,
    pub message: Option<String>,
    pub overwrite: Option<bool>,
}

impl CreateDashboardParams {
    pub fn new(definition: Map<String, Value>) -> Self {
        Self {
            definition,
            ..Self::default()
        }
    }

    pub fn with_folder_id(mut self, folder_id: i64) -> Self {
        self.folder_id = Some(folder_id);
        self
    }

    pub fn with_folder_uid(mut self, folder_uid: impl Into<String>) -> Self {
        self.folder_uid = Some(folder_uid.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = Some(overwrite);
        self
    }

    /// Dashboard title from `definition.dashboard.title`, if present.
    pub fn title(&self) -> Option<&str> {
        self.definition
            .get("dashboard")
            .and_then(|d| d.get("title"))
            .and_then(Value::as_str)
    }

    /// Build the request body.
    pub fn payload(&self) -> Map<String, Value> {
        let mut payload = self.definition.clone();

        if let Some(folder_id) = self.folder_id {
            payload.insert("folderId".to_string(), Value::from(folder_id));
        }
        if let Some(folder_uid) = &self.folder_uid {
            payload.insert("folderUid".to_string(), Value::from(folder_uid.as_str()));
        }
        if let Some(message) = &self.message {
            payload.insert("message".to_string(), Value::from(message.as_str()));
        }
        if let Some(overwrite) = self.overwrite {
            payload.insert("overwrite".to_string(), Value::from(overwrite));
        }

        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition() -> Map<String, Value> {
        match json!({"dashboard": {"title": "Service Overview", "panels": []}}) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_payload_without_options_is_definition() {
        let params = CreateDashboardParams::new(definition());
        let payload = Value::Object(params.payload());
        assert_eq!(
            payload,
            json!({"dashboard": {"title": "Service Overview", "panels": []}})
        );
        assert!(payload.get("folderId").is_none());
        assert!(payload.get("folderUid").is_none());
        assert!(payload.get("message").is_none());
        assert!(payload.get("overwrite").is_none());
    }

    #[test]
    fn test_payload_with_every_option() {
        let params = CreateDashboardParams::new(definition())
            .with_folder_id(12)
            .with_folder_uid("team-a")
            .with_message("initial import")
            .with_overwrite(false);

        assert_eq!(
            Value::Object(params.payload()),
            json!({
                "dashboard": {"title": "Service Overview", "panels": []},
                "folderId": 12,
                "folderUid": "team-a",
                "message": "initial import",
                "overwrite": false
            })
        );
    }

    #[test]
    fn test_folder_id_and_uid_are_independent() {
        let params = CreateDashboardParams::new(definition()).with_folder_uid("team-a");
        let payload = params.payload();
        assert_eq!(payload.get("folderUid"), Some(&json!("team-a")));
        assert!(!payload.contains_key("folderId"));
    }

    #[test]
    fn test_options_override_definition_keys() {
        let mut definition = definition();
        definition.insert("overwrite".to_string(), json!(false));
        let params = CreateDashboardParams::new(definition).with_overwrite(true);
        assert_eq!(params.payload().get("overwrite"), Some(&json!(true)));
    }

    #[test]
    fn test_payload_does_not_mutate_definition() {
        let params = CreateDashboardParams::new(definition()).with_message("m");
        let _ = params.payload();
        assert!(!params.definition.contains_key("message"));
    }

    #[test]
    fn test_title() {
        assert_eq!(
            CreateDashboardParams::new(definition()).title(),
            Some("Service Overview")
        );
        assert_eq!(CreateDashboardParams::default().title(), None);
    }
}
