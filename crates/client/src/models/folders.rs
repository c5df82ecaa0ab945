//! Folder payloads.

use serde_json::{Map, Value};

pub use grafana_config::constants::DEFAULT_FOLDER_LIMIT;

/// Parameters for `POST /api/folders`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateFolderParams {
    pub title: String,
    pub uid: Option<String>,
}

impl CreateFolderParams {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            uid: None,
        }
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Build the request body.
    pub fn payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        if let Some(uid) = &self.uid {
            payload.insert("uid".to_string(), Value::from(uid.as_str()));
        }
        payload.insert("title".to_string(), Value::from(self.title.as_str()));
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_only() {
        let payload = Value::Object(CreateFolderParams::new("Team A").payload());
        assert_eq!(payload, json!({"title": "Team A"}));
    }

    #[test]
    fn test_title_and_uid() {
        let payload = Value::Object(CreateFolderParams::new("Team A").with_uid("team-a").payload());
        assert_eq!(payload, json!({"title": "Team A", "uid": "team-a"}));
    }
}
