//! Wire types for the Revue endpoints.
//!
//! The service binds request and response members by their PascalCase names,
//! so every field is renamed explicitly.

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Body of the create and edit endpoints.
///
/// `Title` is the only member the service requires. Absent optional members
/// are omitted from the JSON rather than sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevuePayload {
    #[serde(rename = "Title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "Url")]
    pub url: String,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RevuePayload {
    /// Payload carrying every member.
    pub fn new(title: &str, url: &str, description: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            url: url.to_string(),
            description: Some(description.to_string()),
        }
    }
}

/// One element of the `GET /api/Revue/All` array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RevueRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Url", default)]
    pub url: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
}

/// Confirmation body returned by edit and delete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(rename = "Msg")]
    pub msg: Option<String>,
}

/// A single request against the service, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct RevueRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RevueRequest {
    fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends one query parameter.
    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Attaches a JSON body.
    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| ClientError::Decode {
            path: self.path.clone(),
            message: format!("Failed to encode request body: {}", e),
        })?;
        self.body = Some(value);
        Ok(self)
    }
}

/// Status and raw text body of a completed request.
#[derive(Debug, Clone)]
pub struct RevueResponse {
    /// Path the request was sent to
    pub path: String,
    pub status: StatusCode,
    pub body: String,
}

impl RevueResponse {
    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|e| ClientError::Decode {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Whether the raw body contains `phrase`.
    pub fn contains(&self, phrase: &str) -> bool {
        self.body.contains(phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_uses_pascal_case_members() {
        let payload = RevuePayload::new("New Revue", "", "This is the new revue");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({"Title": "New Revue", "Url": "", "Description": "This is the new revue"})
        );
    }

    #[test]
    fn test_payload_without_title_sends_only_url() {
        let payload = RevuePayload {
            title: None,
            url: String::new(),
            description: None,
        };
        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"Url": ""}));
    }

    #[test]
    fn test_record_requires_only_id() {
        let record: RevueRecord = serde_json::from_str(r#"{"Id":"abc","Extra":1}"#).unwrap();
        assert_eq!(record.id, "abc");
        assert!(record.title.is_none());

        assert!(serde_json::from_str::<RevueRecord>(r#"{"Title":"x"}"#).is_err());
    }

    #[test]
    fn test_response_json_reports_path_on_failure() {
        let response = RevueResponse {
            path: "/api/Revue/Edit".to_string(),
            status: StatusCode::OK,
            body: "not json".to_string(),
        };
        match response.json::<MessageResponse>() {
            Err(ClientError::Decode { path, .. }) => assert_eq!(path, "/api/Revue/Edit"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_request_builder_collects_query_and_body() {
        let request = RevueRequest::put("/api/Revue/Edit")
            .with_query("revueId", "42")
            .with_json(&RevuePayload::new("t", "", "d"))
            .unwrap();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.query, vec![("revueId".to_string(), "42".to_string())]);
        assert!(request.body.is_some());
    }
}
