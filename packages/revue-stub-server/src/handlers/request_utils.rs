//! Request utilities for HTTP endpoints.

use std::collections::HashMap;

use http_body_util::BodyExt;
use hyper::{body::Bytes, Request, Response};
use percent_encoding::percent_decode_str;
use tokio::time;

use crate::router::RouterError;

/// Reads the request body, failing with [`RouterError::Timeout`] after `timeout_ms`.
pub async fn read_request_body_with_timeout(
    req: Request<hyper::body::Incoming>,
    timeout_ms: u64,
) -> Result<Bytes, RouterError> {
    let timeout_duration = time::Duration::from_millis(timeout_ms);
    let body = time::timeout(timeout_duration, req.collect())
        .await
        .map_err(|_| RouterError::Timeout)?
        .map_err(|e| RouterError::InternalError(format!("Failed to read request body: {}", e)))?;
    Ok(body.to_bytes())
}

/// Decodes a JSON request body.
pub fn parse_json_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, RouterError> {
    serde_json::from_slice(body)
        .map_err(|e| RouterError::BadRequest(format!("Failed to parse request: {}", e)))
}

/// Builds a JSON response.
pub fn build_response(status: u16, json: Vec<u8>) -> Result<Response<Bytes>, RouterError> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Bytes::from(json))
        .map_err(|e| RouterError::InternalError(format!("Failed to build response: {}", e)))
}

/// Parses a URL query string into decoded key/value pairs.
///
/// Pairs without `=` are ignored. Later duplicates win.
pub fn parse_query_params(query_str: Option<&str>) -> HashMap<String, String> {
    let mut params = HashMap::new();

    if let Some(query_str) = query_str {
        for pair in query_str.split('&') {
            let Some((key, encoded_value)) = pair.split_once('=') else {
                continue;
            };
            // Form encoding uses '+' for spaces.
            let encoded_value = encoded_value.replace('+', " ");
            let decoded_value = percent_decode_str(&encoded_value).decode_utf8_lossy();
            params.insert(key.to_string(), decoded_value.into_owned());
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_params_decodes_values() {
        let params = parse_query_params(Some("revueId=ab%2Dcd&flag&x=a+b"));
        assert_eq!(params.get("revueId").map(String::as_str), Some("ab-cd"));
        assert_eq!(params.get("x").map(String::as_str), Some("a b"));
        assert!(!params.contains_key("flag"));
    }

    #[test]
    fn test_parse_query_params_empty() {
        assert!(parse_query_params(None).is_empty());
        assert!(parse_query_params(Some("")).is_empty());
    }

    #[test]
    fn test_parse_json_body_rejects_garbage() {
        let result: Result<serde_json::Value, _> = parse_json_body(b"{not json");
        assert!(matches!(result, Err(RouterError::BadRequest(_))));
    }
}
