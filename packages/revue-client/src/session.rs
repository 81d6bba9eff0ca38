//! Session bootstrap and the shared authenticated client.

use std::fmt;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;

use crate::config::SuiteConfig;
use crate::error::{ClientError, Result};
use crate::model::{RevueRequest, RevueResponse};

/// Login endpoint.
pub const AUTHENTICATION_PATH: &str = "/api/User/Authentication";

/// Name of the token member in the login response.
const TOKEN_FIELD: &str = "accessToken";

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl From<&SuiteConfig> for Credentials {
    fn from(config: &SuiteConfig) -> Self {
        Self {
            email: config.email.clone(),
            password: config.password.clone(),
        }
    }
}

/// Bearer token returned by the login endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Performs the single authentication call and extracts the token.
///
/// # Errors
/// - [`ClientError::Authentication`] when the status is not a success
/// - [`ClientError::Decode`] when the body is not JSON
/// - [`ClientError::MissingToken`] when `accessToken` is absent or not a string
pub async fn login(http: &reqwest::Client, config: &SuiteConfig) -> Result<AccessToken> {
    let response = http
        .post(config.endpoint(AUTHENTICATION_PATH))
        .json(&Credentials::from(config))
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ClientError::Authentication {
            status: status.as_u16(),
            body,
        });
    }

    let json: serde_json::Value =
        serde_json::from_str(&body).map_err(|e| ClientError::Decode {
            path: AUTHENTICATION_PATH.to_string(),
            message: e.to_string(),
        })?;

    json.get(TOKEN_FIELD)
        .and_then(serde_json::Value::as_str)
        .map(|token| AccessToken(token.to_string()))
        .ok_or(ClientError::MissingToken { field: TOKEN_FIELD })
}

/// Authenticated client shared by every scenario of a run.
pub struct Session {
    config: SuiteConfig,
    http: reqwest::Client,
}

impl Session {
    /// Logs in once and builds the client that attaches the bearer token to
    /// every later request.
    pub async fn bootstrap(config: SuiteConfig) -> Result<Self> {
        let timeout = Duration::from_millis(config.request_timeout_ms);

        let login_client = reqwest::Client::builder().timeout(timeout).build()?;
        let token = login(&login_client, &config).await?;
        tracing::info!("Authenticated against {} as {}", config.base_url, config.email);

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token.as_str()))
            .map_err(|e| ClientError::InvalidHeader(e.to_string()))?;
        bearer.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Sends one request and captures its status and text body.
    ///
    /// Non-success statuses are returned as responses, not errors; only
    /// transport failures are errors.
    pub async fn send(&self, request: &RevueRequest) -> Result<RevueResponse> {
        tracing::debug!("{} {} query={:?}", request.method, request.path, request.query);

        let mut builder = self
            .http
            .request(request.method.clone(), self.config.endpoint(&request.path));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("{} {} -> {}", request.method, request.path, status);

        Ok(RevueResponse {
            path: request.path.clone(),
            status,
            body,
        })
    }

    /// Releases the shared client. Consumes the session so it happens once.
    pub fn release(self) {
        let Self { config, http } = self;
        drop(http);
        tracing::info!("Released HTTP client for {}", config.base_url);
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_debug_is_redacted() {
        let token = AccessToken("secret-jwt".to_string());
        assert_eq!(format!("{:?}", token), "AccessToken(<redacted>)");
        assert_eq!(token.as_str(), "secret-jwt");
    }

    #[test]
    fn test_credentials_serialize_lowercase() {
        let credentials = Credentials::from(&SuiteConfig::default());
        let value = serde_json::to_value(&credentials).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"email": "vasko85@vasko.com", "password": "vasko85"})
        );
    }
}
