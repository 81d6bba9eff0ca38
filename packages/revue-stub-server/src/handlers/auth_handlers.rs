//! Login endpoint.

use hyper::{body::Bytes, Request, Response};
use serde::Deserialize;
use serde_json::json;

use crate::router::{AppState, RouterError};

use super::request_utils::{build_response, parse_json_body, read_request_body_with_timeout};

/// Login request body.
#[derive(Debug, Deserialize)]
struct LoginRequest {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
/// `POST /api/User/Authentication`
///
/// # Response
/// - **200 OK**: `{"accessToken": "...", "email": "..."}`
///
/// # Errors
/// - **400 Bad Request**: Body is not JSON
/// - **401 Unauthorized**: Unknown email or wrong password
pub async fn authenticate(
    req: Request<hyper::body::Incoming>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let body =
        read_request_body_with_timeout(req, state.store.config().request_timeout_ms).await?;
    let login: LoginRequest = parse_json_body(&body)?;

    match state.store.authenticate(&login.email, &login.password) {
        Some(token) => {
            tracing::debug!("Issued token to {}", login.email);
            let json = json!({ "accessToken": token, "email": login.email });
            build_response(200, json.to_string().into_bytes())
        }
        None => {
            tracing::debug!("Rejected login for {}", login.email);
            Err(RouterError::Unauthorized)
        }
    }
}
