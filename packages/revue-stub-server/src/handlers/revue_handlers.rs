//! Revue create, list, edit, and delete handlers.

use hyper::{body::Bytes, Request, Response};
use serde::Deserialize;
use serde_json::json;

use crate::router::{AppState, RouterError};

use super::request_utils::{
    build_response, parse_json_body, parse_query_params, read_request_body_with_timeout,
};
use super::{message_body, CREATED_MSG, DELETED_MSG, EDITED_MSG, NO_SUCH_REVUE_MSG};

const REVUE_ID_PARAM: &str = "revueId";

/// Body of create and edit.
#[derive(Debug, Deserialize)]
struct RevueBody {
    #[serde(rename = "Title")]
    title: Option<String>,
    #[serde(rename = "Url")]
    url: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
}

/// Validated members of a [`RevueBody`].
struct RevueFields {
    title: String,
    url: String,
    description: String,
}

impl RevueBody {
    fn validate(self) -> Result<RevueFields, RouterError> {
        let title = self
            .title
            .filter(|title| !title.trim().is_empty())
            .ok_or(RouterError::Validation { field: "Title" })?;
        Ok(RevueFields {
            title,
            url: self.url.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        })
    }
}

async fn read_revue_body(
    req: Request<hyper::body::Incoming>,
    state: &AppState,
) -> Result<RevueFields, RouterError> {
    let body =
        read_request_body_with_timeout(req, state.store.config().request_timeout_ms).await?;
    parse_json_body::<RevueBody>(&body)?.validate()
}

fn revue_id(req: &Request<hyper::body::Incoming>) -> Option<String> {
    parse_query_params(req.uri().query()).remove(REVUE_ID_PARAM)
}

/// Creates a revue.
///
/// # Endpoint
/// `POST /api/Revue/Create`
///
/// # Request Body
/// ```json
/// { "Title": "New Revue", "Url": "", "Description": "This is the new revue" }
/// ```
///
/// # Response
/// - **200 OK**: `{"Msg": "Successfully created!", "Revue": {...}}`
///
/// # Errors
/// - **400 Bad Request**: Body is not JSON or `Title` is missing
pub async fn create_revue(
    req: Request<hyper::body::Incoming>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let fields = read_revue_body(req, &state).await?;
    let revue = state
        .store
        .create(fields.title, fields.url, fields.description);
    tracing::debug!("Created revue {}", revue.id);

    let json = json!({ "Msg": CREATED_MSG, "Revue": revue });
    build_response(200, json.to_string().into_bytes())
}

/// Lists every revue, oldest first.
///
/// # Endpoint
/// `GET /api/Revue/All`
pub async fn all_revues(
    _req: Request<hyper::body::Incoming>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let json = serde_json::to_vec(&state.store.all())
        .map_err(|e| RouterError::InternalError(format!("Failed to serialize response: {}", e)))?;
    build_response(200, json)
}

/// Replaces the members of an existing revue.
///
/// # Endpoint
/// `PUT /api/Revue/Edit?revueId={id}`
///
/// # Response
/// - **200 OK**: `{"Msg": "Edited successfully"}`
///
/// # Errors
/// - **400 Bad Request**: `Title` missing, or no revue with that id
pub async fn edit_revue(
    req: Request<hyper::body::Incoming>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let id = revue_id(&req);
    let fields = read_revue_body(req, &state).await?;

    let edited = id.is_some_and(|id| {
        state
            .store
            .edit(&id, fields.title, fields.url, fields.description)
    });
    if !edited {
        return Err(RouterError::BadRequest(NO_SUCH_REVUE_MSG.to_string()));
    }
    build_response(200, message_body(EDITED_MSG))
}

/// Deletes a revue.
///
/// # Endpoint
/// `DELETE /api/Revue/Delete?revueId={id}`
///
/// # Response
/// - **200 OK**: `{"Msg": "The revue is deleted!"}`
///
/// # Errors
/// - **400 Bad Request**: No revue with that id
pub async fn delete_revue(
    req: Request<hyper::body::Incoming>,
    state: AppState,
) -> Result<Response<Bytes>, RouterError> {
    let deleted = revue_id(&req).is_some_and(|id| state.store.delete(&id));
    if !deleted {
        return Err(RouterError::BadRequest(NO_SUCH_REVUE_MSG.to_string()));
    }
    build_response(200, message_body(DELETED_MSG))
}
