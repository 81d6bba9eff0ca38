//! HTTP endpoint implementations for login and the Revue resource.

mod auth_handlers;
mod request_utils;
mod revue_handlers;

pub use auth_handlers::authenticate;
pub use request_utils::{parse_query_params, read_request_body_with_timeout};
pub use revue_handlers::{all_revues, create_revue, delete_revue, edit_revue};

use serde_json::json;

pub const CREATED_MSG: &str = "Successfully created!";
pub const EDITED_MSG: &str = "Edited successfully";
pub const DELETED_MSG: &str = "The revue is deleted!";
pub const NO_SUCH_REVUE_MSG: &str = "There is no such revue!";

/// `{"Msg": ...}` body used for confirmations and plain errors.
pub fn message_body(message: &str) -> Vec<u8> {
    json!({ "Msg": message }).to_string().into_bytes()
}

/// Validation problem body for a missing required member.
pub fn validation_body(field: &str) -> Vec<u8> {
    json!({
        "title": "One or more validation errors occurred.",
        "status": 400,
        "errors": { field: [format!("The {} field is required.", field)] }
    })
    .to_string()
    .into_bytes()
}
