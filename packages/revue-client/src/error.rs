//! Client error types.

use thiserror::Error;

/// Errors raised while talking to the Revue service.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request could not be sent or its body could not be read
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Login endpoint answered with a non-success status
    #[error("Authentication failed with status {status}: {body}")]
    Authentication { status: u16, body: String },

    /// Login response did not carry a string `accessToken`
    #[error("Login response has no string '{field}' field")]
    MissingToken { field: &'static str },

    /// Response body is not the expected JSON shape
    #[error("Failed to decode response from {path}: {message}")]
    Decode { path: String, message: String },

    /// Token cannot be used as a header value
    #[error("Invalid bearer token: {0}")]
    InvalidHeader(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
