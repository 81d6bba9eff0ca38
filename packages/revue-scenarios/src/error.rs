//! Scenario error types.

use revue_client::ClientError;
use thiserror::Error;

/// Reasons a single scenario fails.
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// A value an earlier scenario should have captured is absent
    #[error("Scenario '{scenario}' requires '{field}', which no earlier scenario captured")]
    Precondition {
        scenario: &'static str,
        field: &'static str,
    },

    /// Response did not match the expectation
    #[error("Scenario '{scenario}' assertion failed: {message}")]
    Assertion {
        scenario: &'static str,
        message: String,
    },

    /// Request could not be built, sent, or decoded
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl ScenarioError {
    pub fn is_precondition(&self) -> bool {
        matches!(self, ScenarioError::Precondition { .. })
    }
}
