//! Expectation checks shared by the scenarios.

use std::fmt::Debug;

use reqwest::StatusCode;
use revue_client::RevueResponse;

use crate::error::ScenarioError;

/// Longest body excerpt quoted in a failure message.
const BODY_EXCERPT_LEN: usize = 200;

fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

pub fn expect_status(
    scenario: &'static str,
    response: &RevueResponse,
    expected: StatusCode,
) -> Result<(), ScenarioError> {
    if response.status == expected {
        return Ok(());
    }
    Err(ScenarioError::Assertion {
        scenario,
        message: format!(
            "expected status {} from {}, got {} (body: {})",
            expected,
            response.path,
            response.status,
            excerpt(&response.body)
        ),
    })
}

pub fn expect_contains(
    scenario: &'static str,
    response: &RevueResponse,
    phrase: &str,
) -> Result<(), ScenarioError> {
    if response.contains(phrase) {
        return Ok(());
    }
    Err(ScenarioError::Assertion {
        scenario,
        message: format!(
            "expected body of {} to contain '{}', got: {}",
            response.path,
            phrase,
            excerpt(&response.body)
        ),
    })
}

pub fn expect_eq<T: PartialEq + Debug + ?Sized>(
    scenario: &'static str,
    what: &str,
    actual: &T,
    expected: &T,
) -> Result<(), ScenarioError> {
    if actual == expected {
        return Ok(());
    }
    Err(ScenarioError::Assertion {
        scenario,
        message: format!("expected {} to be {:?}, got {:?}", what, expected, actual),
    })
}
