//! The seven Revue scenarios, in execution order.
//!
//! The list scenario captures the id of the last record returned and the
//! edit/delete scenarios act on it. This assumes the service appends new
//! records and that nothing else writes between create and list. A concurrent
//! writer can make edit and delete hit someone else's record.

use reqwest::StatusCode;
use revue_client::{MessageResponse, RevuePayload, RevueRecord, RevueRequest, RevueResponse};

use crate::assertions::{expect_contains, expect_eq, expect_status};
use crate::context::RunContext;
use crate::error::ScenarioError;
use crate::scenario::Scenario;

pub const CREATE_PATH: &str = "/api/Revue/Create";
pub const ALL_PATH: &str = "/api/Revue/All";
pub const EDIT_PATH: &str = "/api/Revue/Edit";
pub const DELETE_PATH: &str = "/api/Revue/Delete";

pub const REVUE_ID_PARAM: &str = "revueId";

pub const CREATED_PHRASE: &str = "Successfully created!";
pub const EDITED_MSG: &str = "Edited successfully";
pub const DELETED_MSG: &str = "The revue is deleted!";
pub const NO_SUCH_REVUE_PHRASE: &str = "There is no such revue";

/// Ids the service has never issued.
pub const FAKE_EDIT_ID: &str = "1234";
pub const FAKE_DELETE_ID: &str = "12345";

pub const CREATE_REVUE: &str = "create_revue";
pub const GET_ALL_REVUES: &str = "get_all_revues";
pub const EDIT_LAST_CREATED_REVUE: &str = "edit_last_created_revue";
pub const DELETE_LAST_CREATED_REVUE: &str = "delete_last_created_revue";
pub const CREATE_REVUE_WITHOUT_REQUIRED_FIELDS: &str = "create_revue_without_required_fields";
pub const EDIT_NON_EXISTING_REVUE: &str = "edit_non_existing_revue";
pub const DELETE_NON_EXISTING_REVUE: &str = "delete_non_existing_revue";

/// All scenarios in the order they must run.
pub fn catalog() -> Vec<Scenario> {
    vec![
        Scenario::new(CREATE_REVUE, build_create, verify_create),
        Scenario::new(GET_ALL_REVUES, build_get_all, verify_get_all),
        Scenario::new(EDIT_LAST_CREATED_REVUE, build_edit_last, verify_edit_last),
        Scenario::new(DELETE_LAST_CREATED_REVUE, build_delete_last, verify_delete_last),
        Scenario::new(
            CREATE_REVUE_WITHOUT_REQUIRED_FIELDS,
            build_create_invalid,
            verify_create_invalid,
        ),
        Scenario::new(EDIT_NON_EXISTING_REVUE, build_edit_missing, verify_edit_missing),
        Scenario::new(DELETE_NON_EXISTING_REVUE, build_delete_missing, verify_delete_missing),
    ]
}

fn new_revue() -> RevuePayload {
    RevuePayload::new("New Revue", "", "This is the new revue")
}

fn edited_revue() -> RevuePayload {
    RevuePayload::new("Edited Revue", "", "This is the last edited revue")
}

fn edit_request(revue_id: &str) -> Result<RevueRequest, ScenarioError> {
    Ok(RevueRequest::put(EDIT_PATH)
        .with_query(REVUE_ID_PARAM, revue_id)
        .with_json(&edited_revue())?)
}

fn delete_request(revue_id: &str) -> RevueRequest {
    RevueRequest::delete(DELETE_PATH).with_query(REVUE_ID_PARAM, revue_id)
}

fn build_create(_context: &RunContext) -> Result<RevueRequest, ScenarioError> {
    Ok(RevueRequest::post(CREATE_PATH).with_json(&new_revue())?)
}

fn verify_create(response: &RevueResponse, _context: &mut RunContext) -> Result<(), ScenarioError> {
    expect_status(CREATE_REVUE, response, StatusCode::OK)?;
    expect_contains(CREATE_REVUE, response, CREATED_PHRASE)
}

fn build_get_all(_context: &RunContext) -> Result<RevueRequest, ScenarioError> {
    Ok(RevueRequest::get(ALL_PATH))
}

fn verify_get_all(response: &RevueResponse, context: &mut RunContext) -> Result<(), ScenarioError> {
    expect_status(GET_ALL_REVUES, response, StatusCode::OK)?;

    let records: Vec<RevueRecord> = response.json()?;
    let last = records.last().ok_or_else(|| ScenarioError::Assertion {
        scenario: GET_ALL_REVUES,
        message: "expected a non-empty list of revues".to_string(),
    })?;
    if last.id.is_empty() {
        return Err(ScenarioError::Assertion {
            scenario: GET_ALL_REVUES,
            message: "last revue in the list has an empty Id".to_string(),
        });
    }

    context.capture_revue_id(last.id.clone());
    Ok(())
}

fn build_edit_last(context: &RunContext) -> Result<RevueRequest, ScenarioError> {
    edit_request(context.require_revue_id(EDIT_LAST_CREATED_REVUE)?)
}

fn verify_edit_last(response: &RevueResponse, _context: &mut RunContext) -> Result<(), ScenarioError> {
    expect_status(EDIT_LAST_CREATED_REVUE, response, StatusCode::OK)?;
    let message: MessageResponse = response.json()?;
    expect_eq(
        EDIT_LAST_CREATED_REVUE,
        "Msg",
        &message.msg.as_deref(),
        &Some(EDITED_MSG),
    )
}

fn build_delete_last(context: &RunContext) -> Result<RevueRequest, ScenarioError> {
    Ok(delete_request(context.require_revue_id(DELETE_LAST_CREATED_REVUE)?))
}

fn verify_delete_last(response: &RevueResponse, _context: &mut RunContext) -> Result<(), ScenarioError> {
    expect_status(DELETE_LAST_CREATED_REVUE, response, StatusCode::OK)?;
    let message: MessageResponse = response.json()?;
    expect_eq(
        DELETE_LAST_CREATED_REVUE,
        "Msg",
        &message.msg.as_deref(),
        &Some(DELETED_MSG),
    )
}

fn build_create_invalid(_context: &RunContext) -> Result<RevueRequest, ScenarioError> {
    let payload = RevuePayload {
        title: None,
        url: String::new(),
        description: None,
    };
    Ok(RevueRequest::post(CREATE_PATH).with_json(&payload)?)
}

fn verify_create_invalid(response: &RevueResponse, _context: &mut RunContext) -> Result<(), ScenarioError> {
    expect_status(CREATE_REVUE_WITHOUT_REQUIRED_FIELDS, response, StatusCode::BAD_REQUEST)
}

fn build_edit_missing(_context: &RunContext) -> Result<RevueRequest, ScenarioError> {
    edit_request(FAKE_EDIT_ID)
}

fn build_delete_missing(_context: &RunContext) -> Result<RevueRequest, ScenarioError> {
    Ok(delete_request(FAKE_DELETE_ID))
}

fn verify_edit_missing(response: &RevueResponse, _context: &mut RunContext) -> Result<(), ScenarioError> {
    expect_no_such_revue(EDIT_NON_EXISTING_REVUE, response)
}

fn verify_delete_missing(response: &RevueResponse, _context: &mut RunContext) -> Result<(), ScenarioError> {
    expect_no_such_revue(DELETE_NON_EXISTING_REVUE, response)
}

fn expect_no_such_revue(scenario: &'static str, response: &RevueResponse) -> Result<(), ScenarioError> {
    expect_status(scenario, response, StatusCode::BAD_REQUEST)?;
    expect_contains(scenario, response, NO_SUCH_REVUE_PHRASE)
}
