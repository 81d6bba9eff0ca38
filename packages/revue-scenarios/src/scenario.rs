//! Scenario descriptor.

use std::fmt;

use revue_client::{RevueRequest, RevueResponse, Session};

use crate::context::RunContext;
use crate::error::ScenarioError;

/// Builds the request of a scenario from the captured state.
pub type BuildFn = fn(&RunContext) -> Result<RevueRequest, ScenarioError>;

/// Checks the response and records anything later scenarios depend on.
pub type VerifyFn = fn(&RevueResponse, &mut RunContext) -> Result<(), ScenarioError>;

/// One independently reported test case: a request and its assertions.
#[derive(Clone, Copy)]
pub struct Scenario {
    name: &'static str,
    build: BuildFn,
    verify: VerifyFn,
}

impl Scenario {
    pub const fn new(name: &'static str, build: BuildFn, verify: VerifyFn) -> Self {
        Self {
            name,
            build,
            verify,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Builds the request without sending it.
    pub fn request(&self, context: &RunContext) -> Result<RevueRequest, ScenarioError> {
        (self.build)(context)
    }

    /// Runs the assertions against an already received response.
    pub fn verify(
        &self,
        response: &RevueResponse,
        context: &mut RunContext,
    ) -> Result<(), ScenarioError> {
        (self.verify)(response, context)
    }

    /// Builds, sends, and verifies.
    pub async fn execute(
        &self,
        session: &Session,
        context: &mut RunContext,
    ) -> Result<(), ScenarioError> {
        let request = self.request(context)?;
        let response = session.send(&request).await?;
        self.verify(&response, context)
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario").field("name", &self.name).finish()
    }
}
