//! State carried from one scenario to the next.

use crate::error::ScenarioError;

/// Name of the captured id, as reported in precondition errors.
pub const REVUE_ID_FIELD: &str = "revue_id";

/// Values captured by earlier scenarios of a run.
///
/// Created empty at the start of a run and handed to every scenario in turn.
/// Fields are set by the scenario that produces them and never reset.
#[derive(Debug, Default, Clone)]
pub struct RunContext {
    captured_revue_id: Option<String>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that already holds a revue id, for running dependent scenarios
    /// in isolation.
    pub fn with_revue_id(id: impl Into<String>) -> Self {
        Self {
            captured_revue_id: Some(id.into()),
        }
    }

    pub fn captured_revue_id(&self) -> Option<&str> {
        self.captured_revue_id.as_deref()
    }

    pub fn capture_revue_id(&mut self, id: String) {
        tracing::debug!("Captured revue id {}", id);
        self.captured_revue_id = Some(id);
    }

    /// Returns the captured id or a precondition error naming `scenario`.
    pub fn require_revue_id(&self, scenario: &'static str) -> Result<&str, ScenarioError> {
        self.captured_revue_id().ok_or(ScenarioError::Precondition {
            scenario,
            field: REVUE_ID_FIELD,
        })
    }
}
