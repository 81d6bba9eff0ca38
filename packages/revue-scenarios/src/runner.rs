//! Ordered scenario runner.

use std::time::Instant;

use revue_client::{ClientError, Session, SuiteConfig};

use crate::catalog::catalog;
use crate::context::RunContext;
use crate::report::{RunReport, ScenarioOutcome};
use crate::scenario::Scenario;

/// Runs scenarios strictly in declaration order against one session.
#[derive(Debug, Clone)]
pub struct Runner {
    scenarios: Vec<Scenario>,
}

impl Runner {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// Runner over the full Revue catalog.
    pub fn with_catalog() -> Self {
        Self::new(catalog())
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Authenticates once, runs every scenario, then releases the client.
    ///
    /// # Errors
    /// Returns the bootstrap error when login fails; no scenario runs then.
    /// Scenario failures are reported in the [`RunReport`], never as `Err`.
    pub async fn run(&self, config: SuiteConfig) -> Result<RunReport, ClientError> {
        let session = Session::bootstrap(config).await.map_err(|e| {
            tracing::error!("Session bootstrap failed: {}", e);
            e
        })?;

        let mut context = RunContext::new();
        let report = self.run_with_session(&session, &mut context).await;
        session.release();

        Ok(report)
    }

    /// Runs every scenario against an existing session and context.
    ///
    /// A failing scenario does not stop the run. Scenarios that depend on a
    /// value the failed one should have captured fail with a precondition
    /// error.
    pub async fn run_with_session(&self, session: &Session, context: &mut RunContext) -> RunReport {
        let mut report = RunReport::default();

        for (index, scenario) in self.scenarios.iter().enumerate() {
            let order = index + 1;
            let started = Instant::now();
            let result = scenario.execute(session, context).await;
            let elapsed = started.elapsed();

            match &result {
                Ok(()) => tracing::info!(
                    "Scenario {} {} passed in {} ms",
                    order,
                    scenario.name(),
                    elapsed.as_millis()
                ),
                Err(e) => tracing::warn!("Scenario {} {} failed: {}", order, scenario.name(), e),
            }

            report.outcomes.push(ScenarioOutcome {
                order,
                name: scenario.name(),
                result,
                elapsed,
            });
        }

        tracing::info!(
            "Run finished: {} passed, {} failed",
            report.passed(),
            report.failed()
        );
        report
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::with_catalog()
    }
}
