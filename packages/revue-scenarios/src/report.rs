//! Per-scenario outcomes of a run.

use std::fmt;
use std::time::Duration;

use crate::error::ScenarioError;

/// Result of one scenario.
#[derive(Debug)]
pub struct ScenarioOutcome {
    /// 1-based position in the run
    pub order: usize,
    pub name: &'static str,
    pub result: Result<(), ScenarioError>,
    pub elapsed: Duration,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of every scenario, in execution order.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl RunReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn outcome(&self, name: &str) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            let status = if outcome.passed() { "PASS" } else { "FAIL" };
            write!(
                f,
                "[{}] {}. {} ({} ms)",
                status,
                outcome.order,
                outcome.name,
                outcome.elapsed.as_millis()
            )?;
            if let Err(err) = &outcome.result {
                write!(f, ": {}", err)?;
            }
            writeln!(f)?;
        }
        write!(f, "{} passed, {} failed", self.passed(), self.failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(order: usize, name: &'static str, result: Result<(), ScenarioError>) -> ScenarioOutcome {
        ScenarioOutcome {
            order,
            name,
            result,
            elapsed: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_counts_and_summary() {
        let report = RunReport {
            outcomes: vec![
                outcome(1, "create_revue", Ok(())),
                outcome(
                    2,
                    "get_all_revues",
                    Err(ScenarioError::Assertion {
                        scenario: "get_all_revues",
                        message: "expected a non-empty list of revues".to_string(),
                    }),
                ),
            ],
        };

        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.is_success());
        assert!(report.outcome("create_revue").unwrap().passed());

        let text = report.to_string();
        assert!(text.contains("[PASS] 1. create_revue (5 ms)"));
        assert!(text.contains("[FAIL] 2. get_all_revues (5 ms): Scenario 'get_all_revues'"));
        assert!(text.ends_with("1 passed, 1 failed"));
    }

    #[test]
    fn test_empty_report_is_success() {
        assert!(RunReport::default().is_success());
    }
}
