//! Ordered end-to-end scenarios for the Revue Crafters API.
//!
//! A run authenticates once, then executes the scenario catalog in order,
//! threading a [`RunContext`] through so that the id captured by the list
//! scenario reaches the edit and delete scenarios.

pub mod assertions;
pub mod catalog;
pub mod context;
pub mod error;
pub mod report;
pub mod runner;
pub mod scenario;

pub use catalog::catalog;
pub use context::RunContext;
pub use error::ScenarioError;
pub use report::{RunReport, ScenarioOutcome};
pub use runner::Runner;
pub use scenario::Scenario;
