//! Integration test suite.
//!
//! Runs the scenario catalog over real HTTP against the in-process stub:
//! 1. Session bootstrap
//! 2. Full ordered run and cross-scenario state
//! 3. Live deployment (ignored by default)

mod bootstrap_tests;
mod end_to_end_tests;
mod helpers;
mod live_service_tests;
