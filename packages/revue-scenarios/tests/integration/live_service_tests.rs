//! Runs the catalog against the deployed service.

use revue_client::SuiteConfig;
use revue_scenarios::Runner;

#[test]
#[ignore = "requires network access to the deployed Revue service"]
fn test_catalog_against_deployed_service() {
    let report = super::helpers::runtime()
        .block_on(Runner::with_catalog().run(SuiteConfig::default()))
        .unwrap();
    assert!(report.is_success(), "{}", report);
}
