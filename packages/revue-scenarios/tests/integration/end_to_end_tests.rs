//! Full ordered runs against the stub.

use ntest::timeout;

use revue_client::{RevueRequest, Session};
use revue_scenarios::catalog::{
    self, CREATE_REVUE_WITHOUT_REQUIRED_FIELDS, DELETE_LAST_CREATED_REVUE, EDIT_LAST_CREATED_REVUE,
    NO_SUCH_REVUE_PHRASE,
};
use revue_scenarios::{RunContext, Runner};

use super::helpers::{runtime, start_stub, suite_config};

#[timeout(10000)]
#[test]
fn test_full_catalog_passes_in_order() {
    runtime().block_on(async {
        let stub = start_stub().await;

        let report = Runner::with_catalog().run(suite_config(&stub)).await.unwrap();

        assert!(report.is_success(), "{}", report);
        assert_eq!(report.outcomes.len(), 7);
        let orders: Vec<usize> = report.outcomes.iter().map(|o| o.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5, 6, 7]);

        // One login for seven scenarios.
        assert_eq!(stub.store().auth_calls(), 1);
        // The created revue was edited then deleted; the invalid one never stored.
        assert!(stub.store().is_empty());
    });
}

#[timeout(10000)]
#[test]
fn test_list_captures_the_revue_just_created() {
    runtime().block_on(async {
        let stub = start_stub().await;
        let existing = stub
            .store()
            .create("Older".to_string(), String::new(), String::new());

        let session = Session::bootstrap(suite_config(&stub)).await.unwrap();
        let mut context = RunContext::new();
        let scenarios = catalog::catalog();
        let report = Runner::new(scenarios[..2].to_vec())
            .run_with_session(&session, &mut context)
            .await;
        assert!(report.is_success(), "{}", report);

        let captured = context.captured_revue_id().unwrap().to_string();
        assert_ne!(captured, existing.id);
        let created = stub.store().get(&captured).unwrap();
        assert_eq!(created.title, "New Revue");
        assert_eq!(created.description, "This is the new revue");

        // Finish the run; only the captured revue is touched.
        let report = Runner::new(scenarios[2..].to_vec())
            .run_with_session(&session, &mut context)
            .await;
        assert!(report.is_success(), "{}", report);
        let remaining = stub.store().all();
        assert_eq!(remaining, vec![existing]);

        session.release();
    });
}

#[timeout(10000)]
#[test]
fn test_failing_scenarios_still_complete_the_run() {
    runtime().block_on(async {
        let stub = start_stub().await;

        // Without create and list, edit and delete have nothing to act on.
        let report = Runner::new(catalog::catalog()[2..].to_vec())
            .run(suite_config(&stub))
            .await
            .unwrap();

        assert_eq!(report.failed(), 2);
        assert_eq!(report.passed(), 3);
        let names: Vec<&str> = report.outcomes.iter().map(|o| o.name).collect();
        assert_eq!(
            names,
            vec![
                EDIT_LAST_CREATED_REVUE,
                DELETE_LAST_CREATED_REVUE,
                CREATE_REVUE_WITHOUT_REQUIRED_FIELDS,
                catalog::EDIT_NON_EXISTING_REVUE,
                catalog::DELETE_NON_EXISTING_REVUE,
            ]
        );
        let orders: Vec<usize> = report.outcomes.iter().map(|o| o.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5]);
        assert_eq!(stub.store().auth_calls(), 1);
    });
}

#[timeout(10000)]
#[test]
fn test_dependent_scenario_with_synthetic_context() {
    runtime().block_on(async {
        let stub = start_stub().await;
        let seeded = stub
            .store()
            .create("Seeded".to_string(), String::new(), String::new());

        let session = Session::bootstrap(suite_config(&stub)).await.unwrap();
        let edit = catalog::catalog()[2];
        let mut context = RunContext::with_revue_id(seeded.id.clone());

        let report = Runner::new(vec![edit])
            .run_with_session(&session, &mut context)
            .await;
        assert!(report.is_success(), "{}", report);

        let edited = stub.store().get(&seeded.id).unwrap();
        assert_eq!(edited.title, "Edited Revue");
        assert_eq!(edited.description, "This is the last edited revue");

        session.release();
    });
}

#[timeout(10000)]
#[test]
fn test_missing_capture_fails_dependents_but_not_others() {
    runtime().block_on(async {
        let stub = start_stub().await;
        let session = Session::bootstrap(suite_config(&stub)).await.unwrap();

        // Skip create and list so nothing is captured.
        let scenarios = catalog::catalog()[2..].to_vec();
        let mut context = RunContext::new();
        let report = Runner::new(scenarios)
            .run_with_session(&session, &mut context)
            .await;

        assert_eq!(report.failed(), 2);
        for name in [EDIT_LAST_CREATED_REVUE, DELETE_LAST_CREATED_REVUE] {
            let outcome = report.outcome(name).unwrap();
            assert!(outcome.result.as_ref().unwrap_err().is_precondition());
        }
        assert!(report.outcome(CREATE_REVUE_WITHOUT_REQUIRED_FIELDS).unwrap().passed());

        session.release();
    });
}

#[timeout(10000)]
#[test]
fn test_delete_unknown_id_is_client_error() {
    runtime().block_on(async {
        let stub = start_stub().await;
        let session = Session::bootstrap(suite_config(&stub)).await.unwrap();

        let request = RevueRequest::delete(catalog::DELETE_PATH).with_query("revueId", "1234");
        let response = session.send(&request).await.unwrap();
        assert!(response.status.is_client_error());
        assert!(response.contains(NO_SUCH_REVUE_PHRASE));

        session.release();
    });
}
