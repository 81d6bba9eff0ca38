//! Session bootstrap tests.

use ntest::timeout;

use revue_client::{ClientError, RevueRequest, Session, SuiteConfig};
use revue_scenarios::Runner;

use super::helpers::{runtime, start_stub, suite_config};

#[timeout(10000)]
#[test]
fn test_bootstrap_attaches_bearer_token() {
    runtime().block_on(async {
        let stub = start_stub().await;
        let session = Session::bootstrap(suite_config(&stub)).await.unwrap();

        let response = session.send(&RevueRequest::get("/api/Revue/All")).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "[]");
        assert_eq!(stub.store().auth_calls(), 1);

        session.release();
    });
}

#[timeout(10000)]
#[test]
fn test_wrong_password_aborts_before_any_scenario() {
    runtime().block_on(async {
        let stub = start_stub().await;
        let config = SuiteConfig {
            password: "wrong".to_string(),
            ..suite_config(&stub)
        };

        let err = Runner::with_catalog().run(config).await.unwrap_err();
        match err {
            ClientError::Authentication { status, .. } => assert_eq!(status, 401),
            other => panic!("expected authentication error, got {:?}", other),
        }
        assert_eq!(stub.store().auth_calls(), 1);
        assert!(stub.store().is_empty());
    });
}

#[timeout(10000)]
#[test]
fn test_unreachable_service_is_transport_error() {
    // Bind then drop a listener so the port is known to be closed.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let config = SuiteConfig {
        base_url: format!("http://{}", addr),
        request_timeout_ms: 2000,
        ..Default::default()
    };

    let err = runtime().block_on(Session::bootstrap(config)).unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)), "got {:?}", err);
}
