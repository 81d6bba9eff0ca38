//! Shared fixtures for the integration tests.

use revue_client::SuiteConfig;
use revue_stub_server::{RunningStub, StubConfig, StubServer};

/// Single-threaded runtime; spawned stub tasks run while a test blocks on it.
pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

pub async fn start_stub() -> RunningStub {
    StubServer::new(StubConfig::default()).start().await.unwrap()
}

/// Default credentials pointed at the stub.
pub fn suite_config(stub: &RunningStub) -> SuiteConfig {
    SuiteConfig {
        base_url: stub.base_url(),
        request_timeout_ms: 5000,
        ..Default::default()
    }
}
