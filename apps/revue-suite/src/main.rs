//! Runs the Revue end-to-end scenarios against a deployment.
//!
//! Authenticates once, executes the seven scenarios in order, prints one line
//! per scenario and exits non-zero if login or any scenario failed.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use revue_client::config::{DEFAULT_BASE_URL, DEFAULT_EMAIL, DEFAULT_PASSWORD};
use revue_client::SuiteConfig;
use revue_scenarios::Runner;
use revue_stub_server::{StubConfig, StubServer};

/// Command-line arguments for the suite.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Login email
    #[arg(long, default_value = DEFAULT_EMAIL)]
    email: String,

    /// Login password
    #[arg(long, default_value = DEFAULT_PASSWORD)]
    password: String,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = 30000)]
    request_timeout_ms: u64,

    /// Run against an in-process stub of the service instead of --base-url
    #[arg(long)]
    stub: bool,
}

impl Args {
    fn config(&self) -> SuiteConfig {
        SuiteConfig {
            base_url: self.base_url.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            request_timeout_ms: self.request_timeout_ms,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let mut config = args.config();

    // Kept alive until the run finishes.
    let stub = if args.stub {
        let stub = StubServer::new(StubConfig {
            email: config.email.clone(),
            password: config.password.clone(),
            ..Default::default()
        })
        .start()
        .await
        .context("Failed to start the stub service")?;
        config.base_url = stub.base_url();
        Some(stub)
    } else {
        None
    };

    println!("Running Revue scenarios against {}", config.base_url);

    let runner = Runner::with_catalog();
    let report = runner
        .run(config)
        .await
        .context("Authentication failed; no scenario was run")?;

    println!("{}", report);

    if let Some(stub) = stub {
        stub.shutdown();
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
