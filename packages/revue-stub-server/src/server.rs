//! Hyper server setup and request handling.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming as IncomingBody};
use hyper::{Request, Response, Result as HyperResult};
use hyper_util::rt::TokioExecutor;
use hyper_util::rt::TokioIo;
use hyper_util::server::conn::auto::Builder as ConnectionBuilder;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::router::Router;
use crate::store::{RevueStore, StubConfig};

/// Pause before retrying after a failed accept.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// HTTP server emulating the Revue service.
pub struct StubServer {
    addr: SocketAddr,
    config: StubConfig,
}

impl StubServer {
    /// Stub bound to an ephemeral loopback port.
    pub fn new(config: StubConfig) -> Self {
        Self::with_addr(SocketAddr::from(([127, 0, 0, 1], 0)), config)
    }

    pub fn with_addr(addr: SocketAddr, config: StubConfig) -> Self {
        Self { addr, config }
    }

    /// Binds the listener and starts serving in a background task.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn start(self) -> Result<RunningStub, std::io::Error> {
        let listener = TcpListener::bind(self.addr).await?;
        let addr = listener.local_addr()?;
        let store = Arc::new(RevueStore::new(self.config));
        let router = Router::new(Arc::clone(&store))
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
        tracing::info!("Revue stub listening on http://{}", addr);

        let handle = tokio::spawn(accept_loop(listener, Arc::new(router)));
        Ok(RunningStub {
            addr,
            store,
            handle,
        })
    }
}

/// A started stub. Stops serving when shut down or dropped.
pub struct RunningStub {
    addr: SocketAddr,
    store: Arc<RevueStore>,
    handle: JoinHandle<()>,
}

impl RunningStub {
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Base URL to configure clients with, e.g. `http://127.0.0.1:40123`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn store(&self) -> &Arc<RevueStore> {
        &self.store
    }

    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for RunningStub {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn accept_loop(listener: TcpListener, router: Arc<Router>) {
    loop {
        let (stream, _) = match listener.accept().await {
            Ok(conn) => conn,
            Err(err) => {
                // Persistent errors such as EMFILE would otherwise spin.
                tracing::error!("Failed to accept connection: {}", err);
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        let io = TokioIo::new(stream);
        let router = Arc::clone(&router);

        tokio::task::spawn(async move {
            let builder = ConnectionBuilder::new(TokioExecutor::new());
            if let Err(err) = builder
                .serve_connection(
                    io,
                    hyper::service::service_fn(move |req| handle_request(req, router.clone())),
                )
                .await
            {
                tracing::warn!("Error serving connection: {}", err);
            }
        });
    }
}

/// Handles an incoming HTTP request.
async fn handle_request(
    req: Request<IncomingBody>,
    router: Arc<Router>,
) -> HyperResult<Response<Full<Bytes>>> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = match router.route(req).await {
        Ok(response) => response,
        Err(err) => {
            tracing::debug!("{} {} rejected: {}", method, path, err);
            Response::from(err)
        }
    };
    tracing::debug!("{} {} -> {}", method, path, response.status());
    Ok(response.map(Full::new))
}
