//! Matchit routing configuration.

use std::sync::Arc;

use hyper::{body::Bytes, header::AUTHORIZATION, Method, Request, Response};
use matchit::Router as MatchitRouter;

use crate::handlers;
use crate::store::RevueStore;

pub const AUTHENTICATION_ROUTE: &str = "/api/User/Authentication";
pub const CREATE_ROUTE: &str = "/api/Revue/Create";
pub const ALL_ROUTE: &str = "/api/Revue/All";
pub const EDIT_ROUTE: &str = "/api/Revue/Edit";
pub const DELETE_ROUTE: &str = "/api/Revue/Delete";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RevueStore>,
}

/// HTTP request router.
pub struct Router {
    inner: MatchitRouter<RouteHandler>,
    state: AppState,
}

impl Router {
    /// Creates a router serving every stub endpoint.
    pub fn new(store: Arc<RevueStore>) -> Result<Self, RouterError> {
        let mut router = MatchitRouter::new();

        let routes = [
            (AUTHENTICATION_ROUTE, RouteHandler::Authentication),
            (CREATE_ROUTE, RouteHandler::Create),
            (ALL_ROUTE, RouteHandler::All),
            (EDIT_ROUTE, RouteHandler::Edit),
            (DELETE_ROUTE, RouteHandler::Delete),
        ];
        for (path, handler) in routes {
            router.insert(path, handler).map_err(|e| {
                RouterError::InternalError(format!("Failed to insert {} route: {}", path, e))
            })?;
        }

        Ok(Self {
            inner: router,
            state: AppState { store },
        })
    }

    /// Routes an incoming request to the appropriate handler.
    pub async fn route(
        &self,
        req: Request<hyper::body::Incoming>,
    ) -> Result<Response<Bytes>, RouterError> {
        let path = req.uri().path().to_string();

        match self.inner.at(&path) {
            Ok(matched) => {
                let handler = *matched.value;
                handler.handle(req, self.state.clone()).await
            }
            Err(_) => Err(RouterError::NotFound(format!("No route found for {}", path))),
        }
    }
}

/// Route handler function.
#[derive(Debug, Clone, Copy)]
enum RouteHandler {
    Authentication,
    Create,
    All,
    Edit,
    Delete,
}

impl RouteHandler {
    fn method(self) -> Method {
        match self {
            RouteHandler::Authentication | RouteHandler::Create => Method::POST,
            RouteHandler::All => Method::GET,
            RouteHandler::Edit => Method::PUT,
            RouteHandler::Delete => Method::DELETE,
        }
    }

    async fn handle(
        self,
        req: Request<hyper::body::Incoming>,
        state: AppState,
    ) -> Result<Response<Bytes>, RouterError> {
        if req.method() != self.method() {
            return Err(RouterError::MethodNotAllowed);
        }

        // Everything except login needs the issued bearer token.
        if !matches!(self, RouteHandler::Authentication) {
            let header = req
                .headers()
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok());
            if !state.store.is_authorized(header) {
                return Err(RouterError::Unauthorized);
            }
        }

        match self {
            RouteHandler::Authentication => handlers::authenticate(req, state).await,
            RouteHandler::Create => handlers::create_revue(req, state).await,
            RouteHandler::All => handlers::all_revues(req, state).await,
            RouteHandler::Edit => handlers::edit_revue(req, state).await,
            RouteHandler::Delete => handlers::delete_revue(req, state).await,
        }
    }
}

/// Router error type.
#[derive(Debug)]
pub enum RouterError {
    MethodNotAllowed,
    Unauthorized,
    InternalError(String),
    Timeout,
    BadRequest(String),
    /// Required member missing from the request body
    Validation { field: &'static str },
    NotFound(String),
}

impl std::fmt::Display for RouterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouterError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            RouterError::Unauthorized => write!(f, "Unauthorized"),
            RouterError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
            RouterError::Timeout => write!(f, "Request Timeout"),
            RouterError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            RouterError::Validation { field } => write!(f, "The {} field is required.", field),
            RouterError::NotFound(msg) => write!(f, "Not Found: {}", msg),
        }
    }
}

impl std::error::Error for RouterError {}

impl From<RouterError> for Response<Bytes> {
    fn from(err: RouterError) -> Self {
        let (status, body) = match &err {
            RouterError::MethodNotAllowed => (405, handlers::message_body("Method Not Allowed")),
            RouterError::Unauthorized => (401, handlers::message_body("Unauthorized")),
            RouterError::InternalError(msg) => (500, handlers::message_body(msg)),
            RouterError::Timeout => (408, handlers::message_body("Request Timeout")),
            RouterError::BadRequest(msg) => (400, handlers::message_body(msg)),
            RouterError::Validation { field } => (400, handlers::validation_body(field)),
            RouterError::NotFound(msg) => (404, handlers::message_body(msg)),
        };

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Bytes::from(body))
            .unwrap_or_else(|_| Response::new(Bytes::from("Internal Server Error")))
    }
}
