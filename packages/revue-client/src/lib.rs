//! Authenticated HTTP session for the Revue Crafters API.
//!
//! Provides suite configuration, the one-time login bootstrap, the shared
//! bearer-token client and the wire types of the Revue endpoints.

pub mod config;
pub mod error;
pub mod model;
pub mod session;

pub use config::SuiteConfig;
pub use error::{ClientError, Result};
pub use model::{MessageResponse, RevuePayload, RevueRecord, RevueRequest, RevueResponse};
pub use session::{login, AccessToken, Credentials, Session};
