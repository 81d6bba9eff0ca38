//! In-process emulation of the Revue Crafters REST service.
//!
//! Serves the login endpoint and the Revue create/list/edit/delete endpoints
//! over HTTP on a loopback port, with the same status codes and confirmation
//! phrases as the deployed service.

pub mod handlers;
pub mod router;
pub mod server;
pub mod store;

pub use server::{RunningStub, StubServer};
pub use store::{RevueStore, StoredRevue, StubConfig};
