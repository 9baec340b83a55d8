//! Front desk HTTP API.
//!
//! Exposes the `FrontDesk` operations and snapshots as JSON endpoints for a
//! browser front end. Routes are nested under `/api/`. Handlers only lock
//! `CoreState`, call the desk and shape the response.
//!
//! The router is composable: `desk_api_router()` returns a `Router` that can
//! be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::desk_api_router;
pub use server::{DeskServer, DeskServerSession};
pub use types::ApiContext;
