//! HTTP front end: JSON API plus the embedded browser UI.

pub mod error;
pub mod handlers;
pub mod markdown;
pub mod routes;
pub mod server;
pub mod state;

pub use error::WebError;
pub use server::{build_router, run_server, ServerConfig};
pub use state::WebAppState;
