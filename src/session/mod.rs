//! Per-browser session state
//!
//! Each session owns its diagram buffer, chat agent and theme selection.
//! Sessions live in memory only and are dropped when the browser ends them
//! or the process exits.

mod state;
mod store;

pub use state::Session;
pub use store::{SessionHandle, SessionStore};
