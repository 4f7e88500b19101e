//! HTTP request handlers for the diagram-chat web API.

pub mod chat;
pub mod diagram;
pub mod examples;
pub mod sessions;
pub mod themes;
