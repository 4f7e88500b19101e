//! Shared test utilities for diagram-chat
//!
//! - An in-process app driven through `tower::ServiceExt::oneshot`
//! - A fake PlantUML server on a loopback port
//! - An LLM client that holds completions until released

pub mod app;
pub mod gated_llm;
pub mod render_server;
