//! Integration tests for diagram-chat
//!
//! These tests drive the HTTP API end to end with a scripted LLM client.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod diagram_flow;
