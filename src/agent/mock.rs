//! Mock LLM client for deterministic testing
//!
//! Implements [`LlmClient`] by replaying pre-configured responses instead of
//! calling a real backend, and captures every request for later verification.
//!
//! # Example
//! ```no_run
//! use diagram_chat::agent::mock::MockLlmClient;
//! use diagram_chat::agent::LlmResponse;
//!
//! let client = MockLlmClient::new(vec![
//!     MockLlmClient::update_diagram("call-1", "@startuml\nA -> B\n@enduml"),
//!     LlmResponse::text("I connected A to B."),
//! ]);
//! ```

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::agent::error::AgentError;
use crate::agent::llm::{CompletionRequest, LlmClient, LlmResponse, TokenUsage, ToolCall};
use crate::agent::tool::UPDATE_DIAGRAM_TOOL;

/// Scripted step: a response or an error to return
enum MockStep {
    Respond(LlmResponse),
    Fail(String),
}

/// Mock LLM client for testing
#[derive(Clone)]
pub struct MockLlmClient {
    steps: Arc<Mutex<VecDeque<MockStep>>>,
    /// Captured requests for verification
    captured: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockLlmClient {
    pub fn new(responses: Vec<LlmResponse>) -> Self {
        Self {
            steps: Arc::new(Mutex::new(
                responses.into_iter().map(MockStep::Respond).collect(),
            )),
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append a failure after the configured responses
    pub fn then_fail(self, message: impl Into<String>) -> Self {
        self.steps.lock().push_back(MockStep::Fail(message.into()));
        self
    }

    /// A response calling the diagram update tool with `diagram_code`
    pub fn update_diagram(call_id: &str, diagram_code: &str) -> LlmResponse {
        LlmResponse {
            text: None,
            tool_calls: vec![ToolCall {
                id: call_id.to_string(),
                name: UPDATE_DIAGRAM_TOOL.to_string(),
                arguments: serde_json::json!({ "diagram_code": diagram_code }),
            }],
            usage: TokenUsage {
                prompt_tokens: 100,
                completion_tokens: 20,
            },
        }
    }

    /// All requests received so far
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.captured.lock().clone()
    }

    pub fn remaining(&self) -> usize {
        self.steps.lock().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<LlmResponse, AgentError> {
        self.captured.lock().push(request);
        match self.steps.lock().pop_front() {
            Some(MockStep::Respond(response)) => Ok(response),
            Some(MockStep::Fail(message)) => Err(AgentError::Api {
                status: 500,
                body: message,
            }),
            None => Err(AgentError::InvalidResponse(
                "mock client has no scripted response left".to_string(),
            )),
        }
    }
}
