use std::sync::Arc;

use async_trait::async_trait;
use diagram_chat::agent::{AgentError, CompletionRequest, LlmClient, LlmResponse, MockLlmClient};
use tokio::sync::Semaphore;

/// Scripted client whose completions wait until the test lets them through
#[derive(Clone)]
pub struct GatedLlmClient {
    pub inner: MockLlmClient,
    gate: Arc<Semaphore>,
}

impl GatedLlmClient {
    pub fn new(inner: MockLlmClient) -> Self {
        Self {
            inner,
            gate: Arc::new(Semaphore::new(0)),
        }
    }

    /// Let `n` more completions return
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }
}

#[async_trait]
impl LlmClient for GatedLlmClient {
    async fn complete(&self, request: CompletionRequest) -> Result<LlmResponse, AgentError> {
        self.gate.acquire().await.expect("gate closed").forget();
        self.inner.complete(request).await
    }
}
