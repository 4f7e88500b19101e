pub mod chat;
pub mod error;
pub mod llm;
pub mod mock;
pub mod openai;
pub mod prompt;
pub mod tool;
pub mod usage;

pub use chat::{AgentRun, AgentSettings, ChatAgent, CURRENT_DIAGRAM_CONTEXT, DEFAULT_MODEL};
pub use error::AgentError;
pub use llm::{
    ChatMessage, CompletionRequest, LlmClient, LlmResponse, MessageRole, TokenUsage, ToolCall,
    ToolDefinition,
};
pub use mock::MockLlmClient;
pub use openai::OpenAiClient;
pub use usage::UsageTracker;
