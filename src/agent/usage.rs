use serde::Serialize;

use crate::agent::llm::TokenUsage;

/// Running totals of completion usage for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsageTracker {
    pub completions: u64,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

impl UsageTracker {
    pub fn record(&mut self, usage: &TokenUsage) {
        self.completions += 1;
        self.prompt_tokens += usage.prompt_tokens;
        self.completion_tokens += usage.completion_tokens;
    }

    pub fn total_tokens(&self) -> u64 {
        self.prompt_tokens + self.completion_tokens
    }
}
