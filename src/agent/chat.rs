//! Conversational agent that co-edits the diagram through one tool.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::agent::error::AgentError;
use crate::agent::llm::{ChatMessage, CompletionRequest, LlmClient};
use crate::agent::prompt::{render_system_prompt, AGENT_DESCRIPTION};
use crate::agent::tool::{self, update_diagram_definition};
use crate::agent::usage::UsageTracker;
use crate::diagram::DiagramBuffer;

/// Context key holding the diagram source the model should work from
pub const CURRENT_DIAGRAM_CONTEXT: &str = "current_diagram";

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Tunables for a [`ChatAgent`]
#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub model: String,
    /// Tool rounds allowed before the model must answer in text
    pub max_consecutive_tool_calls: usize,
    /// Longest accepted user message, in characters
    pub max_message_chars: usize,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_consecutive_tool_calls: 1,
            max_message_chars: 1000,
        }
    }
}

/// Summary of one agent run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AgentRun {
    /// Messages appended to the transcript, tool traffic included
    pub new_messages: usize,
    pub completions: usize,
    pub diagram_changed: bool,
}

#[derive(Debug, Clone)]
pub struct ChatAgent {
    description: String,
    settings: AgentSettings,
    history: Vec<ChatMessage>,
    context: BTreeMap<String, String>,
    working: bool,
    usage: UsageTracker,
}

impl ChatAgent {
    pub fn new(settings: AgentSettings) -> Self {
        Self {
            description: AGENT_DESCRIPTION.to_string(),
            settings,
            history: Vec::new(),
            context: BTreeMap::new(),
            working: false,
            usage: UsageTracker::default(),
        }
    }

    pub fn settings(&self) -> &AgentSettings {
        &self.settings
    }

    /// Whether a user message is waiting for a reply
    pub fn is_working(&self) -> bool {
        self.working
    }

    pub fn usage(&self) -> &UsageTracker {
        &self.usage
    }

    pub fn add_to_context(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.context.insert(key.into(), value.into());
    }

    pub fn context(&self, key: &str) -> Option<&str> {
        self.context.get(key).map(String::as_str)
    }

    /// The system prompt with the current context rendered in
    pub fn system_prompt(&self) -> String {
        render_system_prompt(
            &self.description,
            self.context.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )
    }

    /// Queue a user message for the next run.
    ///
    /// Rejects blank messages, messages over the configured length, and
    /// messages sent while a previous one is still being answered.
    pub fn add_user_message(&mut self, text: &str) -> bool {
        if self.working
            || text.trim().is_empty()
            || text.chars().count() > self.settings.max_message_chars
        {
            return false;
        }
        self.history.push(ChatMessage::user(text));
        self.working = true;
        true
    }

    /// The transcript in order, optionally hiding tool traffic
    pub fn get_chat_history(&self, include_function_calls: bool) -> Vec<&ChatMessage> {
        self.history
            .iter()
            .filter(|m| include_function_calls || !m.is_function_call())
            .collect()
    }

    /// Forget the conversation; the diagram is untouched
    pub fn reset_history(&mut self) {
        self.history.clear();
        self.working = false;
    }

    /// Abandon the pending user message without a reply.
    ///
    /// The message stays in the transcript so the user can see what was lost.
    pub fn stop(&mut self) {
        self.working = false;
    }

    /// Answer the pending user message, running tool calls against `buffer`.
    ///
    /// After `max_consecutive_tool_calls` tool rounds the tool is withdrawn so
    /// the next completion has to be a text reply. Tool edits land in a draft
    /// that is committed to `buffer` once when the run ends, so a run records
    /// at most one version however many edits it made. `status` receives
    /// progress messages while the run is in flight.
    pub async fn run_agent(
        &mut self,
        client: &dyn LlmClient,
        buffer: &mut DiagramBuffer,
        status: &mut (dyn FnMut(&str) + Send),
    ) -> Result<AgentRun, AgentError> {
        if !self.working {
            return Err(AgentError::NotWorking);
        }

        let start_len = self.history.len();
        let mut draft = buffer.current().to_string();
        let result = self.complete_turns(client, &mut draft, status).await;

        // Edits made before a failure are kept
        let diagram_changed = buffer.edit(draft);
        self.add_to_context(CURRENT_DIAGRAM_CONTEXT, buffer.current());
        let completions = result?;

        status("Agent completed work!");
        let run = AgentRun {
            new_messages: self.history.len() - start_len,
            completions,
            diagram_changed,
        };
        tracing::debug!(
            completions = run.completions,
            diagram_changed = run.diagram_changed,
            "Agent run finished"
        );
        Ok(run)
    }

    /// Request completions until the model answers in text; returns how many
    /// completions were made.
    async fn complete_turns(
        &mut self,
        client: &dyn LlmClient,
        draft: &mut String,
        status: &mut (dyn FnMut(&str) + Send),
    ) -> Result<usize, AgentError> {
        let mut completions = 0;
        let mut tool_rounds = 0;
        self.add_to_context(CURRENT_DIAGRAM_CONTEXT, draft.as_str());

        while self.working {
            let offer_tools = tool_rounds < self.settings.max_consecutive_tool_calls;
            let request = CompletionRequest {
                model: self.settings.model.clone(),
                system_prompt: self.system_prompt(),
                messages: self.history.clone(),
                tools: if offer_tools {
                    vec![update_diagram_definition()]
                } else {
                    Vec::new()
                },
            };

            status("Waiting for the model");
            let response = match client.complete(request).await {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!(error = %e, "Completion failed");
                    self.working = false;
                    return Err(e);
                }
            };
            completions += 1;
            self.usage.record(&response.usage);

            if offer_tools && response.has_tool_calls() {
                let text = response.text.unwrap_or_default();
                self.history.push(ChatMessage::assistant_tool_calls(
                    text,
                    response.tool_calls.clone(),
                ));
                for call in &response.tool_calls {
                    status(&format!("Running {}", call.name));
                    let outcome = tool::execute(call, draft);
                    self.history
                        .push(ChatMessage::tool_result(&call.id, outcome.output));
                }
                self.add_to_context(CURRENT_DIAGRAM_CONTEXT, draft.as_str());
                tool_rounds += 1;
                continue;
            }

            if response.has_tool_calls() {
                tracing::warn!(
                    calls = response.tool_calls.len(),
                    "Ignoring tool calls made after the tool was withdrawn"
                );
            }

            self.working = false;
            match response.text {
                Some(text) if !text.trim().is_empty() => {
                    self.history.push(ChatMessage::assistant(text));
                }
                _ => return Err(AgentError::EmptyResponse),
            }
        }

        Ok(completions)
    }
}
