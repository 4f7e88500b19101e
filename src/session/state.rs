use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::agent::{AgentSettings, ChatAgent, CURRENT_DIAGRAM_CONTEXT};
use crate::diagram::{find_example, DiagramBuffer, DiagramExample, ThemeSelection, DEFAULT_DIAGRAM};

pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub buffer: DiagramBuffer,
    pub agent: ChatAgent,
    pub theme: ThemeSelection,
}

impl Session {
    pub fn new(settings: AgentSettings) -> Self {
        let mut agent = ChatAgent::new(settings);
        agent.add_to_context(CURRENT_DIAGRAM_CONTEXT, DEFAULT_DIAGRAM);
        Self {
            id: Uuid::now_v7(),
            created_at: Utc::now(),
            buffer: DiagramBuffer::new(DEFAULT_DIAGRAM),
            agent,
            theme: ThemeSelection::default(),
        }
    }

    /// The examples gallery is offered until the user starts working
    pub fn show_examples(&self) -> bool {
        self.agent.get_chat_history(true).is_empty() && self.buffer.current() == DEFAULT_DIAGRAM
    }

    /// Replace the diagram by hand, recording the previous text.
    pub fn edit_diagram(&mut self, code: impl Into<String>) -> bool {
        let changed = self.buffer.edit(code);
        self.sync_context();
        changed
    }

    /// Load a built-in example by title; `None` if no example has that title.
    pub fn load_example(&mut self, title: &str) -> Option<&'static DiagramExample> {
        let example = find_example(title)?;
        self.buffer.load(example.code);
        self.sync_context();
        tracing::info!(session = %self.id, example = %example.title, "Loaded example");
        Some(example)
    }

    /// Hand back the agent and buffer a detached run worked on.
    pub fn finish_run(&mut self, agent: ChatAgent, buffer: DiagramBuffer) {
        self.agent = agent;
        self.buffer = buffer;
    }

    /// Source to render for the version `versions_back` edits ago, themed.
    pub fn render_source(&mut self, versions_back: usize, random_theme: bool) -> Option<String> {
        let code = self.buffer.version_back(versions_back)?.to_string();
        Some(self.theme.themed_source(&code, random_theme))
    }

    fn sync_context(&mut self) {
        self.agent
            .add_to_context(CURRENT_DIAGRAM_CONTEXT, self.buffer.current());
    }
}
