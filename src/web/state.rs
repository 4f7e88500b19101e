//! Shared state for the web server.

use std::sync::Arc;

use uuid::Uuid;

use crate::agent::LlmClient;
use crate::config::Config;
use crate::render::PlantUmlRenderer;
use crate::session::{SessionHandle, SessionStore};
use crate::web::error::WebError;

/// State handed to every request handler; cheap to clone.
#[derive(Clone)]
pub struct WebAppState {
    config: Arc<Config>,
    sessions: Arc<SessionStore>,
    renderer: Arc<PlantUmlRenderer>,
    llm: Arc<dyn LlmClient>,
}

impl WebAppState {
    pub fn new(config: Config, llm: Arc<dyn LlmClient>) -> Self {
        let renderer = PlantUmlRenderer::new(config.render.base_url.clone());
        Self {
            config: Arc::new(config),
            sessions: Arc::new(SessionStore::new()),
            renderer: Arc::new(renderer),
            llm,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn renderer(&self) -> &PlantUmlRenderer {
        &self.renderer
    }

    pub fn llm(&self) -> &dyn LlmClient {
        self.llm.as_ref()
    }

    /// Look up a live session or fail with 404
    pub fn session(&self, id: Uuid) -> Result<SessionHandle, WebError> {
        self.sessions
            .get(&id)
            .ok_or_else(|| WebError::NotFound(format!("Session {} not found", id)))
    }
}
