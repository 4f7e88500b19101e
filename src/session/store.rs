use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::agent::AgentSettings;
use crate::session::Session;

/// Shared handle to one session; held across awaits while the agent runs
pub type SessionHandle = Arc<tokio::sync::Mutex<Session>>;

/// In-memory registry of live sessions
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionHandle>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session and return its id with a handle to it
    pub fn create(&self, settings: AgentSettings) -> (Uuid, SessionHandle) {
        let session = Session::new(settings);
        let id = session.id;
        let handle = Arc::new(tokio::sync::Mutex::new(session));
        self.sessions.write().insert(id, handle.clone());
        tracing::info!(session = %id, "Session created");
        (id, handle)
    }

    pub fn get(&self, id: &Uuid) -> Option<SessionHandle> {
        self.sessions.read().get(id).cloned()
    }

    /// End a session, returning whether it existed
    pub fn remove(&self, id: &Uuid) -> bool {
        let removed = self.sessions.write().remove(id).is_some();
        if removed {
            tracing::info!(session = %id, "Session ended");
        }
        removed
    }

    /// Ids of live sessions, oldest first
    pub fn ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = self.sessions.read().keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
