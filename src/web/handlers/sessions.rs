//! Session handlers for the diagram-chat web API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::agent::{ChatMessage, MessageRole, UsageTracker};
use crate::render::is_renderable;
use crate::session::Session;
use crate::web::error::WebError;
use crate::web::markdown::render_markdown;
use crate::web::state::WebAppState;

/// One visible chat message.
#[derive(Debug, Serialize)]
pub struct MessageView {
    pub role: MessageRole,
    pub content: String,
    /// Content rendered from Markdown
    pub html: String,
    pub created_at: String,
}

impl From<&ChatMessage> for MessageView {
    fn from(message: &ChatMessage) -> Self {
        Self {
            role: message.role,
            content: message.content.clone(),
            html: render_markdown(&message.content),
            created_at: message.created_at.to_rfc3339(),
        }
    }
}

/// Theme state as shown next to the image.
#[derive(Debug, Serialize)]
pub struct ThemeView {
    pub selected: Option<String>,
    pub random: Option<String>,
    /// Theme the current image is rendered with
    pub effective: Option<String>,
    /// The source sets its own `!theme`, so the selector is disabled
    pub inline: bool,
}

/// Full snapshot of a session, returned by every mutating endpoint.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub created_at: String,
    pub diagram: String,
    pub history_len: usize,
    /// Remote URL of the current image; `None` while the source is blank
    pub image_url: Option<String>,
    pub messages: Vec<MessageView>,
    pub working: bool,
    pub show_examples: bool,
    pub theme: ThemeView,
    pub usage: UsageTracker,
}

impl SessionResponse {
    pub fn build(session: &mut Session, state: &WebAppState) -> Result<Self, WebError> {
        let random_enabled = state.config().theme.random_theme;
        let code = session.buffer.current().to_string();
        let (image_url, effective) = if is_renderable(&code) {
            let source = session
                .render_source(0, random_enabled)
                .unwrap_or_else(|| code.clone());
            (
                Some(state.renderer().image_url(&source)?),
                session.theme.effective_theme(&code, random_enabled),
            )
        } else {
            (None, None)
        };

        Ok(Self {
            id: session.id,
            created_at: session.created_at.to_rfc3339(),
            history_len: session.buffer.history_len(),
            image_url,
            messages: session
                .agent
                .get_chat_history(false)
                .into_iter()
                .map(MessageView::from)
                .collect(),
            working: session.agent.is_working(),
            show_examples: session.show_examples(),
            theme: ThemeView {
                selected: session.theme.selected.clone(),
                random: session.theme.random_theme().map(str::to_string),
                effective,
                inline: crate::diagram::has_inline_theme(&code),
            },
            usage: session.agent.usage().clone(),
            diagram: code,
        })
    }
}

/// Refuse edits to the diagram or transcript while the assistant is answering
pub(crate) fn ensure_idle(session: &Session) -> Result<(), WebError> {
    if session.agent.is_working() {
        return Err(WebError::Conflict(
            "The assistant is still answering".to_string(),
        ));
    }
    Ok(())
}

/// Snapshot the session behind `id`
pub(crate) async fn snapshot(state: &WebAppState, id: Uuid) -> Result<Json<SessionResponse>, WebError> {
    let handle = state.session(id)?;
    let mut session = handle.lock().await;
    Ok(Json(SessionResponse::build(&mut session, state)?))
}

/// Start a new session.
pub async fn create_session(
    State(state): State<WebAppState>,
) -> Result<(StatusCode, Json<SessionResponse>), WebError> {
    let (_, handle) = state.sessions().create(state.config().agent_settings());
    let mut session = handle.lock().await;
    let response = SessionResponse::build(&mut session, &state)?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get a session by ID.
pub async fn get_session(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, WebError> {
    snapshot(&state, id).await
}

/// End a session, discarding its diagram history and chat.
pub async fn delete_session(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, WebError> {
    if state.sessions().remove(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(WebError::NotFound(format!("Session {} not found", id)))
    }
}

#[derive(Debug, Serialize)]
pub struct UsageResponse {
    #[serde(flatten)]
    pub usage: UsageTracker,
    pub total_tokens: u64,
}

/// Token usage of the session's completions so far.
pub async fn get_usage(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UsageResponse>, WebError> {
    let handle = state.session(id)?;
    let session = handle.lock().await;
    let usage = session.agent.usage().clone();
    Ok(Json(UsageResponse {
        total_tokens: usage.total_tokens(),
        usage,
    }))
}
