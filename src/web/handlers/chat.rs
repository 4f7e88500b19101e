//! Chat handlers: send a message to the assistant, or clear the conversation.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::agent::AgentRun;
use crate::web::error::WebError;
use crate::web::handlers::sessions::{ensure_idle, SessionResponse};
use crate::web::state::WebAppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub run: AgentRun,
    /// Progress messages reported while the agent worked
    pub statuses: Vec<String>,
    pub session: SessionResponse,
}

/// Send a user message and run the assistant until it replies.
///
/// The run works on copies of the agent and buffer in its own task, so the
/// session stays readable meanwhile and the run completes even if the
/// request is dropped. A second message while one is pending gets 409.
pub async fn send_message(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, WebError> {
    let handle = state.session(id)?;
    let (mut agent, mut buffer) = {
        let mut session = handle.lock().await;
        ensure_idle(&session)?;
        if !session.agent.add_user_message(&req.message) {
            return Err(WebError::BadRequest(format!(
                "Message must be non-empty and at most {} characters",
                session.agent.settings().max_message_chars
            )));
        }
        (session.agent.clone(), session.buffer.clone())
    };

    let task_state = state.clone();
    let task_handle = handle.clone();
    let task = tokio::spawn(async move {
        let mut statuses = Vec::new();
        let result = agent
            .run_agent(task_state.llm(), &mut buffer, &mut |status: &str| {
                tracing::debug!(session = %id, status, "Agent status");
                statuses.push(status.to_string());
            })
            .await;
        task_handle.lock().await.finish_run(agent, buffer);
        result.map(|run| (run, statuses))
    });

    let (run, statuses) = match task.await {
        Ok(result) => result?,
        Err(e) => {
            handle.lock().await.agent.stop();
            return Err(WebError::Internal(format!("Agent task failed: {}", e)));
        }
    };

    tracing::info!(
        session = %id,
        completions = run.completions,
        diagram_changed = run.diagram_changed,
        "Assistant replied"
    );

    let mut session = handle.lock().await;
    Ok(Json(ChatResponse {
        run,
        statuses,
        session: SessionResponse::build(&mut session, &state)?,
    }))
}

/// Clear the conversation; the diagram and its history stay.
pub async fn reset_chat(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, WebError> {
    let handle = state.session(id)?;
    let mut session = handle.lock().await;
    ensure_idle(&session)?;
    session.agent.reset_history();
    Ok(Json(SessionResponse::build(&mut session, &state)?))
}
