//! Diagram editing, version browsing and image proxy handlers.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::diagram::{has_inline_theme, version_caption};
use crate::render::is_renderable;
use crate::web::error::WebError;
use crate::web::handlers::sessions::{ensure_idle, SessionResponse};
use crate::web::state::WebAppState;

#[derive(Debug, Deserialize)]
pub struct UpdateDiagramRequest {
    pub code: String,
}

/// Replace the diagram from the editor.
pub async fn update_diagram(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDiagramRequest>,
) -> Result<Json<SessionResponse>, WebError> {
    let handle = state.session(id)?;
    let mut session = handle.lock().await;
    ensure_idle(&session)?;
    if session.edit_diagram(req.code) {
        tracing::debug!(session = %id, history = session.buffer.history_len(), "Diagram edited");
    }
    Ok(Json(SessionResponse::build(&mut session, &state)?))
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub versions_back: usize,
    pub caption: String,
    pub code: String,
    pub image_url: Option<String>,
    /// This version sets its own `!theme`
    pub inline_theme: bool,
}

/// View the diagram as it was `n` edits ago.
pub async fn get_version(
    State(state): State<WebAppState>,
    Path((id, n)): Path<(Uuid, usize)>,
) -> Result<Json<VersionResponse>, WebError> {
    let handle = state.session(id)?;
    let mut session = handle.lock().await;
    let random_enabled = state.config().theme.random_theme;

    let code = session
        .buffer
        .version_back(n)
        .map(str::to_string)
        .ok_or_else(|| version_not_found(n, session.buffer.history_len()))?;
    let image_url = if is_renderable(&code) {
        let source = session.render_source(n, random_enabled).unwrap_or_else(|| code.clone());
        Some(state.renderer().image_url(&source)?)
    } else {
        None
    };

    Ok(Json(VersionResponse {
        versions_back: n,
        caption: version_caption(n),
        inline_theme: has_inline_theme(&code),
        code,
        image_url,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageQuery {
    #[serde(default)]
    pub versions_back: usize,
}

/// Fetch the rendered image through the server.
pub async fn get_image(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ImageQuery>,
) -> Result<Response, WebError> {
    let source = {
        let handle = state.session(id)?;
        let mut session = handle.lock().await;
        let history_len = session.buffer.history_len();
        let code = session
            .buffer
            .version_back(query.versions_back)
            .ok_or_else(|| version_not_found(query.versions_back, history_len))?;
        if !is_renderable(code) {
            return Err(WebError::NotFound("The diagram is empty".to_string()));
        }
        session
            .render_source(query.versions_back, state.config().theme.random_theme)
            .ok_or_else(|| version_not_found(query.versions_back, history_len))?
    };

    let image = state.renderer().fetch(&source).await?;
    Ok(([(header::CONTENT_TYPE, image.content_type)], image.bytes).into_response())
}

fn version_not_found(n: usize, history_len: usize) -> WebError {
    WebError::NotFound(format!(
        "No version {} edits back (history holds {})",
        n, history_len
    ))
}
