//! Theme handlers for the diagram-chat web API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::diagram::{has_inline_theme, is_known_theme, THEMES};
use crate::web::error::WebError;
use crate::web::handlers::sessions::SessionResponse;
use crate::web::state::WebAppState;

#[derive(Debug, Serialize)]
pub struct ListThemesResponse {
    pub themes: &'static [&'static str],
}

pub async fn list_themes() -> Json<ListThemesResponse> {
    Json(ListThemesResponse { themes: THEMES })
}

#[derive(Debug, Deserialize)]
pub struct SetThemeRequest {
    /// `None` clears the explicit selection
    pub theme: Option<String>,
    /// Version on screen when the theme was picked
    #[serde(default)]
    pub versions_back: usize,
}

/// Select the theme used to render the session's diagram.
pub async fn set_theme(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetThemeRequest>,
) -> Result<Json<SessionResponse>, WebError> {
    if let Some(theme) = &req.theme {
        if !is_known_theme(theme) {
            return Err(WebError::BadRequest(format!("Unknown theme: {}", theme)));
        }
    }

    let handle = state.session(id)?;
    let mut session = handle.lock().await;
    let shown = session.buffer.version_back(req.versions_back).ok_or_else(|| {
        WebError::NotFound(format!("No version {} edits back", req.versions_back))
    })?;
    if has_inline_theme(shown) {
        return Err(WebError::Conflict(
            "The diagram sets its own !theme".to_string(),
        ));
    }
    session.theme.selected = req.theme;
    Ok(Json(SessionResponse::build(&mut session, &state)?))
}

/// Drop the randomly drawn theme for the rest of the session.
pub async fn remove_random_theme(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, WebError> {
    let handle = state.session(id)?;
    let mut session = handle.lock().await;
    session.theme.remove_random();
    Ok(Json(SessionResponse::build(&mut session, &state)?))
}
