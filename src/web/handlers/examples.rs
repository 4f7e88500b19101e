//! Built-in example gallery.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::diagram::EXAMPLES;
use crate::web::error::WebError;
use crate::web::handlers::sessions::{ensure_idle, SessionResponse};
use crate::web::state::WebAppState;

#[derive(Debug, Serialize)]
pub struct ExampleResponse {
    pub title: &'static str,
    pub code: &'static str,
    /// Preview image, rendered without a theme
    pub image_url: String,
}

#[derive(Debug, Serialize)]
pub struct ListExamplesResponse {
    pub examples: Vec<ExampleResponse>,
}

pub async fn list_examples(
    State(state): State<WebAppState>,
) -> Result<Json<ListExamplesResponse>, WebError> {
    let examples = EXAMPLES
        .iter()
        .map(|example| -> Result<ExampleResponse, WebError> {
            Ok(ExampleResponse {
                title: example.title,
                code: example.code,
                image_url: state.renderer().image_url(example.code)?,
            })
        })
        .collect::<Result<Vec<_>, WebError>>()?;
    Ok(Json(ListExamplesResponse { examples }))
}

#[derive(Debug, Deserialize)]
pub struct LoadExampleRequest {
    pub title: String,
}

/// Replace the session's diagram with a named example.
pub async fn load_example(
    State(state): State<WebAppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<LoadExampleRequest>,
) -> Result<Json<SessionResponse>, WebError> {
    let handle = state.session(id)?;
    let mut session = handle.lock().await;
    ensure_idle(&session)?;
    if session.load_example(&req.title).is_none() {
        return Err(WebError::NotFound(format!("Example '{}' not found", req.title)));
    }
    Ok(Json(SessionResponse::build(&mut session, &state)?))
}
