//! REST API route definitions.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::web::handlers::{chat, diagram, examples, sessions, themes};
use crate::web::state::WebAppState;

/// Build the API router with all REST endpoints.
pub fn api_routes() -> Router<WebAppState> {
    Router::new()
        // Catalog routes
        .route("/themes", get(themes::list_themes))
        .route("/examples", get(examples::list_examples))
        // Session routes
        .route("/sessions", post(sessions::create_session))
        .route("/sessions/{id}", get(sessions::get_session))
        .route("/sessions/{id}", delete(sessions::delete_session))
        .route("/sessions/{id}/usage", get(sessions::get_usage))
        // Diagram routes
        .route("/sessions/{id}/diagram", put(diagram::update_diagram))
        .route("/sessions/{id}/versions/{n}", get(diagram::get_version))
        .route("/sessions/{id}/image", get(diagram::get_image))
        .route("/sessions/{id}/examples/load", post(examples::load_example))
        // Theme routes
        .route("/sessions/{id}/theme", put(themes::set_theme))
        .route(
            "/sessions/{id}/theme/random",
            delete(themes::remove_random_theme),
        )
        // Chat routes
        .route("/sessions/{id}/chat", post(chat::send_message))
        .route("/sessions/{id}/chat", delete(chat::reset_chat))
}
