//! Integration tests for diagram editing, versions, examples, themes and images

use axum::http::{header, Method, StatusCode};
use diagram_chat::agent::MockLlmClient;
use diagram_chat::diagram::{DEFAULT_DIAGRAM, EXAMPLES};
use diagram_chat::render::encode;
use http_body_util::BodyExt;
use serde_json::json;

use super::common::app::{test_config, TestApp};
use super::common::render_server::{FakeRenderServer, FAKE_PNG};

const V1: &str = "@startuml\nA -> B\n@enduml";
const V2: &str = "@startuml\nA -> B\nB -> C\n@enduml";

fn app() -> TestApp {
    TestApp::new(MockLlmClient::new(vec![]))
}

async fn edit(app: &TestApp, id: &str, code: &str) -> serde_json::Value {
    let (status, json) = app
        .request(
            Method::PUT,
            &format!("/api/sessions/{}/diagram", id),
            Some(json!({ "code": code })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    json
}

async fn version(app: &TestApp, id: &str, n: usize) -> (StatusCode, serde_json::Value) {
    app.request(Method::GET, &format!("/api/sessions/{}/versions/{}", id, n), None)
        .await
}

#[tokio::test]
async fn test_edits_push_previous_versions() {
    let app = app();
    let id = app.create_session().await;

    edit(&app, &id, V1).await;
    let session = edit(&app, &id, V2).await;
    assert_eq!(session["diagram"], V2);
    assert_eq!(session["history_len"], 2);

    // Re-submitting the same text records nothing
    let session = edit(&app, &id, V2).await;
    assert_eq!(session["history_len"], 2);

    let (status, current) = version(&app, &id, 0).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(current["code"], V2);
    assert_eq!(current["caption"], "This is the current version");

    let (_, one) = version(&app, &id, 1).await;
    assert_eq!(one["code"], V1);
    let (_, two) = version(&app, &id, 2).await;
    assert_eq!(two["code"], DEFAULT_DIAGRAM);
    assert_eq!(two["caption"], "This is 2 edits ago");

    let (status, _) = version(&app, &id, 3).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_version_image_url_matches_encoding() {
    let app = app();
    let id = app.create_session().await;
    edit(&app, &id, V1).await;

    let (_, version) = app
        .request(Method::GET, &format!("/api/sessions/{}/versions/1", id), None)
        .await;
    let expected = format!(
        "http://www.plantuml.com/plantuml/img/{}",
        encode(DEFAULT_DIAGRAM).unwrap()
    );
    assert_eq!(version["image_url"], expected);
}

#[tokio::test]
async fn test_load_example_replaces_buffer_verbatim() {
    let app = app();
    let id = app.create_session().await;
    let example = &EXAMPLES[4];

    let (status, session) = app
        .request(
            Method::POST,
            &format!("/api/sessions/{}/examples/load", id),
            Some(json!({ "title": example.title })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["diagram"], example.code);
    assert_eq!(session["history_len"], 0);
    assert_eq!(session["show_examples"], false);

    let (status, _) = app
        .request(
            Method::POST,
            &format!("/api/sessions/{}/examples/load", id),
            Some(json!({ "title": "Mind Map" })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_theme_selection() {
    let app = app();
    let id = app.create_session().await;
    let theme_uri = format!("/api/sessions/{}/theme", id);

    let (status, _) = app
        .request(Method::PUT, &theme_uri, Some(json!({ "theme": "neon" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, session) = app
        .request(Method::PUT, &theme_uri, Some(json!({ "theme": "cyborg" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["theme"]["selected"], "cyborg");
    assert_eq!(session["theme"]["effective"], "cyborg");
    // The stored source is untouched; only the render gets the directive
    assert_eq!(session["diagram"], DEFAULT_DIAGRAM);

    edit(&app, &id, "@startuml\n!theme toy\nA -> B\n@enduml").await;
    let (status, _) = app
        .request(Method::PUT, &theme_uri, Some(json!({ "theme": "mars" })))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_theme_lock_follows_the_displayed_version() {
    let app = app();
    let id = app.create_session().await;
    let theme_uri = format!("/api/sessions/{}/theme", id);
    edit(&app, &id, "@startuml\n!theme toy\nA -> B\n@enduml").await;

    let (_, shown) = version(&app, &id, 1).await;
    assert_eq!(shown["inline_theme"], false);
    let (_, current) = version(&app, &id, 0).await;
    assert_eq!(current["inline_theme"], true);

    // The version one edit back has no inline theme
    let (status, session) = app
        .request(
            Method::PUT,
            &theme_uri,
            Some(json!({ "theme": "mars", "versions_back": 1 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["theme"]["selected"], "mars");

    let (status, _) = app
        .request(
            Method::PUT,
            &theme_uri,
            Some(json!({ "theme": "mars", "versions_back": 0 })),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app
        .request(
            Method::PUT,
            &theme_uri,
            Some(json!({ "theme": "mars", "versions_back": 5 })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_blank_diagram_is_not_rendered() {
    let server = FakeRenderServer::start().await;
    let mut config = test_config();
    config.render.base_url = server.base_url.clone();
    config.theme.random_theme = true;
    let app = TestApp::with_config(config, MockLlmClient::new(vec![]));
    let id = app.create_session().await;

    let session = edit(&app, &id, "").await;
    assert!(session["image_url"].is_null());
    assert!(session["theme"]["effective"].is_null());

    let (status, current) = version(&app, &id, 0).await;
    assert_eq!(status, StatusCode::OK);
    assert!(current["image_url"].is_null());
    let (_, previous) = version(&app, &id, 1).await;
    assert!(previous["image_url"].is_string());

    let (status, _) = app
        .request(Method::GET, &format!("/api/sessions/{}/image", id), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(server.requests.lock().is_empty());
}

#[tokio::test]
async fn test_random_theme_can_be_removed() {
    let mut config = test_config();
    config.theme.random_theme = true;
    let app = TestApp::with_config(config, MockLlmClient::new(vec![]));
    let id = app.create_session().await;

    let (_, session) = app
        .request(Method::GET, &format!("/api/sessions/{}", id), None)
        .await;
    let random = session["theme"]["random"].as_str().unwrap().to_string();
    assert_eq!(session["theme"]["effective"], random.as_str());

    let (status, session) = app
        .request(
            Method::DELETE,
            &format!("/api/sessions/{}/theme/random", id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(session["theme"]["random"].is_null());
    assert!(session["theme"]["effective"].is_null());
}

#[tokio::test]
async fn test_image_is_proxied_from_render_server() {
    let server = FakeRenderServer::start().await;
    let mut config = test_config();
    config.render.base_url = server.base_url.clone();
    let app = TestApp::with_config(config, MockLlmClient::new(vec![]));
    let id = app.create_session().await;
    edit(&app, &id, V1).await;

    let response = app
        .raw(
            Method::GET,
            &format!("/api/sessions/{}/image?versions_back=1", id),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], FAKE_PNG);

    let requests = server.requests.lock().clone();
    assert_eq!(requests, vec![encode(DEFAULT_DIAGRAM).unwrap()]);
}

#[tokio::test]
async fn test_render_failure_is_bad_gateway() {
    let server = FakeRenderServer::start_with_status(StatusCode::BAD_REQUEST).await;
    let mut config = test_config();
    config.render.base_url = server.base_url.clone();
    let app = TestApp::with_config(config, MockLlmClient::new(vec![]));
    let id = app.create_session().await;

    let (status, json) = app
        .request(Method::GET, &format!("/api/sessions/{}/image", id), None)
        .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json["details"].as_str().unwrap().contains("400"));

    let (status, _) = app
        .request(
            Method::GET,
            &format!("/api/sessions/{}/image?versions_back=9", id),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_session_end_discards_state() {
    let app = app();
    let id = app.create_session().await;
    edit(&app, &id, V1).await;

    let (status, _) = app
        .request(Method::DELETE, &format!("/api/sessions/{}", id), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(app.state.sessions().is_empty());

    let (status, _) = app
        .request(Method::GET, &format!("/api/sessions/{}/versions/1", id), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_sessions_do_not_share_history() {
    let app = app();
    let first = app.create_session().await;
    let second = app.create_session().await;

    edit(&app, &first, V1).await;

    let (_, other) = app
        .request(Method::GET, &format!("/api/sessions/{}", second), None)
        .await;
    assert_eq!(other["diagram"], DEFAULT_DIAGRAM);
    assert_eq!(other["history_len"], 0);
}
