use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use diagram_chat::agent::{LlmClient, MockLlmClient};
use diagram_chat::{build_router, Config, WebAppState};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Config for tests: no random theme, so rendered sources are predictable
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.theme.random_theme = false;
    config
}

#[derive(Clone)]
pub struct TestApp {
    pub state: WebAppState,
    router: Router,
}

impl TestApp {
    pub fn new(llm: MockLlmClient) -> Self {
        Self::with_config(test_config(), llm)
    }

    pub fn with_config(config: Config, llm: MockLlmClient) -> Self {
        Self::with_llm(config, Arc::new(llm))
    }

    pub fn with_llm(config: Config, llm: Arc<dyn LlmClient>) -> Self {
        let state = WebAppState::new(config, llm);
        let router = build_router(state.clone(), false);
        Self { state, router }
    }

    pub async fn raw(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        self.router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    /// Send a request and decode the JSON reply (`Null` for empty bodies)
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let response = self.raw(method, uri, body).await;
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    /// Poll the session until its agent is (or is no longer) working
    pub async fn wait_for_working(&self, id: &str, working: bool) -> Value {
        for _ in 0..200 {
            let (_, session) = self
                .request(Method::GET, &format!("/api/sessions/{}", id), None)
                .await;
            if session["working"] == working {
                return session;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        panic!("session {} never reached working={}", id, working);
    }

    /// Create a session and return its id
    pub async fn create_session(&self) -> String {
        let (status, json) = self.request(Method::POST, "/api/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        json["id"].as_str().unwrap().to_string()
    }
}
