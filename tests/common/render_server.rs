use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use parking_lot::Mutex;

/// PNG signature followed by filler bytes
pub const FAKE_PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];

/// A stand-in PlantUML server recording the encoded paths it was asked for
pub struct FakeRenderServer {
    /// Value for the `render.base_url` setting
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<String>>>,
}

#[derive(Clone)]
struct FakeState {
    requests: Arc<Mutex<Vec<String>>>,
    status: StatusCode,
}

async fn render(State(state): State<FakeState>, Path(encoded): Path<String>) -> impl IntoResponse {
    state.requests.lock().push(encoded);
    if state.status.is_success() {
        ([(header::CONTENT_TYPE, "image/png")], FAKE_PNG.to_vec()).into_response()
    } else {
        (state.status, "Syntax Error?").into_response()
    }
}

impl FakeRenderServer {
    /// Serve images with status 200
    pub async fn start() -> Self {
        Self::start_with_status(StatusCode::OK).await
    }

    /// Answer every request with `status`
    pub async fn start_with_status(status: StatusCode) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/plantuml/img/{encoded}", get(render))
            .with_state(FakeState {
                requests: requests.clone(),
                status,
            });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/plantuml/img/", addr),
            requests,
        }
    }
}
