//! Diagram rendering through the remote PlantUML server.
//!
//! Rendering is delegated wholesale: the diagram source is compressed and
//! encoded into the request path, and the server answers with an image.

mod encode;

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use sha2::{Digest, Sha256};

pub use encode::encode;

/// Public PlantUML image endpoint
pub const DEFAULT_RENDER_URL: &str = "http://www.plantuml.com/plantuml/img/";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to encode diagram: {0}")]
    Encode(#[from] std::io::Error),

    #[error("Request to render server failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Render server returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Whether `source` has anything to draw; blank text is never sent for rendering.
pub fn is_renderable(source: &str) -> bool {
    !source.trim().is_empty()
}

/// Image bytes returned by the render server
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Builds (and optionally fetches) image URLs for diagram sources.
///
/// URLs are memoized by a digest of the source for the lifetime of the
/// renderer, so repeated renders of the same text never re-encode.
pub struct PlantUmlRenderer {
    base_url: String,
    client: Client,
    cache: Mutex<HashMap<[u8; 32], String>>,
}

impl PlantUmlRenderer {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            base_url: base_url.into(),
            client,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// URL of the rendered image for `source`.
    pub fn image_url(&self, source: &str) -> Result<String, RenderError> {
        let key: [u8; 32] = Sha256::digest(source.as_bytes()).into();
        if let Some(url) = self.cache.lock().get(&key) {
            return Ok(url.clone());
        }

        tracing::info!(bytes = source.len(), "Getting diagram from remote");
        let url = format!("{}{}", self.base_url, encode(source)?);
        self.cache.lock().insert(key, url.clone());
        Ok(url)
    }

    /// Number of distinct sources with a memoized URL
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Download the rendered image for `source`.
    pub async fn fetch(&self, source: &str) -> Result<RenderedImage, RenderError> {
        let url = self.image_url(source)?;
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Render server rejected diagram");
            return Err(RenderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("image/png")
            .to_string();
        let bytes = response.bytes().await?.to_vec();

        Ok(RenderedImage {
            content_type,
            bytes,
        })
    }
}

impl Default for PlantUmlRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_RENDER_URL)
    }
}
