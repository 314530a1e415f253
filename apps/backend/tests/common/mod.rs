//! Common test utilities for integration tests.
//!
//! Handler tests run against the real router, with the remote content
//! repository replaced by a small fixture server bound to an ephemeral
//! local port, so no test needs network access.

pub mod fixtures;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tokio::net::TcpListener;

use awsquiz_backend::services::content::ContentService;
use awsquiz_backend::AppState;

/// Test context wiring the API router to a content base URL.
pub struct TestContext {
    app: Router,
}

impl TestContext {
    /// Create a context whose content service points at `base_url`.
    pub fn new(base_url: &str) -> Self {
        let state = AppState {
            content: Arc::new(ContentService::with_base_url(base_url)),
        };
        Self {
            app: awsquiz_backend::router(state),
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

/// Spawn a fixture content server holding the given path -> body files.
/// Returns its base URL. Unknown paths answer 404, like the real store.
pub async fn serve_content(files: Vec<(String, String)>) -> String {
    let store: Arc<HashMap<String, String>> = Arc::new(files.into_iter().collect());
    let app = Router::new().fallback(serve_file).with_state(store);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fixture server");
    let addr = listener.local_addr().expect("Failed to read fixture addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{}", addr)
}

async fn serve_file(State(store): State<Arc<HashMap<String, String>>>, uri: Uri) -> Response {
    match store.get(uri.path()) {
        Some(body) => body.clone().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// A base URL nothing listens on, for exercising fetch failures.
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let addr = listener.local_addr().expect("Failed to read throwaway addr");
    drop(listener);
    format!("http://{}", addr)
}
