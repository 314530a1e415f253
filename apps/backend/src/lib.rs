pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::services::content::ContentService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<ContentService>,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let content = ContentService::from_env();
    tracing::info!("Serving content from {}", content.base_url());

    let state = AppState {
        content: Arc::new(content),
    };

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the API router. Middleware layers are applied by the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/modules", get(routes::modules::list))
        .route("/api/quiz/{module_id}", get(routes::quiz::get_quiz))
        .route(
            "/api/flashcards/{module_id}",
            get(routes::flashcards::get_flashcards),
        )
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
