//! Sentiment Web Server
//!
//! Axum-based HTTP front end for the analysis pipeline.

pub mod routes;
pub mod state;

use axum::{routing::post, Router};
use sentiment_core::SentimentAnalyzer;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Create the application router.
///
/// CORS headers come from the response formatter rather than a CORS layer,
/// since success and failure responses advertise different header sets.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/analyze",
            post(routes::analyze::analyze).options(routes::analyze::preflight),
        )
        .route(
            "/",
            post(routes::analyze::analyze).options(routes::analyze::preflight),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(analyzer: Arc<SentimentAnalyzer>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(analyzer);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Sentiment service listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
