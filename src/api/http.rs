//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{
    response::Html,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{stats, strings, transform};
use super::state::AppState;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Usage page
        .route("/", get(usage))
        // Health check
        .route("/health", get(health_check))
        // String analysis endpoints
        .route(
            "/stringinate",
            get(strings::stringinate_get).post(strings::stringinate_post),
        )
        .route(
            "/transform",
            get(transform::transform_get).post(transform::transform_post),
        )
        // Aggregate statistics
        .route("/stats", get(stats::get_stats))
        .route("/reset-stats", get(stats::reset_stats))
        .layer(cors)
        .with_state(state)
}

/// Usage page listing the available endpoints
async fn usage() -> Html<&'static str> {
    Html(
        "<pre>\
String analysis service.\n\
\n\
GET  /stringinate?input=...  Length and character-frequency report for a string\n\
POST /stringinate            Same, JSON body: {\"input\": \"...\"}\n\
GET  /transform?text=...&transformation=uppercase|lowercase|titlecase\n\
POST /transform              Same, JSON body: {\"text\": \"...\", \"transformation\": \"...\"}\n\
GET  /stats                  Statistics over every string the server has seen\n\
GET  /reset-stats            Clear those statistics\n\
</pre>",
    )
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
