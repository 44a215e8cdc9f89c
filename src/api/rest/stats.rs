//! Stats endpoints - aggregate statistics snapshot and reset

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::api::state::AppState;

/// GET /stats - consistent snapshot of the aggregate statistics
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.aggregate.snapshot())
}

/// GET /reset-stats - wipe in-memory and persisted statistics
pub async fn reset_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.reset_all();

    Json(json!({ "message": "statistics reset" }))
}
