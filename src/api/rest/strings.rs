//! Stringinate endpoint - per-string analysis

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{ApiError, MAX_QUERY_INPUT_BYTES};
use crate::analyze;
use crate::api::state::AppState;

/// Request body / query parameters for /stringinate
#[derive(Debug, Deserialize)]
pub struct StringRequest {
    #[serde(default)]
    pub input: String,
}

/// Per-string report returned by /stringinate
#[derive(Debug, Serialize)]
pub struct StringReport {
    pub input: String,
    /// Byte length of the input
    pub length: usize,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub most_frequent: String,
    #[serde(skip_serializing_if = "crate::types::is_zero")]
    pub frequent_count: usize,
}

/// POST /stringinate - analyze a string passed as a JSON body
pub async fn stringinate_post(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StringRequest>,
) -> Response {
    stringinate(&state, req.input, false)
}

/// GET /stringinate?input=... - analyze a string passed as a query parameter
pub async fn stringinate_get(
    State(state): State<Arc<AppState>>,
    Query(req): Query<StringRequest>,
) -> Response {
    stringinate(&state, req.input, true)
}

fn stringinate(state: &AppState, input: String, enforce_cap: bool) -> Response {
    if input.is_empty() {
        let error = ApiError::bad_request("input is required");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }
    if enforce_cap && input.len() > MAX_QUERY_INPUT_BYTES {
        let error = ApiError::bad_request("input string is too long");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    // Count the input in the aggregate (and persist) before building the
    // response; the response itself only uses per-string analysis
    state.record_input(&input);

    let (most_frequent, frequent_count) = analyze::most_frequent_char(&input);
    let report = StringReport {
        length: input.len(),
        input,
        most_frequent,
        frequent_count,
    };

    (StatusCode::OK, Json(report)).into_response()
}
