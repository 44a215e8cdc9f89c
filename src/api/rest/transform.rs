//! Transform endpoint - case transformations

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{ApiError, MAX_QUERY_INPUT_BYTES};
use crate::analyze::transform::Transformation;
use crate::api::state::AppState;

/// Request body / query parameters for /transform
#[derive(Debug, Deserialize)]
pub struct TransformRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub transformation: String,
}

/// Response for /transform
#[derive(Debug, Serialize)]
pub struct TransformResponse {
    pub original_text: String,
    pub transformed_text: String,
}

/// POST /transform - transform a string passed as a JSON body
pub async fn transform_post(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TransformRequest>,
) -> Response {
    transform(&state, req, false)
}

/// GET /transform?text=...&transformation=... - transform via query parameters
pub async fn transform_get(
    State(state): State<Arc<AppState>>,
    Query(req): Query<TransformRequest>,
) -> Response {
    transform(&state, req, true)
}

fn transform(state: &AppState, req: TransformRequest, enforce_cap: bool) -> Response {
    if req.text.is_empty() {
        let error = ApiError::bad_request("text is required");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }
    if enforce_cap && req.text.len() > MAX_QUERY_INPUT_BYTES {
        let error = ApiError::bad_request("text is too long");
        return (StatusCode::BAD_REQUEST, Json(error)).into_response();
    }

    let kind = match Transformation::parse(&req.transformation) {
        Some(kind) => kind,
        None => {
            let error = ApiError::bad_request("invalid transformation type");
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    // Transformed text is derived from the original, so the original is what
    // gets counted in the aggregate
    state.record_input(&req.text);

    let transformed_text = kind.apply(&req.text);
    let response = TransformResponse {
        original_text: req.text,
        transformed_text,
    };

    (StatusCode::OK, Json(response)).into_response()
}
