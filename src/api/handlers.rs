//! Request handlers
//!
//! The POST handler is the single error boundary for a request: a body that
//! is not JSON maps to the generic 500 error, a JSON body without a string
//! `input_pairs` field maps to a 400, and everything else produces a 200
//! with one result entry per input line. Per-line failures are values
//! inside the result list and can never abort the request.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::directory::Directory;
use crate::resolver::{resolve_batch, RouteResult};

pub type AppState = Arc<Directory>;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET / — the lookup form page.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// POST / — resolve a batch of newline-separated route pairs.
pub async fn resolve_routes(
    State(directory): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<RouteResult>>, (StatusCode, Json<ErrorResponse>)> {
    let data: Value = match serde_json::from_slice(&body) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("Rejecting unreadable request body: {}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("An unexpected error occurred: {e}"),
                }),
            ));
        }
    };

    let Some(input) = data.get("input_pairs").and_then(Value::as_str) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Missing 'input_pairs' in request data".to_string(),
            }),
        ));
    };

    Ok(Json(resolve_batch(input, &directory)))
}
