//! HTTP API for the airport route lookup service.

pub mod handlers;

use crate::directory::Directory;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the application router around a shared, read-only directory.
pub fn router(directory: Arc<Directory>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index).post(handlers::resolve_routes))
        .route("/health", get(handlers::health))
        .with_state(directory)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
