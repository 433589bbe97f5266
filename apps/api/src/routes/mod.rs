pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::{routing::get, routing::post, Router};

use crate::analysis::handlers::handle_analyze;
use crate::extract::handlers::handle_extract;
use crate::state::AppState;

/// Uploads are capped at 5 MB plus multipart framing headroom.
const BODY_LIMIT_BYTES: usize = 6 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handle_analyze))
        .route("/api/v1/extract", post(handle_extract))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .with_state(state)
}
