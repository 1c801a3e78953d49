use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{create_code_handler, get_code_handler, health_handler};
use crate::state::AppState;

/// Slack on top of the payload fields for JSON framing and the file name.
const BODY_OVERHEAD: usize = 64 * 1024;

pub struct App {}

impl App {
    pub fn router(state: AppState, body_limit: usize) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .route("/api/code", post(create_code_handler))
            .route("/api/code/{id}", get(get_code_handler))
            .layer(DefaultBodyLimit::max(body_limit))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Request body limit that admits `code` and `input` each at the store's
    /// payload limit.
    pub fn body_limit_for(max_payload_bytes: usize) -> usize {
        max_payload_bytes
            .saturating_mul(2)
            .saturating_add(BODY_OVERHEAD)
    }
}
