use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::timeout::TimeoutLayer;

use crate::config::LlmConfig;
use crate::handlers;

/// Shared application state.
///
/// Immutable vendor endpoint config only. Credentials and game state are
/// per-request; nothing here outlives or crosses a request.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmConfig,
}

pub fn build_app(state: AppState, request_timeout_secs: u64) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/move", post(handlers::suggest_move))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_secs),
        ))
        .with_state(state)
}
