//! Move suggestion HTTP handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::warn;

use crate::llm::{self, LLMError};
use crate::response;
use crate::server::AppState;

/// Fields are optional at the wire so absence is our decision to make,
/// not a deserialization rejection.
#[derive(Deserialize)]
pub struct SuggestMoveRequest {
    pgn: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
}

/// POST /api/move
///
/// Validation happens before any provider is constructed: a request
/// missing a field never reaches the network.
pub async fn suggest_move(
    State(state): State<AppState>,
    Json(req): Json<SuggestMoveRequest>,
) -> Response {
    let (Some(pgn), Some(model)) = (non_empty(req.pgn), non_empty(req.model)) else {
        return response::bad_request("Missing PGN or model");
    };
    let Some(api_key) = non_empty(req.api_key) else {
        return response::bad_request("Missing API Key");
    };

    match llm::suggest_move(&pgn, &model, &api_key, &state.llm).await {
        Ok(suggestion) => (StatusCode::OK, Json(suggestion)).into_response(),
        Err(LLMError::UnsupportedModel(model)) => {
            warn!(%model, "no provider for model");
            response::bad_request("Unsupported model")
        }
        Err(e) => {
            warn!(error = %e, %model, "move suggestion failed");
            response::internal_error(e.to_string())
        }
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::LlmConfig;
    use crate::server::{AppState, build_app};

    fn app() -> Router {
        build_app(
            AppState {
                llm: LlmConfig::default(),
            },
            30,
        )
    }

    fn app_with(llm: LlmConfig) -> Router {
        build_app(AppState { llm }, 30)
    }

    async fn post_move(app: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::post("/api/move")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn missing_pgn_is_rejected() {
        let (status, json) = post_move(
            app(),
            serde_json::json!({"model": "gpt-4o", "api_key": "sk-test"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Missing PGN or model");
    }

    #[tokio::test]
    async fn missing_model_is_rejected() {
        let (status, json) = post_move(
            app(),
            serde_json::json!({"pgn": "1. e4", "api_key": "sk-test"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Missing PGN or model");
    }

    #[tokio::test]
    async fn empty_pgn_counts_as_missing() {
        let (status, json) = post_move(
            app(),
            serde_json::json!({"pgn": "", "model": "gpt-4o", "api_key": "sk-test"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Missing PGN or model");
    }

    #[tokio::test]
    async fn missing_api_key_is_rejected() {
        let (status, json) = post_move(
            app(),
            serde_json::json!({"pgn": "1. e4", "model": "gpt-4o"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Missing API Key");
    }

    #[tokio::test]
    async fn unknown_model_is_rejected() {
        let (status, json) = post_move(
            app(),
            serde_json::json!({"pgn": "1. e4", "model": "llama-3", "api_key": "k"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Unsupported model");
    }

    #[tokio::test]
    async fn provider_failure_maps_to_500() {
        // Route a claude model at a dead local port; the connect error
        // must surface as a 500 with a message, not a crash.
        let llm = LlmConfig {
            anthropic_base_url: "http://127.0.0.1:1".to_string(),
            ..LlmConfig::default()
        };
        let (status, json) = post_move(
            app_with(llm),
            serde_json::json!({"pgn": "1. e4", "model": "claude-3", "api_key": "sk-ant"}),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].as_str().unwrap().contains("HTTP request failed"));
    }

    #[tokio::test]
    async fn health_endpoint_responds() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn index_serves_html() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(content_type.starts_with("text/html"));
    }
}
