// RecoMate Server — HTTP transport
//
// Thin axum layer over the engine. The wire contract:
//   GET  /          → liveness string
//   POST /chat      → {response, chat_history, is_translating}
//   POST /feedback  → {status} | {error}
// Malformed JSON is a 400 with a body the frontend understands; any
// engine error surfaces as a 500 carrying the error text in `details`.

use crate::engine::{Engine, FeedbackOutcome};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::error;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

// ── Wire types ─────────────────────────────────────────────────────────────

fn default_language() -> String {
    "en".to_string()
}

fn default_user() -> String {
    "anonymous".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_user")]
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default = "default_user")]
    pub user_id: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub rating: String,
}

// ── Router ─────────────────────────────────────────────────────────────────

pub fn router(engine: Arc<Engine>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(home))
        .route("/chat", post(chat))
        .route("/feedback", post(feedback))
        .layer(cors)
        .with_state(engine)
}

// ── Handlers ───────────────────────────────────────────────────────────────

async fn home() -> &'static str {
    "Welcome to RecoMate!"
}

async fn chat(
    State(engine): State<Arc<Engine>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid JSON format", "is_translating": false})),
        )
            .into_response();
    };

    match engine.handle_chat(&req.message, &req.language, &req.user_id).await {
        Ok(outcome) => (
            StatusCode::OK,
            Json(json!({
                "response": outcome.response,
                "chat_history": outcome.chat_history,
                "is_translating": outcome.is_translating,
            })),
        )
            .into_response(),
        Err(e) => {
            error!("[server] /chat failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal Server Error",
                    "details": e.to_string(),
                    "is_translating": false,
                })),
            )
                .into_response()
        }
    }
}

async fn feedback(
    State(engine): State<Arc<Engine>>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid JSON format"})),
        )
            .into_response();
    };

    match engine
        .handle_feedback(&req.user_id, &req.recommendation, &req.rating)
        .await
    {
        Ok(FeedbackOutcome::Recorded) => {
            (StatusCode::OK, Json(json!({"status": "Feedback recorded"}))).into_response()
        }
        Ok(FeedbackOutcome::InvalidFormat) => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Invalid recommendation format"})),
        )
            .into_response(),
        Err(e) => {
            error!("[server] /feedback failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Internal Server Error", "details": e.to_string()})),
            )
                .into_response()
        }
    }
}
