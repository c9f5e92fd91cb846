//! REST API server for the insight orchestration layer
//!
//! Exposes chat, analysis, generation, and health scoring over HTTP for
//! the dashboard UI.

use axum::{extract::State, http::StatusCode, routing::get, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::health;
use crate::models::ConversationContext;
use crate::orchestrator::InsightOrchestrator;

/// =============================
/// Request Models
/// =============================

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub context: Option<ConversationContext>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default)]
    pub model_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HealthScoreRequest {
    pub income: f64,
    #[serde(default)]
    pub expenses: HashMap<String, f64>,
    pub savings: f64,
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).ok(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub orchestrator: Arc<InsightOrchestrator>,
}

/// =============================
/// Handlers
/// =============================

async fn health_endpoint() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn chat_handler(
    State(state): State<ApiState>,
    Json(req): Json<ChatRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    if req.message.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Message must not be empty".into())),
        );
    }

    info!("Received chat message");
    let reply = state.orchestrator.chat(&req.message, req.context).await;

    (
        StatusCode::OK,
        Json(ApiResponse::success(serde_json::json!({
            "reply": reply.text,
            "context": reply.context,
        }))),
    )
}

async fn sentiment_handler(
    State(state): State<ApiState>,
    Json(req): Json<AnalyzeRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    let analysis = state.orchestrator.analyze_sentiment(&req.text).await;
    (StatusCode::OK, Json(ApiResponse::success(analysis)))
}

async fn document_handler(
    State(state): State<ApiState>,
    Json(req): Json<AnalyzeRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    let result = state.orchestrator.analyze_document(&req.text).await;
    (StatusCode::OK, Json(ApiResponse::success(result)))
}

async fn generate_handler(
    State(state): State<ApiState>,
    Json(req): Json<GenerateRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    let text = state
        .orchestrator
        .generate(&req.prompt, req.model_type.as_deref())
        .await;

    (
        StatusCode::OK,
        Json(ApiResponse::success(serde_json::json!({ "text": text }))),
    )
}

async fn health_score_handler(
    Json(req): Json<HealthScoreRequest>,
) -> (StatusCode, Json<ApiResponse>) {
    if req.income < 0.0 || req.savings < 0.0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "Income and savings must be non-negative".into(),
            )),
        );
    }

    let score = health::score(req.income, &req.expenses, req.savings);
    (
        StatusCode::OK,
        Json(ApiResponse::success(serde_json::json!({ "score": score }))),
    )
}

/// =============================
/// Router
/// =============================

pub fn create_router(orchestrator: Arc<InsightOrchestrator>) -> Router {
    let state = ApiState { orchestrator };

    Router::new()
        .route("/health", get(health_endpoint))
        .route("/api/chat", post(chat_handler))
        .route("/api/analyze/sentiment", post(sentiment_handler))
        .route("/api/analyze/document", post(document_handler))
        .route("/api/generate", post(generate_handler))
        .route("/api/health-score", post(health_score_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    orchestrator: Arc<InsightOrchestrator>,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(orchestrator);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
