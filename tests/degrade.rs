//! End-to-end degrade behavior against misbehaving backends
//!
//! Spins up a throwaway HTTP server that fails every request and checks
//! that each configured backend degrades to its synthetic response instead
//! of surfacing an error.

use axum::{http::StatusCode, Router};
use financial_insight_orchestrator::config::{BackendConfig, BackendRegistry};
use financial_insight_orchestrator::models::{BackendKind, SentimentLabel};
use financial_insight_orchestrator::orchestrator::InsightOrchestrator;
use financial_insight_orchestrator::synthetic::{SyntheticCatalog, CONVERSATIONAL_REPLIES};

/// Start a server that answers 500 to everything; returns its base URL.
async fn spawn_failing_backend() -> String {
    let app = Router::new().fallback(|| async { StatusCode::INTERNAL_SERVER_ERROR });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

fn registry_with(kind: BackendKind, endpoint: &str) -> BackendRegistry {
    BackendRegistry::new(vec![BackendConfig::new(kind, "test-key", endpoint)])
}

#[tokio::test]
async fn document_backend_500_yields_synthetic_fallback() {
    let endpoint = spawn_failing_backend().await;
    let registry = registry_with(BackendKind::DocumentAnalysis, &endpoint);
    let orchestrator = InsightOrchestrator::new(registry);

    let result = orchestrator
        .analyze_document("October statement: rent, groceries, savings.")
        .await;

    assert_eq!(result, SyntheticCatalog::new().document_insights());
}

#[tokio::test]
async fn conversational_backend_500_yields_canned_reply_with_context() {
    let endpoint = spawn_failing_backend().await;
    let registry = registry_with(BackendKind::Conversational, &endpoint);
    let orchestrator = InsightOrchestrator::new(registry);

    let reply = orchestrator.chat("hello", None).await;

    assert!(CONVERSATIONAL_REPLIES.contains(&reply.text.as_str()));
    assert!(reply.context.is_active());
}

#[tokio::test]
async fn sentiment_backend_500_yields_neutral_fallback() {
    let endpoint = spawn_failing_backend().await;
    let registry = registry_with(BackendKind::Sentiment, &endpoint);
    let orchestrator = InsightOrchestrator::new(registry);

    let analysis = orchestrator.analyze_sentiment("review my budget").await;

    assert_eq!(analysis.sentiment.label, SentimentLabel::Neutral);
    assert_eq!(analysis.keywords.len(), 2);
}

#[tokio::test]
async fn unreachable_generative_backend_yields_synthetic_recommendation() {
    // Nothing listens on port 9: connection refused, not a 500.
    let registry = registry_with(BackendKind::Generative, "http://127.0.0.1:9");
    let orchestrator = InsightOrchestrator::new(registry);

    let text = orchestrator.generate("deep analysis", None).await;

    assert_eq!(text, SyntheticCatalog::new().generated_recommendation());
}

#[tokio::test]
async fn failed_turn_keeps_the_session_handle() {
    let endpoint = spawn_failing_backend().await;
    let registry = registry_with(BackendKind::Conversational, &endpoint);
    let orchestrator = InsightOrchestrator::new(registry);

    let first = orchestrator.chat("hello", None).await;
    let second = orchestrator.chat("still there?", Some(first.context.clone())).await;

    assert_eq!(first.context, second.context);
}

#[tokio::test]
async fn offline_review_scenario_combines_reply_and_sentiment() {
    let orchestrator = InsightOrchestrator::new(BackendRegistry::offline());

    let reply = orchestrator.chat("Can you review my spending?", None).await;

    let base = reply.text.split("\n\n").next().unwrap();
    assert!(CONVERSATIONAL_REPLIES.contains(&base));
    assert!(reply.text.contains("Sentiment Analysis: "));
}
