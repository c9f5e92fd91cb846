//! Financial insight composition
//!
//! The public face of the orchestration layer: combines the conversational
//! backend, the sentiment enrichment, and the tiered document analysis into
//! the operations the assistant UI calls. Every operation returns a
//! well-formed value; degrades are logged, never surfaced.

use crate::config::BackendRegistry;
use crate::invoker::Invoker;
use crate::local::LocalSentimentAnalyzer;
use crate::models::{
    BackendKind, ChatReply, ConversationContext, InsightResult, SentimentAnalysis,
};
use crate::session::SessionManager;
use crate::synthetic::SyntheticCatalog;
use std::sync::Arc;
use tracing::warn;

/// Messages containing any of these (case-insensitive) get a sentiment
/// enrichment appended to the chat reply.
const ANALYSIS_TRIGGERS: &[&str] = &["analyze", "sentiment", "review"];

/// Model identifier sent to the generative backend when the caller does not
/// pick one.
pub const DEFAULT_MODEL_TYPE: &str = "financial-analysis";

pub struct InsightOrchestrator {
    invoker: Arc<Invoker>,
    sessions: SessionManager,
    local: Option<LocalSentimentAnalyzer>,
}

impl InsightOrchestrator {
    /// Standard construction: random fallback selection, local analyzer
    /// loaded if possible.
    pub fn new(registry: BackendRegistry) -> Self {
        Self::with_catalog(registry, SyntheticCatalog::new())
    }

    /// Construction with an explicit catalog, used by tests to pin the
    /// fallback selection sequence.
    pub fn with_catalog(registry: BackendRegistry, catalog: SyntheticCatalog) -> Self {
        let local = match LocalSentimentAnalyzer::load() {
            Ok(analyzer) => Some(analyzer),
            Err(error) => {
                warn!(error = %error, "Local sentiment analyzer unavailable");
                None
            }
        };

        let invoker = Arc::new(Invoker::new(registry, catalog));
        Self {
            sessions: SessionManager::new(Arc::clone(&invoker)),
            invoker,
            local,
        }
    }

    /// One chat turn. The returned context carries the session forward;
    /// the caller passes it back on the next turn and discards it to end
    /// the conversation.
    pub async fn chat(&self, message: &str, context: Option<ConversationContext>) -> ChatReply {
        let context = context.unwrap_or_default();
        let mut reply = self.sessions.send_message(message, context).await;

        if wants_analysis(message) {
            let analysis = self.invoker.sentiment(message).await;
            reply.text.push_str(&format!(
                "\n\nSentiment Analysis: {}",
                analysis.sentiment.label
            ));
        }

        reply
    }

    /// Sentiment/NLU analysis of a piece of text.
    pub async fn analyze_sentiment(&self, text: &str) -> SentimentAnalysis {
        self.invoker.sentiment(text).await
    }

    /// Document analysis with three-tier degradation: configured remote
    /// backend (itself degrading to synthetic on failure), then the local
    /// analyzer on a truncated prefix, then the fully synthetic result.
    pub async fn analyze_document(&self, text: &str) -> InsightResult {
        if self
            .invoker
            .registry()
            .is_configured(BackendKind::DocumentAnalysis)
        {
            return self.invoker.document(text).await;
        }

        if let Some(local) = &self.local {
            // classify() caps its input at the analyzer's prefix window
            let sentiment = local.classify(text);
            return self.invoker.catalog().document_insights_with(sentiment);
        }

        self.invoker.catalog().document_insights()
    }

    /// Free-text financial recommendation.
    pub async fn generate(&self, prompt: &str, model_type: Option<&str>) -> String {
        let model_type = model_type.unwrap_or(DEFAULT_MODEL_TYPE);
        self.invoker.generate(prompt, model_type).await
    }
}

fn wants_analysis(message: &str) -> bool {
    let lowered = message.to_lowercase();
    ANALYSIS_TRIGGERS
        .iter()
        .any(|trigger| lowered.contains(trigger))
}
