//! Fallback-aware backend invocation
//!
//! Wraps every backend call with the degrade policy: unconfigured backends
//! are skipped without any network I/O, failed calls are caught at this
//! boundary, and both paths produce the same kind-specific synthetic
//! response. Callers of the public methods never see an error.
//!
//! Treating "unconfigured" and "failed" identically lets the rest of the
//! system run in fully-live, partially-live, or fully-offline mode without
//! branching on environment at each call site.

use crate::backends::{ConversationalClient, DocumentClient, GenerativeClient, SentimentClient};
use crate::config::BackendRegistry;
use crate::error::Result;
use crate::models::{BackendKind, InsightResult, SentimentAnalysis};
use crate::synthetic::SyntheticCatalog;
use std::future::Future;
use tracing::{debug, warn};

pub struct Invoker {
    registry: BackendRegistry,
    catalog: SyntheticCatalog,
    conversational: Option<ConversationalClient>,
    sentiment: Option<SentimentClient>,
    document: Option<DocumentClient>,
    generative: Option<GenerativeClient>,
}

impl Invoker {
    /// Build clients for every configured backend. Unconfigured kinds get
    /// no client at all, so their synthetic path cannot touch the network.
    pub fn new(registry: BackendRegistry, catalog: SyntheticCatalog) -> Self {
        let conversational = registry
            .config_for(BackendKind::Conversational)
            .map(ConversationalClient::new);
        let sentiment = registry
            .config_for(BackendKind::Sentiment)
            .map(SentimentClient::new);
        let document = registry
            .config_for(BackendKind::DocumentAnalysis)
            .map(DocumentClient::new);
        let generative = registry
            .config_for(BackendKind::Generative)
            .map(GenerativeClient::new);

        Self {
            registry,
            catalog,
            conversational,
            sentiment,
            document,
            generative,
        }
    }

    pub fn registry(&self) -> &BackendRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &SyntheticCatalog {
        &self.catalog
    }

    /// The conversational client, if configured. Session establishment has
    /// its own degrade path and lives in the session manager.
    pub(crate) fn conversational(&self) -> Option<&ConversationalClient> {
        self.conversational.as_ref()
    }

    /// Sentiment analysis with degrade-to-synthetic.
    pub async fn sentiment(&self, text: &str) -> SentimentAnalysis {
        self.attempt_or_degrade(
            BackendKind::Sentiment,
            self.sentiment.as_ref().map(|client| client.analyze(text)),
            |catalog| catalog.sentiment_analysis(),
        )
        .await
    }

    /// Document analysis with degrade-to-synthetic.
    pub async fn document(&self, text: &str) -> InsightResult {
        self.attempt_or_degrade(
            BackendKind::DocumentAnalysis,
            self.document.as_ref().map(|client| client.analyze(text)),
            |catalog| catalog.document_insights(),
        )
        .await
    }

    /// Free-text generation with degrade-to-synthetic.
    pub async fn generate(&self, prompt: &str, model_type: &str) -> String {
        self.attempt_or_degrade(
            BackendKind::Generative,
            self.generative
                .as_ref()
                .map(|client| client.generate(prompt, model_type)),
            |catalog| catalog.generated_recommendation(),
        )
        .await
    }

    /// The degrade policy itself: no client means no I/O, a failed attempt
    /// is logged and replaced, and the caller always gets a value.
    async fn attempt_or_degrade<T, F>(
        &self,
        kind: BackendKind,
        attempt: Option<F>,
        fallback: impl FnOnce(&SyntheticCatalog) -> T,
    ) -> T
    where
        F: Future<Output = Result<T>>,
    {
        let Some(attempt) = attempt else {
            debug!(backend = %kind, "Backend not configured, using synthetic response");
            return fallback(&self.catalog);
        };

        match attempt.await {
            Ok(value) => value,
            Err(error) => {
                warn!(
                    backend = %kind,
                    error = %error,
                    "Backend call failed, degrading to synthetic response"
                );
                fallback(&self.catalog)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SentimentLabel;
    use crate::synthetic::CONVERSATIONAL_REPLIES;

    fn offline_invoker() -> Invoker {
        Invoker::new(BackendRegistry::offline(), SyntheticCatalog::new())
    }

    #[tokio::test]
    async fn test_unconfigured_sentiment_is_synthetic() {
        let invoker = offline_invoker();
        let analysis = invoker.sentiment("I feel great about my savings").await;

        assert_eq!(analysis.sentiment.label, SentimentLabel::Neutral);
        assert_eq!(analysis.keywords.len(), 2);
    }

    #[tokio::test]
    async fn test_unconfigured_document_is_synthetic() {
        let invoker = offline_invoker();
        let result = invoker.document("statement text").await;

        assert_eq!(result, SyntheticCatalog::new().document_insights());
    }

    #[tokio::test]
    async fn test_unconfigured_generation_is_synthetic() {
        let invoker = offline_invoker();
        let text = invoker.generate("analyze my finances", "financial-analysis").await;

        assert!(text.starts_with("AI Analysis:"));
    }

    #[tokio::test]
    async fn test_offline_invoker_has_no_conversational_client() {
        let invoker = offline_invoker();
        assert!(invoker.conversational().is_none());
        assert!(CONVERSATIONAL_REPLIES.contains(&invoker.catalog().conversational_reply().as_str()));
    }
}
