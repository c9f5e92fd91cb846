//! Core data models for the insight orchestration layer

use serde::{Deserialize, Serialize};
use std::fmt;

//
// ================= Backend Kind =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    Conversational,
    Sentiment,
    Generative,
    DocumentAnalysis,
}

impl BackendKind {
    pub const ALL: [BackendKind; 4] = [
        BackendKind::Conversational,
        BackendKind::Sentiment,
        BackendKind::Generative,
        BackendKind::DocumentAnalysis,
    ];
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BackendKind::Conversational => "conversational",
            BackendKind::Sentiment => "sentiment",
            BackendKind::Generative => "generative",
            BackendKind::DocumentAnalysis => "document_analysis",
        };
        write!(f, "{}", s)
    }
}

//
// ================= Conversation =================
//

/// Opaque carrier of session continuity across chat turns.
///
/// Owned by the caller: the orchestration layer never stores it, a
/// (possibly new) context is handed back on every call. Discarding it
/// ends the conversation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversationContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_handle: Option<String>,
}

impl ConversationContext {
    /// A context with no established session yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_handle(handle: impl Into<String>) -> Self {
        Self {
            session_handle: Some(handle.into()),
        }
    }

    /// True once a session handle has been obtained (remote or offline).
    pub fn is_active(&self) -> bool {
        self.session_handle.is_some()
    }
}

/// Reply for a single chat turn. `text` is always non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    pub context: ConversationContext,
}

//
// ================= Sentiment =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Parse a backend label, tolerating case variants ("POSITIVE", "positive").
    /// Unknown labels map to Neutral rather than failing the whole response.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "positive" => SentimentLabel::Positive,
            "negative" => SentimentLabel::Negative,
            _ => SentimentLabel::Neutral,
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sentiment {
    pub label: SentimentLabel,
    /// Confidence in [0, 1].
    pub score: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordSentiment {
    pub text: String,
    pub sentiment_score: f32,
}

/// Result of sentiment/NLU analysis on a piece of text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SentimentAnalysis {
    pub sentiment: Sentiment,
    pub keywords: Vec<KeywordSentiment>,
}

//
// ================= Document Insights =================
//

/// Structured output of document analysis.
/// Invariant: never empty — the synthetic fallback is substituted instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightResult {
    pub insights: Vec<String>,
    pub sentiment: Vec<Sentiment>,
    pub summary: String,
}
