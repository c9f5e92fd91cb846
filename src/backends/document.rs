//! Document-analysis backend client

use crate::config::BackendConfig;
use crate::error::{Result, ServiceError};
use crate::models::{InsightResult, Sentiment, SentimentLabel};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub struct DocumentClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl DocumentClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: super::build_http_client(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Run full document analysis: Q&A insights, sentiment, and a summary.
    pub async fn analyze(&self, text: &str) -> Result<InsightResult> {
        let url = format!("{}/v1/documents/analyze", self.endpoint);

        let request = DocumentRequest {
            text: text.to_string(),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ServiceError::TransportFailure(format!(
                "document analysis returned {}",
                response.status()
            )));
        }

        let analysis: DocumentResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::MalformedResponse(format!("document payload: {}", e)))?;

        // An empty analysis breaks the non-empty invariant downstream;
        // report it as malformed so the invoker substitutes the fallback.
        if analysis.insights.is_empty() || analysis.summary.trim().is_empty() {
            return Err(ServiceError::MalformedResponse(
                "document analysis carried no insights or summary".to_string(),
            ));
        }

        Ok(InsightResult {
            insights: analysis.insights,
            sentiment: analysis
                .sentiment
                .into_iter()
                .map(|entry| Sentiment {
                    label: SentimentLabel::parse(&entry.label),
                    score: entry.score,
                })
                .collect(),
            summary: analysis.summary,
        })
    }
}

#[derive(Debug, Serialize)]
struct DocumentRequest {
    text: String,
}

#[derive(Debug, Deserialize)]
struct DocumentResponse {
    #[serde(default)]
    insights: Vec<String>,
    #[serde(default)]
    sentiment: Vec<LabeledScore>,
    #[serde(default)]
    summary: String,
}

#[derive(Debug, Deserialize)]
struct LabeledScore {
    label: String,
    score: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_response_parsing() {
        let payload = r#"{
            "insights": ["Q: rent?\nA: $1,500"],
            "sentiment": [{"label": "POSITIVE", "score": 0.85}],
            "summary": "Healthy statement."
        }"#;

        let parsed: DocumentResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.insights.len(), 1);
        assert_eq!(parsed.sentiment[0].label, "POSITIVE");
        assert_eq!(parsed.summary, "Healthy statement.");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let parsed: DocumentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.insights.is_empty());
        assert!(parsed.summary.is_empty());
    }
}
