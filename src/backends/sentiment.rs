//! Sentiment/NLU backend client

use crate::config::BackendConfig;
use crate::error::{Result, ServiceError};
use crate::models::{KeywordSentiment, Sentiment, SentimentAnalysis, SentimentLabel};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub struct SentimentClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl SentimentClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: super::build_http_client(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Analyze document-level sentiment plus scored keywords.
    pub async fn analyze(&self, text: &str) -> Result<SentimentAnalysis> {
        let url = format!("{}/v1/analyze", self.endpoint);

        let request = AnalyzeRequest {
            text: text.to_string(),
            features: Features {
                sentiment: serde_json::json!({}),
                keywords: KeywordOptions {
                    sentiment: true,
                    limit: 5,
                },
            },
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
                "sentiment analysis returned {}",
                response.status()
            )));
        }

        let analysis: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::MalformedResponse(format!("sentiment payload: {}", e)))?;

        let document = analysis.sentiment.document.ok_or_else(|| {
            ServiceError::MalformedResponse("sentiment payload missing document block".to_string())
        })?;

        Ok(SentimentAnalysis {
            sentiment: Sentiment {
                label: SentimentLabel::parse(&document.label),
                score: document.score,
            },
            keywords: analysis
                .keywords
                .into_iter()
                .map(|kw| KeywordSentiment {
                    text: kw.text,
                    sentiment_score: kw.sentiment.map(|s| s.score).unwrap_or(0.0),
                })
                .collect(),
        })
    }
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest {
    text: String,
    features: Features,
}

#[derive(Debug, Serialize)]
struct Features {
    sentiment: serde_json::Value,
    keywords: KeywordOptions,
}

#[derive(Debug, Serialize)]
struct KeywordOptions {
    sentiment: bool,
    limit: u32,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    sentiment: DocumentSentiment,
    #[serde(default)]
    keywords: Vec<KeywordEntry>,
}

#[derive(Debug, Deserialize)]
struct DocumentSentiment {
    document: Option<LabeledScore>,
}

#[derive(Debug, Deserialize)]
struct LabeledScore {
    label: String,
    score: f32,
}

#[derive(Debug, Deserialize)]
struct KeywordEntry {
    text: String,
    sentiment: Option<KeywordScore>,
}

#[derive(Debug, Deserialize)]
struct KeywordScore {
    score: f32,
}
