//! Generative backend client
//!
//! Free-text recommendation generation against a completion-style API.

use crate::config::BackendConfig;
use crate::error::{Result, ServiceError};
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub struct GenerativeClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GenerativeClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: super::build_http_client(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
        }
    }

    /// Generate a free-text recommendation for a prompt.
    pub async fn generate(&self, prompt: &str, model_type: &str) -> Result<String> {
        let request = GenerateRequest {
            model: model_type.to_string(),
            prompt: prompt.to_string(),
            max_tokens: 500,
            temperature: 0.3,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ServiceError::TransportFailure(format!(
                "generation returned {}",
                response.status()
            )));
        }

        let completion: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::MalformedResponse(format!("generation payload: {}", e)))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| {
                ServiceError::MalformedResponse("generation carried no text".to_string())
            })?;

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    model: String,
    prompt: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest {
            model: "financial-analysis".to_string(),
            prompt: "Review my budget".to_string(),
            max_tokens: 500,
            temperature: 0.3,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("financial-analysis"));
        assert!(json.contains("\"max_tokens\":500"));
    }

    #[test]
    fn test_first_choice_wins() {
        let payload = r#"{"choices":[{"text":"first"},{"text":"second"}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.choices[0].text, "first");
    }

    #[test]
    fn test_empty_choices_parse() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }
}
