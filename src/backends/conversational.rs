//! Conversational backend client
//!
//! Session-based assistant API: a session is created once per conversation,
//! then each turn posts a message against that session.

use crate::config::BackendConfig;
use crate::error::{Result, ServiceError};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

pub struct ConversationalClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl ConversationalClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            client: super::build_http_client(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Create a remote conversation session and return its handle.
    pub async fn create_session(&self) -> Result<String> {
        let url = format!("{}/v2/sessions", self.endpoint);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ServiceError::TransportFailure(format!(
                "session creation returned {}",
                response.status()
            )));
        }

        let session: SessionResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::MalformedResponse(format!("session payload: {}", e)))?;

        info!(session_id = %session.session_id, "Conversational session created");
        Ok(session.session_id)
    }

    /// Send one user turn against an existing session.
    pub async fn send_message(&self, session_handle: &str, message: &str) -> Result<String> {
        let url = format!("{}/v2/sessions/{}/message", self.endpoint, session_handle);

        let request = MessageRequest {
            input: MessageInput {
                message_type: "text",
                text: message.to_string(),
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
                "message turn returned {}",
                response.status()
            )));
        }

        let reply: MessageResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::MalformedResponse(format!("message payload: {}", e)))?;

        let text = reply
            .output
            .generic
            .into_iter()
            .find_map(|item| item.text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                ServiceError::MalformedResponse("assistant reply carried no text".to_string())
            })?;

        Ok(text)
    }
}

#[derive(Debug, Deserialize)]
struct SessionResponse {
    session_id: String,
}

#[derive(Debug, Serialize)]
struct MessageRequest {
    input: MessageInput,
}

#[derive(Debug, Serialize)]
struct MessageInput {
    message_type: &'static str,
    text: String,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    output: MessageOutput,
}

#[derive(Debug, Deserialize)]
struct MessageOutput {
    #[serde(default)]
    generic: Vec<GenericItem>,
}

#[derive(Debug, Deserialize)]
struct GenericItem {
    #[serde(default)]
    text: Option<String>,
}
