//! Client half of the consultant chat: turns the local conversation into a
//! relay request and maps the reply back into the local message model.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chat::message::{Message, MessageRole};
use crate::provider::models::ProviderMessage;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Network Error: {0}")]
    Network(String),
    #[error("Relay Error {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Invalid Relay Response")]
    InvalidResponse,
}

/// Wire body for `POST /api/ai/chat`. Field names are camelCase to match
/// the endpoint's JSON contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayPayload {
    pub messages: Vec<ProviderMessage>,
    pub system_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelayReply {
    response: String,
}

#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    error: String,
}

/// Projects the local history onto the wire payload. Only user and
/// assistant turns are forwarded; system-notification entries are dropped
/// because the system prompt travels in its own field and must not be
/// duplicated into the dialogue.
pub fn build_payload(
    messages: &[Message],
    system_prompt: &str,
    model: Option<&str>,
) -> RelayPayload {
    let messages = messages
        .iter()
        .filter(|m| matches!(m.role, MessageRole::User | MessageRole::Assistant))
        .map(|m| m.to_provider_message())
        .collect();

    RelayPayload {
        messages,
        system_prompt: system_prompt.to_string(),
        model: model.map(str::to_string),
    }
}

pub struct ConsultantClient {
    client: Client,
    base_url: String,
}

impl ConsultantClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Sends the conversation through the relay endpoint and returns the
    /// reply as a new assistant message. One outbound call, no retry; a
    /// failed send is reported to the caller, not retried.
    pub async fn send(
        &self,
        messages: &[Message],
        system_prompt: &str,
    ) -> Result<Message, RelayError> {
        let payload = build_payload(messages, system_prompt, None);

        let response = self
            .client
            .post(format!("{}/api/ai/chat", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = match response.json::<RelayErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => "咨询服务请求失败".to_string(),
            };
            return Err(RelayError::Status { status, message });
        }

        let reply: RelayReply = response
            .json()
            .await
            .map_err(|_| RelayError::InvalidResponse)?;

        Ok(Message::assistant(reply.response))
    }
}
