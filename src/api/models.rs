use serde::{Deserialize, Serialize};

/// Body of `POST /api/ai/chat`. `messages` stays a raw JSON value here so
/// the handler can reject a missing or non-array field with the endpoint's
/// own localized 400 body instead of the framework's deserialize error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRelayRequest {
    pub messages: Option<serde_json::Value>,
    pub model: Option<String>,
    pub system_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatRelayResponse {
    pub response: String,
}
