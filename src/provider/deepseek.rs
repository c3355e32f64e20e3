use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::provider::{
    models::{ChatOptions, ProviderMessage, ProviderRole},
    ChatProvider, ProviderError,
};

// Sampling parameters are fixed server-side and not caller-configurable.
const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 2048;

pub struct DeepSeekProvider {
    client: Client,
    api_key: String,
    base_url: String,
    default_model: String,
}

impl DeepSeekProvider {
    pub fn new(api_key: String, base_url: String, default_model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            default_model,
        }
    }
}

#[async_trait]
impl ChatProvider for DeepSeekProvider {
    fn name(&self) -> &str {
        "deepseek"
    }

    async fn chat(
        &self,
        messages: &[ProviderMessage],
        options: ChatOptions,
    ) -> Result<String, ProviderError> {
        let model = options.model.as_deref().unwrap_or(&self.default_model);

        let mut final_messages: Vec<ProviderMessage> = messages.to_vec();
        if let Some(system) = &options.system_prompt {
            final_messages.insert(
                0,
                ProviderMessage {
                    role: ProviderRole::System,
                    content: system.clone(),
                    timestamp: None,
                },
            );
        }

        let body = json!({
            "model": model,
            "messages": final_messages,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body: text });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(ProviderError::InvalidResponse)?
            .to_string();

        Ok(content)
    }
}
