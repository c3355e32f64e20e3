pub mod deepseek;
pub mod models;

use deepseek::DeepSeekProvider;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::config::AppConfig;
use models::{ChatOptions, ProviderMessage};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network Error: {0}")]
    Network(String),
    #[error("API Error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Invalid Response Shape")]
    InvalidResponse,
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn chat(
        &self,
        messages: &[ProviderMessage],
        options: ChatOptions,
    ) -> Result<String, ProviderError>;
}

/// Builds the configured upstream provider for the relay endpoint.
pub struct ProviderFactory;

impl ProviderFactory {
    pub fn create_default(config: &AppConfig) -> Arc<dyn ChatProvider> {
        Arc::new(DeepSeekProvider::new(
            config.ai.api_key.clone(),
            config.ai.api_base.clone(),
            config.ai.default_model.clone(),
        ))
    }
}
