use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::provider::models::{ProviderMessage, ProviderRole};

/// Role of a local chat turn. `SystemNotification` is a local-only role
/// for in-conversation notices (e.g. a scenario switch); it is never sent
/// to the provider as dialogue history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageRole {
    User,
    Assistant,
    SystemNotification,
}

impl MessageRole {
    pub fn to_provider(self) -> ProviderRole {
        match self {
            MessageRole::User => ProviderRole::User,
            MessageRole::Assistant => ProviderRole::Assistant,
            MessageRole::SystemNotification => ProviderRole::System,
        }
    }

    pub fn from_provider(role: ProviderRole) -> Self {
        match role {
            ProviderRole::User => MessageRole::User,
            ProviderRole::Assistant => MessageRole::Assistant,
            ProviderRole::System => MessageRole::SystemNotification,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn notification(content: impl Into<String>) -> Self {
        Self::new(MessageRole::SystemNotification, content)
    }

    pub fn to_provider_message(&self) -> ProviderMessage {
        ProviderMessage {
            role: self.role.to_provider(),
            content: self.content.clone(),
            timestamp: Some(self.timestamp),
        }
    }

    /// Builds a local message from a provider-facing one. A fresh id is
    /// generated when none is supplied; a missing timestamp defaults to now.
    pub fn from_provider_message(msg: ProviderMessage, id: Option<Uuid>) -> Self {
        Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            role: MessageRole::from_provider(msg.role),
            content: msg.content,
            timestamp: msg.timestamp.unwrap_or_else(Utc::now),
        }
    }
}
