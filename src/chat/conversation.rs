use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::message::Message;
use crate::prompts;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<Message>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Conversation {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            created_at: Utc::now(),
            messages: Vec::new(),
            tags: Vec::new(),
        }
    }
}

/// Session-local message store. Holds the active conversation and the
/// system prompt currently in effect; messages are append-only and kept in
/// chronological order because they are replayed as dialogue history.
pub struct ConversationStore {
    conversation: Conversation,
    system_prompt: String,
}

impl ConversationStore {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            conversation: Conversation::new(title),
            system_prompt: prompts::resolve_prompt("DEFAULT").to_string(),
        }
    }

    /// Creates a store seeded from a scenario template. Unknown keys fall
    /// back to the default scenario, same as `prompts::resolve`.
    pub fn with_template(title: impl Into<String>, key: &str) -> Self {
        let mut store = Self::new(title);
        store.switch_template(key);
        store
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[Message] {
        &self.conversation.messages
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn append(&mut self, message: Message) -> &Message {
        self.conversation.messages.push(message);
        self.conversation.messages.last().unwrap()
    }

    /// Switches the active consultation scenario: replaces the system
    /// prompt, tags the conversation with the scenario title, and appends a
    /// system-notification message announcing the switch.
    pub fn switch_template(&mut self, key: &str) -> &Message {
        let template = prompts::resolve(key);
        self.system_prompt = template.system_prompt.to_string();

        let tag = template.title.to_string();
        if !self.conversation.tags.contains(&tag) {
            self.conversation.tags.push(tag);
        }

        self.append(Message::notification(format!(
            "已切换到「{}」咨询场景",
            template.title
        )))
    }
}
