pub mod conversation;
pub mod message;

pub use conversation::{Conversation, ConversationStore};
pub use message::{Message, MessageRole};
