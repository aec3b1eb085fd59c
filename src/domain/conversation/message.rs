//! Chat messages and the append-only log the widget renders from.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MessageId, Timestamp};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Text typed by the visitor.
    User,
    /// Text produced by the widget (LLM reply or scripted prompt).
    Assistant,
}

/// A finalized chat turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    id: MessageId,
    role: MessageRole,
    content: String,
    created_at: Timestamp,
}

impl ChatMessage {
    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }
}

/// Ordered, append-only record of a session's turns.
///
/// Messages are never edited or removed; the whole log is dropped with the
/// session that owns it.
#[derive(Debug, Clone)]
pub struct MessageLog {
    messages: Vec<ChatMessage>,
    next_id: MessageId,
}

impl MessageLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: MessageId::FIRST,
        }
    }

    /// Appends a message and returns a copy of it.
    pub fn append(&mut self, role: MessageRole, content: impl Into<String>) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            role,
            content: content.into(),
            created_at: Timestamp::now(),
        };
        self.next_id = self.next_id.next();
        self.messages.push(message.clone());
        message
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}
