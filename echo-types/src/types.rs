//! Core conversation data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a [`Message`].
///
/// Assigned when the message is created and never reused within a
/// conversation. Streaming updates address their target message by id, not
/// by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The role of a message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A human user.
    User,
    /// The assistant.
    Assistant,
}

/// A single message in a conversation.
///
/// Assistant messages start as empty placeholders and grow by appending
/// content deltas while their stream is open. Once the owning session
/// reaches a terminal state the message is never mutated again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Stable identity of this message.
    pub id: MessageId,
    /// Who authored the message.
    pub role: Role,
    /// The message text. Append-only while streaming.
    pub content: String,
    /// Assistant mood reported by the backend, if any.
    pub mood: Option<String>,
    /// Action the backend suggests to the user, if any.
    pub suggested_action: Option<String>,
}

impl Message {
    /// Create a user message with the given text.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::User,
            content: text.into(),
            mood: None,
            suggested_action: None,
        }
    }

    /// Create an empty assistant message to stream a reply into.
    #[must_use]
    pub fn assistant_placeholder() -> Self {
        Self {
            id: MessageId::new(),
            role: Role::Assistant,
            content: String::new(),
            mood: None,
            suggested_action: None,
        }
    }
}

/// An ordered, append-only sequence of messages.
///
/// Messages are only ever added; there is no removal or reordering API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Create an empty conversation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, returning its id.
    pub fn push(&mut self, message: Message) -> MessageId {
        let id = message.id;
        self.messages.push(message);
        id
    }

    /// All messages in arrival order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Look up a message by id.
    #[must_use]
    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Look up a message by id for mutation.
    pub fn message_mut(&mut self, id: MessageId) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == id)
    }

    /// The most recently appended message.
    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the conversation holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_ids_are_unique() {
        let a = MessageId::new();
        let b = MessageId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn user_message_carries_text() {
        let msg = Message::user("hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "hello");
        assert!(msg.mood.is_none());
        assert!(msg.suggested_action.is_none());
    }

    #[test]
    fn assistant_placeholder_is_empty() {
        let msg = Message::assistant_placeholder();
        assert_eq!(msg.role, Role::Assistant);
        assert!(msg.content.is_empty());
    }

    #[test]
    fn push_preserves_arrival_order() {
        let mut conv = Conversation::new();
        conv.push(Message::user("first"));
        conv.push(Message::user("second"));
        let texts: Vec<&str> = conv.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[test]
    fn push_returns_the_message_id() {
        let mut conv = Conversation::new();
        let msg = Message::user("hi");
        let expected = msg.id;
        let id = conv.push(msg);
        assert_eq!(id, expected);
    }

    #[test]
    fn message_lookup_by_id() {
        let mut conv = Conversation::new();
        conv.push(Message::user("a"));
        let id = conv.push(Message::assistant_placeholder());
        assert_eq!(conv.message(id).map(|m| m.role), Some(Role::Assistant));
        assert!(conv.message(MessageId::new()).is_none());
    }

    #[test]
    fn message_mut_allows_append() {
        let mut conv = Conversation::new();
        let id = conv.push(Message::assistant_placeholder());
        conv.message_mut(id)
            .expect("message exists")
            .content
            .push_str("delta");
        assert_eq!(conv.message(id).map(|m| m.content.as_str()), Some("delta"));
    }

    #[test]
    fn last_is_most_recent() {
        let mut conv = Conversation::new();
        assert!(conv.last().is_none());
        conv.push(Message::user("a"));
        let id = conv.push(Message::user("b"));
        assert_eq!(conv.last().map(|m| m.id), Some(id));
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Role::Assistant).expect("serializes"),
            "\"assistant\""
        );
        assert_eq!(
            serde_json::to_string(&Role::User).expect("serializes"),
            "\"user\""
        );
    }
}
