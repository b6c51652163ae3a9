//! Assistant transcript messages
//!
//! A `pending` message is the typing placeholder inserted while the
//! command processor is thinking; it is resolved in place, never removed
//! and re-appended, so transcript positions are stable.

use crate::ids::MessageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One entry in the assistant transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: MessageRole,
    pub text: String,
    /// True while this is an unresolved typing placeholder
    #[serde(default)]
    pub pending: bool,
    /// Action name the command processor asked the client to perform
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Structured payload accompanying the action
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// A user-authored message
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: MessageRole::User,
            text: text.into(),
            pending: false,
            action: None,
            data: None,
            sent_at: Utc::now(),
        }
    }

    /// The typing placeholder for an in-flight processor call
    #[must_use]
    pub fn typing(id: MessageId) -> Self {
        Self {
            id,
            role: MessageRole::Assistant,
            text: String::new(),
            pending: true,
            action: None,
            data: None,
            sent_at: Utc::now(),
        }
    }

    /// Resolve a placeholder in place with the processor's answer
    pub fn resolve(
        &mut self,
        text: impl Into<String>,
        action: Option<String>,
        data: Option<serde_json::Value>,
    ) {
        self.text = text.into();
        self.action = action;
        self.data = data;
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolving_clears_pending() {
        let id = MessageId::new();
        let mut message = Message::typing(id);
        assert!(message.pending);

        message.resolve("Added it to your list.", Some("task.create".into()), None);
        assert!(!message.pending);
        assert_eq!(message.id, id);
        assert_eq!(message.role, MessageRole::Assistant);
    }
}
