//! Frontend Models
//!
//! Data structures matching the task service API.

use serde::{Deserialize, Serialize};

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub is_completed: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub owner_id: Option<String>,
}

/// Lightweight conversation listing record, independent of message bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Full conversation with message history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}

/// Message identifier.
///
/// A user message gets a client-assigned `Pending` id the moment it is shown;
/// everything the server hands back carries a `Confirmed` id. Reconciliation
/// code matches on the variant instead of sniffing id prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MessageId {
    Pending(u64),
    Confirmed(String),
}

impl MessageId {
    pub fn is_pending(&self) -> bool {
        matches!(self, MessageId::Pending(_))
    }
}

impl From<String> for MessageId {
    fn from(id: String) -> Self {
        MessageId::Confirmed(id)
    }
}

impl From<MessageId> for String {
    fn from(id: MessageId) -> Self {
        match id {
            MessageId::Confirmed(id) => id,
            // Never sent over the wire; printable form for logs only
            MessageId::Pending(seq) => format!("pending-{}", seq),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Chat message (matches backend, except for pending ids)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Message {
    /// Tentative user message shown before the server acknowledges the send
    pub fn pending_user(seq: u64, content: impl Into<String>, created_at: Option<String>) -> Self {
        Self {
            id: MessageId::Pending(seq),
            role: Role::User,
            content: content.into(),
            created_at,
        }
    }
}

/// Account profile; email is immutable on the server side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
}

impl UserProfile {
    /// Name shown in the user menu: full name, else the email local part
    pub fn display_name(&self) -> String {
        self.full_name
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| self.email.split('@').next().map(str::to_string))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "User".to_string())
    }

    pub fn avatar_letter(&self) -> String {
        self.display_name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_id_roundtrip() {
        let id: MessageId = serde_json::from_str("\"msg-42\"").unwrap();
        assert_eq!(id, MessageId::Confirmed("msg-42".to_string()));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"msg-42\"");
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        let role: Role = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, Role::Assistant);
    }

    #[test]
    fn test_message_deserializes_as_confirmed() {
        let json = r#"{"id":"m1","role":"assistant","content":"hi","created_at":"2025-01-01T00:00:00Z"}"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert!(!message.id.is_pending());
        assert_eq!(message.role, Role::Assistant);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let profile = UserProfile {
            email: "ada@example.com".to_string(),
            full_name: None,
            profile_picture: None,
        };
        assert_eq!(profile.display_name(), "ada");
        assert_eq!(profile.avatar_letter(), "A");
    }
}
