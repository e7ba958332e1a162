//! Chat State Store
//!
//! Shared state for the chat layout, provided as a reactive store so the
//! sidebar and the message pane re-render independently.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{ConversationSummary, Message, UserProfile};

#[derive(Clone, Debug, Default, Store)]
pub struct ChatState {
    /// Conversation summaries shown in the sidebar
    pub conversations: Vec<ConversationSummary>,
    /// Currently selected conversation; `None` shows the welcome screen
    pub active_conversation_id: Option<String>,
    /// Message history of the active conversation
    pub messages: Vec<Message>,
    /// Signed-in user's profile, once loaded
    pub profile: Option<UserProfile>,
}

impl ChatState {
    pub fn rename_conversation(&mut self, id: &str, title: &str) {
        if let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == id) {
            conversation.title = title.to_string();
        }
    }

    /// Remove a summary; deleting the active conversation also clears the
    /// selection and the visible message list
    pub fn remove_conversation(&mut self, id: &str) {
        self.conversations.retain(|c| c.id != id);
        if self.active_conversation_id.as_deref() == Some(id) {
            self.active_conversation_id = None;
            self.messages.clear();
        }
    }
}

/// Type alias for the store
pub type ChatStore = Store<ChatState>;

/// Get the chat store from context
pub fn use_chat_store() -> ChatStore {
    expect_context::<ChatStore>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MessageId, Role};

    fn make_summary(id: &str, title: &str) -> ConversationSummary {
        ConversationSummary {
            id: id.to_string(),
            title: title.to_string(),
            updated_at: None,
        }
    }

    fn make_state() -> ChatState {
        ChatState {
            conversations: vec![make_summary("c1", "First"), make_summary("c2", "Second")],
            active_conversation_id: Some("c1".to_string()),
            messages: vec![Message {
                id: MessageId::Confirmed("m1".to_string()),
                role: Role::User,
                content: "hello".to_string(),
                created_at: None,
            }],
            profile: None,
        }
    }

    #[test]
    fn test_deleting_active_conversation_clears_selection_and_messages() {
        let mut state = make_state();
        state.remove_conversation("c1");

        assert_eq!(state.conversations.len(), 1);
        assert_eq!(state.active_conversation_id, None);
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_deleting_inactive_conversation_keeps_view() {
        let mut state = make_state();
        state.remove_conversation("c2");

        assert_eq!(state.conversations.len(), 1);
        assert_eq!(state.active_conversation_id.as_deref(), Some("c1"));
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn test_rename_updates_summary_in_place() {
        let mut state = make_state();
        state.rename_conversation("c2", "Renamed");
        assert_eq!(state.conversations[1].title, "Renamed");
        // order untouched
        assert_eq!(state.conversations[0].id, "c1");
    }
}
