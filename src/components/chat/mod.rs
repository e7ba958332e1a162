//! Chat Components
//!
//! The conversational assistant view: layout controller, sidebar, and the
//! message pane.

mod chat_interface;
mod chat_layout;
mod conversation_item;
mod sidebar;

pub use chat_interface::ChatInterface;
pub use chat_layout::ChatLayout;
pub use conversation_item::ConversationItem;
pub use sidebar::{Sidebar, SidebarToggle};
