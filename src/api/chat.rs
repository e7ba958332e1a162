//! Chat Endpoint
//!
//! One call per user message. Omitting the conversation id makes the server
//! open a new conversation and return its id alongside the reply.

use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::models::Message;

#[derive(Serialize)]
struct SendMessageArgs<'a> {
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    conversation_id: Option<&'a str>,
}

#[derive(Deserialize)]
pub struct SendMessageResponse {
    pub conversation_id: String,
    /// The assistant's reply; the user message keeps its local copy
    pub message: Message,
}

pub async fn send_message(
    content: &str,
    conversation_id: Option<&str>,
) -> Result<SendMessageResponse, ApiError> {
    super::post_json(
        "/chat",
        &SendMessageArgs {
            content,
            conversation_id,
        },
    )
    .await
}
