//! Conversation Endpoints
//!
//! Summaries are listed separately from full message histories.

use serde::Serialize;

use super::ApiError;
use crate::models::{Conversation, ConversationSummary};

#[derive(Serialize)]
struct RenameArgs<'a> {
    title: &'a str,
}

pub async fn list() -> Result<Vec<ConversationSummary>, ApiError> {
    super::get_json("/conversations").await
}

pub async fn get(id: &str) -> Result<Conversation, ApiError> {
    super::get_json(&format!("/conversations/{}", id)).await
}

pub async fn rename(id: &str, title: &str) -> Result<(), ApiError> {
    super::put_no_content(&format!("/conversations/{}", id), &RenameArgs { title }).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    super::delete(&format!("/conversations/{}", id)).await
}
