//! Task Endpoints

use serde::Serialize;

use super::ApiError;
use crate::models::Task;

#[derive(Serialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Partial update; only the fields that are set reach the wire
#[derive(Serialize, Default)]
pub struct UpdateTaskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
}

pub async fn list() -> Result<Vec<Task>, ApiError> {
    super::get_json("/tasks").await
}

pub async fn create(request: &CreateTaskRequest) -> Result<Task, ApiError> {
    super::post_json("/tasks", request).await
}

pub async fn update(id: &str, request: &UpdateTaskRequest) -> Result<Task, ApiError> {
    super::put_json(&format!("/tasks/{}", id), request).await
}

pub async fn delete(id: &str) -> Result<(), ApiError> {
    super::delete(&format!("/tasks/{}", id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_skips_unset_fields() {
        let request = UpdateTaskRequest {
            is_completed: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"is_completed":true}"#
        );
    }
}
