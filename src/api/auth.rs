//! Auth Endpoints
//!
//! Login, registration, logout, and profile reads/updates.

use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::models::UserProfile;

#[derive(Serialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Serialize, Default)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

pub async fn login(request: &AuthRequest) -> Result<TokenResponse, ApiError> {
    super::post_json("/auth/login", request).await
}

pub async fn register(request: &AuthRequest) -> Result<TokenResponse, ApiError> {
    super::post_json("/auth/register", request).await
}

/// Best-effort server-side logout; callers clear local state regardless
pub async fn logout() -> Result<(), ApiError> {
    super::post_no_content("/auth/logout").await
}

pub async fn get_profile() -> Result<UserProfile, ApiError> {
    super::get_json("/auth/me").await
}

pub async fn update_profile(request: &UpdateProfileRequest) -> Result<UserProfile, ApiError> {
    super::put_json("/auth/me", request).await
}
