//! API Client
//!
//! HTTP bindings to the task service, organized by domain. All requests
//! share one transport helper: bearer token from the session, a hard
//! timeout, and `{status, detail}` error decoding.

pub mod auth;
pub mod chat;
pub mod conversations;
pub mod tasks;

use futures_util::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::pin::pin;
use thiserror::Error;

/// Base path of the task service API, overridable at build time
pub const API_BASE: &str = match option_env!("TASKCHAT_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// How long a request may stay in flight before it surfaces as a failure
const REQUEST_TIMEOUT_MS: u32 = 30_000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Structured error from the service
    #[error("{detail}")]
    Api { status: u16, detail: String },
    /// Transport-level failure (offline, DNS, CORS)
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    /// 2xx response with a body this client cannot decode
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message for the user: structured detail verbatim, generic otherwise
    pub fn detail(&self) -> String {
        match self {
            ApiError::Api { detail, .. } if !detail.is_empty() => detail.clone(),
            ApiError::Timeout => "The server took too long to respond".to_string(),
            _ => "An unexpected error occurred".to_string(),
        }
    }
}

/// Error body shape the service uses for every failure
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

fn url(path: &str) -> String {
    format!("{}{}", API_BASE, path)
}

/// Attach the session token when one is present
fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match crate::session::load_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Race the request against the deadline
async fn with_timeout<F>(request: F) -> Result<Response, ApiError>
where
    F: Future<Output = Result<Response, gloo_net::Error>>,
{
    let request = pin!(request);
    let deadline = pin!(TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    match select(request, deadline).await {
        Either::Left((result, _)) => result.map_err(|error| ApiError::Network(error.to_string())),
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

fn error_from_body(status: u16, raw: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(raw)
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| format!("request failed with status {}", status));
    ApiError::Api { status, detail }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let raw = response
        .text()
        .await
        .map_err(|error| ApiError::Network(error.to_string()))?;
    if !(200..=299).contains(&status) {
        return Err(error_from_body(status, &raw));
    }
    serde_json::from_str(&raw).map_err(|error| ApiError::Decode(error.to_string()))
}

/// Check the status and discard any body
async fn ensure_success(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if (200..=299).contains(&status) {
        return Ok(());
    }
    let raw = response.text().await.unwrap_or_default();
    Err(error_from_body(status, &raw))
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = with_timeout(authorized(Request::get(&url(path))).send()).await?;
    decode_json(response).await
}

pub(crate) async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let request = authorized(Request::post(&url(path)))
        .json(body)
        .map_err(|error| ApiError::Decode(error.to_string()))?;
    let response = with_timeout(request.send()).await?;
    decode_json(response).await
}

pub(crate) async fn put_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let request = authorized(Request::put(&url(path)))
        .json(body)
        .map_err(|error| ApiError::Decode(error.to_string()))?;
    let response = with_timeout(request.send()).await?;
    decode_json(response).await
}

/// PUT where the caller does not care about the response body
pub(crate) async fn put_no_content<B: Serialize + ?Sized>(
    path: &str,
    body: &B,
) -> Result<(), ApiError> {
    let request = authorized(Request::put(&url(path)))
        .json(body)
        .map_err(|error| ApiError::Decode(error.to_string()))?;
    let response = with_timeout(request.send()).await?;
    ensure_success(response).await
}

pub(crate) async fn post_no_content(path: &str) -> Result<(), ApiError> {
    let response = with_timeout(authorized(Request::post(&url(path))).send()).await?;
    ensure_success(response).await
}

pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    let response = with_timeout(authorized(Request::delete(&url(path))).send()).await?;
    ensure_success(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_detail_is_surfaced_verbatim() {
        let error = error_from_body(400, r#"{"detail":"Title already exists"}"#);
        assert_eq!(
            error,
            ApiError::Api {
                status: 400,
                detail: "Title already exists".to_string()
            }
        );
        assert_eq!(error.detail(), "Title already exists");
    }

    #[test]
    fn test_unstructured_body_gets_generic_detail() {
        let error = error_from_body(502, "<html>bad gateway</html>");
        assert_eq!(
            error,
            ApiError::Api {
                status: 502,
                detail: "request failed with status 502".to_string()
            }
        );
    }

    #[test]
    fn test_network_errors_read_as_generic() {
        assert_eq!(
            ApiError::Network("fetch failed".to_string()).detail(),
            "An unexpected error occurred"
        );
        assert_eq!(
            ApiError::Timeout.detail(),
            "The server took too long to respond"
        );
    }
}
