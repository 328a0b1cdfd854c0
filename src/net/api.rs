//! Auth/role service client.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side and native builds: every call fails with
//! `ApiError::Unavailable`, since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! `login`/`register` bodies are decoded whatever the HTTP status, because
//! rejections travel as `{ "detail": ... }`. The role lookup treats any
//! non-2xx status as an error.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use async_trait::async_trait;

use super::error::ApiError;
use super::types::{AuthResponse, LoginRequest, RegisterRequest, RoleResponse};
use crate::config::ClientConfig;

/// Remote operations consumed by the session and role layers.
///
/// Injected as a capability so tests can script responses and control
/// completion order.
#[async_trait(?Send)]
pub trait AuthClient: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// Look up the caller's role. `None` is forwarded as an anonymous call;
    /// the service decides whether that is acceptable.
    async fn role_by_token(&self, token: Option<&str>) -> Result<RoleResponse, ApiError>;
}

pub type SharedAuthClient = Arc<dyn AuthClient>;

/// `AuthClient` over HTTP + JSON.
#[derive(Clone, Debug)]
pub struct HttpAuthClient {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    base_url: String,
}

impl HttpAuthClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self { base_url: config.api_base_url.clone() }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(base_url: &str) -> String {
    format!("{base_url}/login")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint(base_url: &str) -> String {
    format!("{base_url}/reg")
}

#[cfg(any(test, feature = "hydrate"))]
fn role_endpoint(base_url: &str) -> String {
    format!("{base_url}/role")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(|t| format!("Bearer {t}"))
}

#[cfg(feature = "hydrate")]
async fn post_auth<T: serde::Serialize>(url: &str, body: &T) -> Result<AuthResponse, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    resp.json::<AuthResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl AuthClient for HttpAuthClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_auth(&login_endpoint(&self.base_url), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_auth(&register_endpoint(&self.base_url), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn role_by_token(&self, token: Option<&str>) -> Result<RoleResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut req = gloo_net::http::Request::get(&role_endpoint(&self.base_url));
            if let Some(value) = bearer_header(token) {
                req = req.header("Authorization", &value);
            }
            let resp = req.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<RoleResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Unavailable)
        }
    }
}
