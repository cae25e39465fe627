//! REST client for the analytics backend's auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses carry `{message}`; that text becomes the
//! `AuthError::Rejected` message. Bodies that do not parse fall back to a
//! status-based message so the page always has something to show.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::error::AuthError;
use super::types::{ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorResponse;

pub const LOGIN_PATH: &str = "/login";
pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";
pub const CHANGE_PASSWORD_PATH: &str = "/change-password";

/// The backend operations the auth actions depend on.
pub trait AuthApi {
    fn login(&self, request: &LoginRequest) -> impl Future<Output = Result<LoginResponse, AuthError>>;

    fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> impl Future<Output = Result<MessageResponse, AuthError>>;

    fn change_password(
        &self,
        request: &ChangePasswordRequest,
    ) -> impl Future<Output = Result<MessageResponse, AuthError>>;
}

/// JSON-over-HTTP implementation rooted at a base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthApi {
    base_url: String,
}

impl HttpAuthApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        post_json(&self.endpoint(LOGIN_PATH), request).await
    }

    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<MessageResponse, AuthError> {
        post_json(&self.endpoint(FORGOT_PASSWORD_PATH), request).await
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<MessageResponse, AuthError> {
        post_json(&self.endpoint(CHANGE_PASSWORD_PATH), request).await
    }
}

async fn post_json<B, R>(url: &str, body: &B) -> Result<R, AuthError>
where
    B: serde::Serialize,
    R: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        let ok = resp.ok();
        let status = resp.status();
        let text = resp.text().await.map_err(|e| AuthError::Network(e.to_string()))?;
        if !ok {
            log::debug!("{url} rejected with status {status}");
            return Err(rejection_from_body(status, &text));
        }
        parse_success_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, body);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("Request failed ({status}).")
}

/// Map a non-success response to `Rejected`, preferring the body's message.
#[cfg(any(test, feature = "hydrate"))]
fn rejection_from_body(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|e| e.message.trim().to_owned())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| request_failed_message(status));
    AuthError::Rejected { status, message }
}

/// Parse a success body; an empty body reads as `{}`.
#[cfg(any(test, feature = "hydrate"))]
fn parse_success_body<R: serde::de::DeserializeOwned>(body: &str) -> Result<R, AuthError> {
    let body = if body.trim().is_empty() { "{}" } else { body };
    serde_json::from_str(body).map_err(|e| AuthError::InvalidResponse(e.to_string()))
}
