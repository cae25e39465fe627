//! Sign-in, sign-out and password flows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these actions; on success the action writes the session store
//! and then the session context, so a guard evaluated afterwards sees the new
//! state without another storage read. Failures leave both untouched.
//!
//! ERROR HANDLING
//! ==============
//! Field checks run before any request. Every request races the configured
//! timeout and surfaces `AuthError::Timeout` when it loses.

#[cfg(test)]
#[path = "auth_actions_test.rs"]
mod auth_actions_test;

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};
use leptos::prelude::*;

use super::auth::{Session, SessionContext};
use super::session_store::SessionStore;
use crate::config::ClientConfig;
use crate::net::api::{AuthApi, HttpAuthApi};
use crate::net::error::AuthError;
use crate::net::types::{ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse};
use crate::util::timer::{BrowserTimer, Timer};

pub const RESET_REQUESTED_MESSAGE: &str = "If that account exists, a reset link is on its way.";
pub const PASSWORD_CHANGED_MESSAGE: &str = "Password changed.";

/// Raw change-password form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChangePasswordForm {
    pub email: String,
    pub old_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

#[derive(Clone)]
pub struct AuthActions<A, T> {
    api: A,
    timer: T,
    store: SessionStore,
    session: SessionContext,
    request_timeout: Duration,
}

impl<A: AuthApi, T: Timer> AuthActions<A, T> {
    pub fn new(api: A, timer: T, store: SessionStore, session: SessionContext, request_timeout: Duration) -> Self {
        Self { api, timer, store, session, request_timeout }
    }

    /// Authenticate and persist the resulting session.
    ///
    /// # Errors
    ///
    /// Validation, network, timeout, rejection or unusable-response errors,
    /// and storage errors when the session cannot be persisted. None of them
    /// mutate the store or context.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let email = validate_sign_in_input(email, password)?;
        let request = LoginRequest { email: email.clone(), password: password.to_owned() };
        let response = self.with_timeout(self.api.login(&request)).await?;
        let session = session_from_login(response, &email)?;

        self.store.save(&session)?;
        self.session.set(Some(session.clone()));
        log::info!("signed in as {}", session.user_id());
        Ok(session)
    }

    /// Clear the store and the context together.
    pub fn sign_out(&self) {
        self.store.clear();
        self.session.set(None);
        log::info!("signed out");
    }

    /// Ask the backend to send a reset email. Returns the message to show.
    ///
    /// # Errors
    ///
    /// Validation, network, timeout or rejection errors.
    pub async fn request_password_reset(&self, email: &str) -> Result<String, AuthError> {
        let email = validate_email(email)?;
        let request = ForgotPasswordRequest { email };
        let response = self.with_timeout(self.api.forgot_password(&request)).await?;
        Ok(response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| RESET_REQUESTED_MESSAGE.to_owned()))
    }

    /// Change the password server-side. Returns the confirmation to show.
    ///
    /// # Errors
    ///
    /// Validation errors (checked before any request), then network, timeout
    /// or rejection errors.
    pub async fn change_password(&self, form: &ChangePasswordForm) -> Result<String, AuthError> {
        let request = validate_change_password(form)?;
        let response = self.with_timeout(self.api.change_password(&request)).await?;
        Ok(response
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| PASSWORD_CHANGED_MESSAGE.to_owned()))
    }

    async fn with_timeout<R, F>(&self, call: F) -> Result<R, AuthError>
    where
        F: Future<Output = Result<R, AuthError>>,
    {
        let call = pin!(call);
        let timeout = pin!(self.timer.sleep(self.request_timeout));
        match select(call, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                log::warn!("request timed out after {:?}", self.request_timeout);
                Err(AuthError::Timeout)
            }
        }
    }
}

/// Actions wired to the browser: HTTP backend, `setTimeout` timer and the
/// store/context provided by the root component. Call from a component body;
/// context is not reachable from event handlers.
pub fn browser_auth_actions() -> AuthActions<HttpAuthApi, BrowserTimer> {
    let config = expect_context::<ClientConfig>();
    AuthActions::new(
        HttpAuthApi::new(config.api_base_url.clone()),
        BrowserTimer,
        expect_context::<SessionStore>(),
        expect_context::<SessionContext>(),
        config.request_timeout,
    )
}

/// Returns the trimmed email.
pub(crate) fn validate_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::validation("Enter your email."));
    }
    Ok(email.to_owned())
}

/// Returns the trimmed email.
pub(crate) fn validate_sign_in_input(email: &str, password: &str) -> Result<String, AuthError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::validation("Enter both email and password."));
    }
    Ok(email.to_owned())
}

pub(crate) fn validate_change_password(form: &ChangePasswordForm) -> Result<ChangePasswordRequest, AuthError> {
    let email = form.email.trim();
    if email.is_empty()
        || form.old_password.is_empty()
        || form.new_password.is_empty()
        || form.confirm_new_password.is_empty()
    {
        return Err(AuthError::validation("Fill in every field."));
    }
    if form.new_password != form.confirm_new_password {
        return Err(AuthError::validation("New passwords do not match."));
    }
    Ok(ChangePasswordRequest {
        email: email.to_owned(),
        old_password: form.old_password.clone(),
        new_password: form.new_password.clone(),
    })
}

/// Build the session from a login body, falling back to the submitted email.
fn session_from_login(response: LoginResponse, request_email: &str) -> Result<Session, AuthError> {
    let email = response
        .email
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| request_email.to_owned());
    let user_id = response
        .user_id
        .ok_or_else(|| AuthError::InvalidResponse("login response missing userId".to_owned()))?;
    Session::new(user_id, response.name, email)
        .ok_or_else(|| AuthError::InvalidResponse("login response has blank userId".to_owned()))
}
