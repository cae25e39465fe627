//! Route-guard decision logic.
//!
//! SYSTEM CONTEXT
//! ==============
//! The protected subtree mounts one guard. Each mount starts `Pending`, runs
//! `verify_session` once and lands on `Authorized` or `Unauthorized`.
//!
//! RACE HANDLING
//! =============
//! The context hydrates from storage in a client-side effect, which can run
//! after the guard's first check. When storage holds a well-formed session
//! the guard waits for the context's settle signal, bounded by a timeout,
//! and then trusts only the context. Storage contents never authorize.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;
use std::pin::pin;

use futures::future::{Either, select};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::SIGN_IN_PATH;
use crate::state::auth::SessionContext;
use crate::state::session_store::{SessionStore, StoredSession};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardDecision {
    #[default]
    Pending,
    Authorized,
    Unauthorized,
}

/// Decide whether the protected subtree may render.
///
/// `settle_timeout` bounds the wait for context hydration; it is only polled
/// when storage holds a well-formed session the context does not yet reflect.
pub async fn verify_session<F>(session: SessionContext, store: &SessionStore, settle_timeout: F) -> GuardDecision
where
    F: Future<Output = ()>,
{
    if session.current_untracked().is_some() {
        return GuardDecision::Authorized;
    }

    match store.inspect() {
        StoredSession::Missing | StoredSession::Invalid => GuardDecision::Unauthorized,
        StoredSession::Valid(_) => {
            let settled = pin!(session.settled());
            let timeout = pin!(settle_timeout);
            match select(settled, timeout).await {
                Either::Left(((), _)) => {
                    if session.current_untracked().is_some() {
                        GuardDecision::Authorized
                    } else {
                        GuardDecision::Unauthorized
                    }
                }
                Either::Right(((), _)) => {
                    log::warn!("session context did not settle in time");
                    GuardDecision::Unauthorized
                }
            }
        }
    }
}

#[must_use]
pub fn should_redirect_unauth(decision: GuardDecision) -> bool {
    decision == GuardDecision::Unauthorized
}

/// Options for leaving a guarded route: replace, so the guarded URL does not
/// stay in history.
#[must_use]
pub fn replace_navigation() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to the sign-in entry point once the guard resolves `Unauthorized`.
pub fn install_unauth_redirect<F>(decision: RwSignal<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move |redirected: Option<bool>| {
        redirect_step(decision.get(), redirected.unwrap_or(false), &navigate)
    });
}

/// One run of the redirect effect. Returns whether the guard has redirected,
/// so a mount navigates at most once.
pub(crate) fn redirect_step<F>(decision: GuardDecision, redirected: bool, navigate: &F) -> bool
where
    F: Fn(&str, NavigateOptions),
{
    if redirected {
        return true;
    }
    if should_redirect_unauth(decision) {
        navigate(SIGN_IN_PATH, replace_navigation());
        return true;
    }
    false
}
