//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionContext` is created once by the root component and provided to the
//! view tree. It hydrates from the session store after mount; route guards
//! may start before that happens and await `settled()` instead of guessing
//! with a fixed delay.
//!
//! DESIGN
//! ======
//! `set` is the only mutation entry point. Anything written through it is
//! validated, so the context never holds a session without a `user_id`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use futures::FutureExt;
use futures::channel::oneshot;
use futures::future::Shared;
use leptos::prelude::*;
use serde::Serialize;

use super::session_store::SessionStore;

/// The authenticated identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    user_id: String,
    name: String,
    email: String,
}

impl Session {
    /// Build a session, or `None` when `user_id` is blank.
    ///
    /// A missing or blank `name` falls back to `user_id`.
    #[must_use]
    pub fn new(user_id: impl Into<String>, name: Option<String>, email: impl Into<String>) -> Option<Self> {
        let user_id = user_id.into();
        if user_id.trim().is_empty() {
            return None;
        }
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| user_id.clone());
        Some(Self { user_id, name, email: email.into() })
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Reactive payload of the session context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SessionState {
    user: Option<Session>,
    /// Set once the context reflects the session store (or an explicit `set`).
    hydrated: bool,
}

struct SettleSignal {
    sender: Option<oneshot::Sender<()>>,
    receiver: Shared<oneshot::Receiver<()>>,
}

/// Tab-lifetime holder of the current session.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    settle: StoredValue<SettleSignal>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    /// An empty, not-yet-hydrated context.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = oneshot::channel();
        Self {
            state: RwSignal::new(SessionState::default()),
            settle: StoredValue::new(SettleSignal { sender: Some(sender), receiver: receiver.shared() }),
        }
    }

    /// Current session, tracked.
    #[must_use]
    pub fn current(&self) -> Option<Session> {
        self.state.with(|s| s.user.clone())
    }

    /// Current session without subscribing the caller.
    #[must_use]
    pub fn current_untracked(&self) -> Option<Session> {
        self.state.try_with_untracked(|s| s.user.clone()).flatten()
    }

    #[must_use]
    pub fn is_hydrated(&self) -> bool {
        self.state.try_with_untracked(|s| s.hydrated).unwrap_or(false)
    }

    /// One-time initialization from the session store. Later calls are no-ops.
    pub fn hydrate(&self, store: &SessionStore) {
        if self.is_hydrated() {
            log::debug!("session context already hydrated");
            return;
        }
        let user = store.load();
        log::debug!("session context hydrated (signed in: {})", user.is_some());
        self.state.update(|s| {
            s.user = user;
            s.hydrated = true;
        });
        self.mark_settled();
    }

    /// Replace the current session. Also marks the context settled, since it
    /// now holds authoritative state regardless of hydration.
    pub fn set(&self, session: Option<Session>) {
        self.state.update(|s| {
            s.user = session;
            s.hydrated = true;
        });
        self.mark_settled();
    }

    /// Resolves once initialization has completed. Resolves immediately if it
    /// already has, or if the context has been disposed.
    pub fn settled(self) -> impl Future<Output = ()> {
        let receiver = self.settle.try_with_value(|s| s.receiver.clone());
        async move {
            if let Some(receiver) = receiver {
                let _ = receiver.await;
            }
        }
    }

    fn mark_settled(&self) {
        self.settle.try_update_value(|s| {
            if let Some(sender) = s.sender.take() {
                let _ = sender.send(());
            }
        });
    }
}
