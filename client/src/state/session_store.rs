//! Reload-surviving mirror of the current session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the auth actions, read once by `SessionContext::hydrate` and by
//! the route guard while the context is still hydrating. The stored value is
//! client-controlled, so it only ever serves as a UI hint.
//!
//! ERROR HANDLING
//! ==============
//! Corrupt or incomplete values read as absent and are logged, never raised.
//! Failed writes are returned to the caller, which must not publish a session
//! the store never received.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::Arc;

use serde::Deserialize;

use super::auth::Session;
use crate::net::types::deserialize_optional_id;
use crate::util::storage::{KeyValueStorage, StorageError};

/// Local storage key holding the JSON session.
pub const SESSION_STORAGE_KEY: &str = "user";

/// What the store currently holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoredSession {
    Missing,
    /// Present but unusable (bad JSON, missing `userId`).
    Invalid,
    Valid(Session),
}

/// Lenient on-disk shape; fields added or dropped by other versions still parse.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSession {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    user_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorage>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").finish_non_exhaustive()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// The persisted session, or `None` when absent or unusable.
    #[must_use]
    pub fn load(&self) -> Option<Session> {
        match self.inspect() {
            StoredSession::Valid(session) => Some(session),
            StoredSession::Missing | StoredSession::Invalid => None,
        }
    }

    /// Classify the persisted value without failing.
    #[must_use]
    pub fn inspect(&self) -> StoredSession {
        let Some(raw) = self.storage.get_item(SESSION_STORAGE_KEY) else {
            return StoredSession::Missing;
        };
        match parse_session(&raw) {
            Some(session) => StoredSession::Valid(session),
            None => {
                log::warn!("ignoring unusable stored session");
                StoredSession::Invalid
            }
        }
    }

    /// Persist `session`, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the session cannot be encoded or the
    /// backend rejects the write; the prior value is left as it was.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let raw = serde_json::to_string(session).map_err(|e| StorageError(e.to_string()))?;
        self.storage.set_item(SESSION_STORAGE_KEY, &raw).inspect_err(|e| {
            log::warn!("failed to persist session: {e}");
        })
    }

    pub fn clear(&self) {
        self.storage.remove_item(SESSION_STORAGE_KEY);
    }
}

fn parse_session(raw: &str) -> Option<Session> {
    let persisted: PersistedSession = serde_json::from_str(raw).ok()?;
    Session::new(persisted.user_id?, persisted.name, persisted.email.unwrap_or_default())
}
