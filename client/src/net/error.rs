//! Error taxonomy for auth actions and the remote API.
//!
//! DESIGN
//! ======
//! Every variant is recoverable: the page shows `user_message()` and the user
//! may resubmit. Storage corruption never reaches this type; the session
//! store absorbs it and reports an absent session instead. A rejected storage
//! write does, because the session would otherwise exist only in memory.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::util::storage::StorageError;

/// Generic text for failures the user can only retry.
pub const RETRY_MESSAGE: &str = "Could not reach the server. Please try again.";

pub const STORAGE_MESSAGE: &str = "Signed in, but this browser would not save the session. Check site storage settings.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Client-side field check failed; no request was sent.
    #[error("{0}")]
    Validation(String),
    /// The backend answered with a non-success status.
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    /// A success status with a body we could not use.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// Authenticated, but the session could not be persisted locally.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AuthError {
    pub(crate) fn validation(message: &str) -> Self {
        Self::Validation(message.to_owned())
    }

    /// Text suitable for showing next to the form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::Rejected { message, .. } => message.clone(),
            Self::Network(_) | Self::Timeout => RETRY_MESSAGE.to_owned(),
            Self::InvalidResponse(_) => "Unexpected response from server.".to_owned(),
            Self::Storage(_) => STORAGE_MESSAGE.to_owned(),
        }
    }

    /// Whether resubmitting the same input may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout | Self::InvalidResponse(_) => true,
            Self::Rejected { status, .. } => *status >= 500,
            Self::Validation(_) | Self::Storage(_) => false,
        }
    }
}
