//! Fakes shared by unit tests: a tokio-backed timer, in-memory and read-only
//! session stores, and a scripted auth API that records its calls.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::net::api::AuthApi;
use crate::net::error::AuthError;
use crate::net::types::{ChangePasswordRequest, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse};
use crate::state::session_store::SessionStore;
use crate::util::storage::{KeyValueStorage, MemoryStorage, StorageError};
use crate::util::timer::Timer;

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct TokioTimer;

impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        tokio::time::sleep(duration)
    }
}

pub(crate) fn memory_store() -> (SessionStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    (SessionStore::new(Arc::new(storage.clone())), storage)
}

/// Storage that serves reads and refuses every write, like a browser with
/// site storage full or blocked.
#[derive(Clone, Debug, Default)]
pub(crate) struct ReadOnlyStorage {
    pub inner: MemoryStorage,
}

impl KeyValueStorage for ReadOnlyStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError("QuotaExceededError".to_owned()))
    }

    fn remove_item(&self, key: &str) {
        self.inner.remove_item(key);
    }
}

pub(crate) fn read_only_store() -> (SessionStore, MemoryStorage) {
    let storage = ReadOnlyStorage::default();
    let inner = storage.inner.clone();
    (SessionStore::new(Arc::new(storage)), inner)
}

/// Scripted backend. Each call is recorded as `"<endpoint> <email>"`.
#[derive(Clone)]
pub(crate) struct FakeAuthApi {
    pub login: Result<LoginResponse, AuthError>,
    pub forgot_password: Result<MessageResponse, AuthError>,
    pub change_password: Result<MessageResponse, AuthError>,
    /// Simulated latency before each response.
    pub latency: Duration,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl Default for FakeAuthApi {
    fn default() -> Self {
        Self {
            login: Err(AuthError::Network("login not scripted".to_owned())),
            forgot_password: Ok(MessageResponse::default()),
            change_password: Ok(MessageResponse::default()),
            latency: Duration::ZERO,
            calls: Arc::default(),
        }
    }
}

impl FakeAuthApi {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    async fn respond<T: Clone>(&self, call: String, result: &Result<T, AuthError>) -> Result<T, AuthError> {
        self.calls.lock().unwrap().push(call);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        result.clone()
    }
}

impl AuthApi for FakeAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AuthError> {
        self.respond(format!("login {}", request.email), &self.login).await
    }

    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<MessageResponse, AuthError> {
        self.respond(format!("forgot-password {}", request.email), &self.forgot_password)
            .await
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> Result<MessageResponse, AuthError> {
        self.respond(format!("change-password {}", request.email), &self.change_password)
            .await
    }
}
