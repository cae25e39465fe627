//! Client configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so the backend base URL is
//! baked in from `DASHBOARD_API_BASE_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "/api";
/// Upper bound on how long the guard waits for session hydration.
pub const DEFAULT_GUARD_SETTLE_TIMEOUT: Duration = Duration::from_millis(500);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend root, without a trailing `/`.
    pub api_base_url: String,
    pub guard_settle_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_api_base_url(None)
    }
}

impl ClientConfig {
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::with_api_base_url(option_env!("DASHBOARD_API_BASE_URL"))
    }

    /// Defaults with an optional base URL override; blank overrides are ignored.
    #[must_use]
    pub fn with_api_base_url(raw: Option<&str>) -> Self {
        let api_base_url = raw
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_owned();
        Self {
            api_base_url,
            guard_settle_timeout: DEFAULT_GUARD_SETTLE_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}
