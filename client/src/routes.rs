//! Route surface of the dashboard.
//!
//! ARCHITECTURE
//! ============
//! Public auth screens live under `/auth`, the guarded statistics area under
//! `/dashboard`. The router in `app` is built from these segments and the
//! host server redirects anything outside them to `SIGN_IN_PATH`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const AUTH_SEGMENT: &str = "auth";
pub const SIGN_IN_SEGMENT: &str = "sign-in";
pub const FORGOT_PASSWORD_SEGMENT: &str = "forgot-password";
pub const CHANGE_PASSWORD_SEGMENT: &str = "change-password";
pub const DASHBOARD_SEGMENT: &str = "dashboard";

/// The sign-in entry point; every unauthorized or unknown navigation ends here.
pub const SIGN_IN_PATH: &str = "/auth/sign-in";
pub const FORGOT_PASSWORD_PATH: &str = "/auth/forgot-password";
pub const CHANGE_PASSWORD_PATH: &str = "/auth/change-password";
pub const DASHBOARD_HOME_PATH: &str = "/dashboard";
