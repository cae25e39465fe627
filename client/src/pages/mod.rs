//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Auth pages (`login`, `forgot_password`, `change_password`) are public;
//! `dashboard` renders only inside the route guard.

pub mod change_password;
pub mod dashboard;
pub mod forgot_password;
pub mod login;
