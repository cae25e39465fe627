//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` holds the in-memory session context, `session_store` its persisted
//! mirror, and `auth_actions` the flows that change both together.

pub mod auth;
pub mod auth_actions;
pub mod session_store;
