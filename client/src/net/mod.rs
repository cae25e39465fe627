//! Networking modules for the analytics backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the auth REST calls, `types` defines the wire schema and
//! `error` the failure taxonomy shared with the auth actions.

pub mod api;
pub mod error;
pub mod types;
