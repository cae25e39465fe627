//! Reusable UI components shared across pages.

pub mod route_guard;
