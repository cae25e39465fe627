//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers)
//! and the guard's decision logic from page code to keep them testable.

pub mod auth;
pub mod storage;
pub mod timer;
