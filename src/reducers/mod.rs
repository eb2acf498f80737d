//! Per-page reducers.
//!
//! Each page owns its slice of `AppState` and handles only its own messages.
//! The root `update.rs` offers every message to each reducer in turn.

pub mod catalog;
pub mod pages;
pub mod sign_up;
