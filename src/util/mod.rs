//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser and router concerns from page and component
//! logic so the decision code stays testable off-browser.

pub mod auth;
pub mod mounted;
pub mod route;
pub mod storage;
