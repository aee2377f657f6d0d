//! Networking modules for the recipe REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` classifies failures, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
