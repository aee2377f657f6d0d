//! # recipe-client
//!
//! Leptos + WASM single-page client for the recipe REST API: account sign-up,
//! token sign-in, and browsing the signed-in user's recipes.
//!
//! The session token lives in browser storage and is the only persisted state.
//! Everything that decides behavior (routing guard, form state machines, error
//! mapping) is plain Rust in `state`, `net` and `util` and is unit-tested
//! without a browser; `pages` and `components` only render and wire signals.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
