//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render presentation only. Pages own fetching and submission and
//! pass plain values or signals down.

pub mod alert_dialog;
pub mod backdrop;
pub mod copyright;
pub mod header;
pub mod loader;
pub mod recipe_card;
pub mod text_field;
