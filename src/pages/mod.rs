//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns fetching and submission for its route, drives one of the
//! pure state machines in `state`, and delegates rendering to `components`.

pub mod profile;
pub mod recipe_detail;
pub mod recipe_list;
pub mod sign_in;
pub mod sign_up;
