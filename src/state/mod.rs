//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, per-screen forms, fetch state) so
//! the page components stay thin and every transition is testable without a
//! reactive runtime.

pub mod header;
pub mod remote;
pub mod session;
pub mod sign_in;
pub mod sign_up;
