//! Load state for screens that fetch on mount (recipe list, detail, profile).
//!
//! DESIGN
//! ======
//! A rejected token on any data fetch clears the session; the navigation
//! guard then takes the user to sign-in. Other failures are logged and shown
//! as a short note. Nothing retries on its own.

#[cfg(test)]
#[path = "remote_test.rs"]
mod remote_test;

use crate::net::error::ApiError;
use crate::state::session::SessionStore;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Ready(T),
    Unavailable(String),
}

impl<T> Remote<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Fold a fetch result into view state. `what` names the resource in logs.
    pub fn resolve(result: Result<T, ApiError>, session: &SessionStore, what: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(err) if err.is_auth() => {
                log::warn!("{what} request was unauthorized; signing out");
                session.clear();
                Self::Loading
            }
            Err(err) => {
                log::warn!("{what} request failed: {err}");
                Self::Unavailable(format!("Could not load {what}. {}", err.user_message()))
            }
        }
    }
}
