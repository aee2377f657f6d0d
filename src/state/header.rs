//! Header user-menu state.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::state::session::SessionStore;
use crate::util::route::AppRoute;

/// Entries of the avatar menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Profile,
    Logout,
}

impl MenuAction {
    pub const ALL: [Self; 2] = [Self::Profile, Self::Logout];

    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Logout => "Logout",
        }
    }

    /// Perform the action and return where the user should land.
    ///
    /// Logout is the only user-initiated session mutation outside sign-in.
    pub fn apply(self, session: &SessionStore) -> AppRoute {
        match self {
            Self::Profile => AppRoute::Profile,
            Self::Logout => {
                session.clear();
                AppRoute::SignIn
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub menu_open: bool,
    /// Avatar URL; `None` keeps the placeholder.
    pub avatar: Option<String>,
}
