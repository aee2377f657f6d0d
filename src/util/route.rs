//! Client-side routes and the navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `decide_route` is the only navigation logic in the client. It is pure so
//! it can be evaluated from an effect on every path or session change and
//! unit-tested without a rendering harness.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use crate::state::session::SessionStatus;

/// Every screen the client can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    SignUp,
    SignIn,
    Recipes,
    RecipeView { id: u64 },
    RecipeEdit { id: u64 },
    Profile,
}

impl AppRoute {
    /// Parse a location pathname. A missing trailing slash is tolerated.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["signup"] => Some(Self::SignUp),
            ["signin"] => Some(Self::SignIn),
            ["recipes"] => Some(Self::Recipes),
            ["profile"] => Some(Self::Profile),
            ["recipe", "view", id] => parse_id(id).map(|id| Self::RecipeView { id }),
            ["recipe", "edit", id] => parse_id(id).map(|id| Self::RecipeEdit { id }),
            _ => None,
        }
    }

    /// Canonical pathname, always with a trailing slash.
    pub fn path(self) -> String {
        match self {
            Self::SignUp => "/signup/".to_owned(),
            Self::SignIn => "/signin/".to_owned(),
            Self::Recipes => "/recipes/".to_owned(),
            Self::Profile => "/profile/".to_owned(),
            Self::RecipeView { id } => format!("/recipe/view/{id}/"),
            Self::RecipeEdit { id } => format!("/recipe/edit/{id}/"),
        }
    }

    pub fn requires_session(self) -> bool {
        matches!(self, Self::Recipes | Self::RecipeView { .. } | Self::RecipeEdit { .. } | Self::Profile)
    }

    pub fn is_auth_screen(self) -> bool {
        matches!(self, Self::SignIn | Self::SignUp)
    }
}

/// Digits only; `u64::from_str` alone would also take a leading `+`.
fn parse_id(raw: &str) -> Option<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Render(AppRoute),
    Redirect(AppRoute),
}

/// Decide what to show for `requested` given the current session.
///
/// Unknown paths go to the recipe list; the following evaluation sends
/// anonymous users on to sign-in. Re-evaluating at the target is a no-op.
pub fn decide_route(status: SessionStatus, requested: &str) -> RouteDecision {
    let Some(route) = AppRoute::parse(requested) else {
        return RouteDecision::Redirect(AppRoute::Recipes);
    };
    match status {
        SessionStatus::Anonymous if route.requires_session() => RouteDecision::Redirect(AppRoute::SignIn),
        SessionStatus::Authenticated if route.is_auth_screen() => RouteDecision::Redirect(AppRoute::Recipes),
        _ => RouteDecision::Render(route),
    }
}
