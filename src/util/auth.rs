//! Reactive glue between the session store and the router.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app shell evaluates the pure guard in one place so every screen gets
//! identical redirect behavior on mount and on every session mutation.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionStatus, SessionStore};
use crate::util::route::{RouteDecision, decide_route};

/// Mirror the store's status into a signal that effects can track.
pub fn session_signal(session: &SessionStore) -> RwSignal<SessionStatus> {
    let status = RwSignal::new(session.status());
    session.subscribe(move |next| {
        status.try_set(next);
    });
    status
}

/// Re-check the session when another tab writes the token key.
///
/// Browsers only fire `storage` events in tabs other than the writer, so
/// same-tab mutations still go through the store directly.
#[cfg(feature = "csr")]
pub fn install_storage_sync(session: &SessionStore) {
    let session = session.clone();
    let _listener = window_event_listener(leptos::ev::storage, move |ev| {
        // A `None` key means the whole storage area was cleared.
        let touches_session = ev.key().is_none_or(|key| key == session.storage_key());
        if touches_session {
            log::debug!("session storage changed in another tab");
            session.refresh();
        }
    });
}

#[cfg(not(feature = "csr"))]
pub fn install_storage_sync(session: &SessionStore) {
    let _ = session;
}

/// Guard decision for the current pathname, recomputed when either input changes.
pub fn route_decision(status: RwSignal<SessionStatus>, pathname: Memo<String>) -> Memo<RouteDecision> {
    Memo::new(move |_| decide_route(status.get(), &pathname.get()))
}

/// Replace the current history entry whenever the guard asks for a redirect.
pub fn install_route_guard<F>(decision: Memo<RouteDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let RouteDecision::Redirect(target) = decision.get() {
            let path = target.path();
            log::debug!("route guard redirecting to {path}");
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
