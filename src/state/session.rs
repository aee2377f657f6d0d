//! Observable session context for the signed-in browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token in persistent storage is the single source of truth for "is a
//! user signed in". Screens receive a `SessionStore` through Leptos context
//! instead of reading storage directly; the app shell subscribes to it and
//! re-runs the navigation guard whenever the status flips.
//!
//! DESIGN
//! ======
//! Reads always go to storage. Listeners are invoked only on a real status
//! change and outside the listener lock, so a listener may call back into
//! the store. The last status listeners saw is kept so a write made by
//! another tab can be picked up with [`SessionStore::refresh`].

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::config::ClientConfig;
use crate::util::storage::{BrowserStorage, MemoryStorage, TokenStorage};

/// What the navigation guard observes about the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    Authenticated,
    #[default]
    Anonymous,
}

impl SessionStatus {
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }

    fn of(token: Option<&str>) -> Self {
        if token.is_some_and(|t| !t.is_empty()) { Self::Authenticated } else { Self::Anonymous }
    }
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Arc<dyn Fn(SessionStatus) + Send + Sync>;

struct Inner {
    storage: Box<dyn TokenStorage>,
    key: String,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
    observed: Mutex<SessionStatus>,
}

/// Shared, cheaply cloneable session handle.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("key", &self.inner.key)
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    pub fn new(storage: impl TokenStorage + 'static, key: impl Into<String>) -> Self {
        let key = key.into();
        let observed = SessionStatus::of(storage.load(&key).as_deref());
        Self {
            inner: Arc::new(Inner {
                storage: Box::new(storage),
                key,
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                observed: Mutex::new(observed),
            }),
        }
    }

    /// Session persisted in `localStorage` under the configured key.
    pub fn browser(config: &ClientConfig) -> Self {
        Self::new(BrowserStorage, config.token_storage_key.clone())
    }

    pub fn in_memory(config: &ClientConfig) -> Self {
        Self::new(MemoryStorage::new(), config.token_storage_key.clone())
    }

    /// The stored credential, verbatim (including its `Token ` prefix).
    pub fn token(&self) -> Option<String> {
        self.inner.storage.load(&self.inner.key).filter(|t| !t.is_empty())
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus::of(self.token().as_deref())
    }

    /// Replace the active credential. Only one token is ever active.
    pub fn set_token(&self, token: &str) {
        self.inner.storage.store(&self.inner.key, token);
        log::debug!("session token stored");
        self.notify_if_changed();
    }

    /// Drop the active credential. Safe to call when already signed out.
    pub fn clear(&self) {
        let was_authenticated = self.status().is_authenticated();
        self.inner.storage.remove(&self.inner.key);
        if was_authenticated {
            log::info!("session cleared");
        }
        self.notify_if_changed();
    }

    /// Re-read storage after it was written elsewhere (another tab) and
    /// notify listeners if the status moved.
    pub fn refresh(&self) {
        self.notify_if_changed();
    }

    pub fn storage_key(&self) -> &str {
        &self.inner.key
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(SessionStatus) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners().push((id, Arc::new(listener)));
        id
    }

    /// Returns `false` when `id` was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn listeners(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriptionId, Listener)>> {
        self.inner.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn notify_if_changed(&self) {
        let after = self.status();
        {
            let mut observed = self.inner.observed.lock().unwrap_or_else(PoisonError::into_inner);
            if *observed == after {
                return;
            }
            *observed = after;
        }
        let snapshot: Vec<Listener> = self.listeners().iter().map(|(_, l)| Arc::clone(l)).collect();
        for listener in snapshot {
            listener(after);
        }
    }
}
