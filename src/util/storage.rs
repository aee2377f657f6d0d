//! Persistent key/value storage backing the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserStorage` wraps `window.localStorage` in the browser build and
//! degrades to a no-op elsewhere. `MemoryStorage` is the process-local
//! stand-in used by tests and non-browser builds.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Minimal string storage contract the session store depends on.
pub trait TokenStorage: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: TokenStorage + ?Sized> TokenStorage for Arc<T> {
    fn load(&self, key: &str) -> Option<String> {
        (**self).load(key)
    }

    fn store(&self, key: &str, value: &str) {
        (**self).store(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// `localStorage`-backed storage. Survives reloads within one browser profile.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn store(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; token not persisted");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("failed to write {key} to localStorage");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; {key} not removed");
                return;
            };
            if storage.remove_item(key).is_err() {
                log::warn!("failed to remove {key} from localStorage");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-memory storage; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.store(key, value);
        storage
    }
}

impl TokenStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}
