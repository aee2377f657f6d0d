//! Liveness flag for async work started by a mounted view.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// Flag that reads `true` until the owning view is disposed.
///
/// Fetch tasks check it before writing signals so a response that lands
/// after navigation does not touch a torn-down screen.
pub fn mounted_flag() -> Arc<AtomicBool> {
    let alive = Arc::new(AtomicBool::new(true));
    let on_drop = Arc::clone(&alive);
    on_cleanup(move || on_drop.store(false, Ordering::Relaxed));
    alive
}

pub fn is_mounted(flag: &AtomicBool) -> bool {
    flag.load(Ordering::Relaxed)
}
