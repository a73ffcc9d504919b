//! Mounted-flag for views that await network responses.
//!
//! A response can resolve after its view was torn down by navigation. Views
//! check `is_mounted` after every await and drop the result otherwise.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    /// Create a flag that flips to unmounted when the current owner is cleaned up.
    pub fn install() -> Self {
        let alive = Arc::new(AtomicBool::new(true));
        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));
        Self { alive }
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}
