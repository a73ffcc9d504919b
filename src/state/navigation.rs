//! Transient navigation state shared between the auth guard and sign-in.
//!
//! The guard records where an unauthenticated user was headed; sign-in takes
//! that path exactly once after success.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use crate::routes::{AppRoute, resolve};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    return_to: Option<String>,
}

impl NavigationState {
    pub fn remember(&mut self, path: &str) {
        self.return_to = Some(path.to_owned());
    }

    pub fn pending(&self) -> Option<&str> {
        self.return_to.as_deref()
    }

    /// Consume the remembered path, falling back to `/`.
    ///
    /// Paths that resolve to the catch-all or to another auth view are
    /// replaced by `/` so sign-in never bounces back into itself.
    pub fn take_return_path(&mut self) -> String {
        self.return_to
            .take()
            .filter(|path| {
                let route = resolve(path);
                route != AppRoute::NotFound && !route.is_auth_flow()
            })
            .unwrap_or_else(|| AppRoute::Home.path())
    }
}
