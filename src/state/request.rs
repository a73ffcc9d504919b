//! Per-view request lifecycle.
//!
//! Each list/detail/create/update view walks `Idle -> Loading -> {Ready | Failed}`
//! once per operation. `Busy` state doubles as the duplicate-submit guard.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    /// The view is leaving for an error route; nothing to render.
    Failed,
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Submission state for form views.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub busy: bool,
    pub errors: Vec<String>,
}

impl FormState {
    /// Start a submission. Returns `false` when one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.errors.clear();
        true
    }

    /// Finish without navigating, showing `errors` (possibly empty).
    pub fn finish(&mut self, errors: Vec<String>) {
        self.busy = false;
        self.errors = errors;
    }
}
