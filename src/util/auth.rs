//! Auth guard decision shared by guarded routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::require_session::RequireSession` evaluates this on every
//! navigation into a guarded route. The check only shapes the UI; the API
//! answers 401/403 regardless of what the client decided.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::outcome::ViewOutcome;
use crate::net::types::Course;
use crate::routes::AppRoute;
use crate::state::session::SessionStore;
use crate::util::storage::KeyValueStore;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Send the user to sign-in, remembering `return_to`.
    RedirectToSignIn { return_to: String },
}

/// Absent and unreadable sessions both count as signed out, since
/// `SessionStore::restore` drops anything it cannot decode.
pub fn guard_decision<S: KeyValueStore>(store: &SessionStore<S>, requested_path: &str) -> GuardDecision {
    if store.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::RedirectToSignIn { return_to: requested_path.to_owned() }
    }
}

/// Gate for the update form once its course has loaded: only the owner proceeds.
pub fn edit_gate<S: KeyValueStore>(store: &SessionStore<S>, course: Course) -> ViewOutcome<Course> {
    if store.owns(&course) {
        ViewOutcome::Render(course)
    } else {
        log::warn!("course {} is not owned by the current user", course.id);
        ViewOutcome::Navigate(AppRoute::Forbidden)
    }
}
