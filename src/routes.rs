//! Navigable surface of the app as data.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` declares the same table with `leptos_router` components. This
//! module mirrors it so navigation decisions (guard redirects, return-to
//! targets, status-driven redirects) can be made and tested without a router.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    SignIn,
    SignUp,
    SignOut,
    CreateCourse,
    CourseDetail(String),
    UpdateCourse(String),
    NotFound,
    Forbidden,
    Error,
}

impl AppRoute {
    /// Browser path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::SignIn => "/signin".to_owned(),
            Self::SignUp => "/signup".to_owned(),
            Self::SignOut => "/signout".to_owned(),
            Self::CreateCourse => "/courses/create".to_owned(),
            Self::CourseDetail(id) => format!("/courses/{id}"),
            Self::UpdateCourse(id) => format!("/courses/{id}/update"),
            Self::NotFound => "/notfound".to_owned(),
            Self::Forbidden => "/forbidden".to_owned(),
            Self::Error => "/error".to_owned(),
        }
    }

    /// Routes wrapped by the auth guard.
    pub fn requires_session(&self) -> bool {
        matches!(self, Self::CreateCourse | Self::UpdateCourse(_))
    }

    /// Routes that manage identity; never used as a post-sign-in destination.
    pub fn is_auth_flow(&self) -> bool {
        matches!(self, Self::SignIn | Self::SignUp | Self::SignOut)
    }
}

/// Match `path` against the route table; unmatched paths resolve to `NotFound`.
///
/// Explicit routes are tried first, so `/courses/create` never reads as a
/// course id. Query strings, fragments, and a trailing slash are ignored.
pub fn resolve(path: &str) -> AppRoute {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => AppRoute::Home,
        ["signin"] => AppRoute::SignIn,
        ["signup"] => AppRoute::SignUp,
        ["signout"] => AppRoute::SignOut,
        ["courses", "create"] => AppRoute::CreateCourse,
        ["courses", id] => AppRoute::CourseDetail((*id).to_owned()),
        ["courses", id, "update"] => AppRoute::UpdateCourse((*id).to_owned()),
        ["notfound"] => AppRoute::NotFound,
        ["forbidden"] => AppRoute::Forbidden,
        ["error"] => AppRoute::Error,
        _ => AppRoute::NotFound,
    }
}
