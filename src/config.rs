//! Client configuration fixed at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read process environment at runtime, so the API
//! origin is baked in through `option_env!` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// `localStorage` slot holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "authenticatedUser";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API origin without a trailing slash.
    pub api_base_url: String,
}

impl ClientConfig {
    /// Resolve config from `COURSES_API_URL` as seen by the compiler.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("COURSES_API_URL"))
    }

    fn from_raw(raw: Option<&str>) -> Self {
        let base = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { api_base_url: base }
    }

    /// Absolute URL for an API path such as `/api/courses`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_raw(None)
    }
}
