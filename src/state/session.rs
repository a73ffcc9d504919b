//! Session store for the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app provides one `RwSignal<SessionStore<BrowserStorage>>` via context.
//! Views read it to derive Basic-auth headers and ownership, and only the
//! sign-in, sign-up, and sign-out flows write it.
//!
//! DESIGN
//! ======
//! The API has no token endpoint, so the submitted email and password are kept
//! with the identity and re-encoded into an `Authorization` header per request.
//! Every change to the in-memory session is written through to the storage
//! slot before the method returns; an absent or unreadable slot means signed
//! out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use leptos::prelude::RwSignal;
use serde::{Deserialize, Serialize};

use crate::config::{ClientConfig, SESSION_STORAGE_KEY};
use crate::net::api;
use crate::net::outcome::ApiError;
use crate::net::transport::Transport;
use crate::net::types::{AuthenticatedUser, Course, NewUser, RecordId};
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Context handle shared by every view.
pub type SessionSignal = RwSignal<SessionStore<BrowserStorage>>;

/// Authenticated identity plus the credentials needed to re-derive auth headers.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email_address", &self.email_address)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Session {
    fn from_identity(user: AuthenticatedUser, email_address: &str, password: &str) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email_address: email_address.to_owned(),
            password: password.to_owned(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Client-side ownership check. The API still decides with a 403.
    pub fn owns(&self, course: &Course) -> bool {
        course.owner.as_ref().is_some_and(|owner| owner.id == self.id)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Sign in failed")]
    SignInFailed,
    #[error("{}", .0.join("; "))]
    ValidationFailed(Vec<String>),
    #[error("Sign up failed")]
    SignUpFailed,
}

impl SessionError {
    /// Lines for the validation error list.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::ValidationFailed(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

/// `Authorization` value for HTTP Basic authentication.
pub fn basic_auth_value(email_address: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{email_address}:{password}")))
}

/// Current session mirrored to a key-value slot.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    current: Option<Session>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// A signed-out store; nothing is read from `storage` yet.
    pub fn new(storage: S) -> Self {
        Self { storage, current: None }
    }

    /// A store initialized from whatever `storage` holds.
    pub fn restored(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.restore();
        store
    }

    /// Load the persisted session. A slot that does not decode is removed and
    /// the store stays signed out; no error reaches the caller.
    pub fn restore(&mut self) {
        self.current = None;
        let Some(raw) = self.storage.get(SESSION_STORAGE_KEY) else {
            return;
        };
        match serde_json::from_str::<Session>(&raw) {
            Ok(session) => {
                log::info!("restored session for user {}", session.id);
                self.current = Some(session);
            }
            Err(e) => {
                log::warn!("discarding unreadable persisted session: {e}");
                self.storage.remove(SESSION_STORAGE_KEY);
            }
        }
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the signed-in user may see update/delete controls for `course`.
    pub fn owns(&self, course: &Course) -> bool {
        self.current.as_ref().is_some_and(|session| session.owns(course))
    }

    fn establish(&mut self, session: Session) {
        match serde_json::to_string(&session) {
            Ok(raw) => self.storage.set(SESSION_STORAGE_KEY, &raw),
            Err(e) => log::error!("session serialization failed: {e}"),
        }
        self.current = Some(session);
    }

    /// Check credentials with `GET /api/users` and, on success, persist and
    /// return the new session. On failure the current session is untouched.
    ///
    /// # Errors
    ///
    /// `InvalidCredentials` on 401, `SignInFailed` for anything else.
    pub async fn sign_in<T: Transport>(
        &mut self,
        transport: &T,
        config: &ClientConfig,
        email_address: &str,
        password: &str,
    ) -> Result<Session, SessionError> {
        let headers = vec![
            ("Authorization".to_owned(), basic_auth_value(email_address, password)),
            ("Content-Type".to_owned(), "application/json".to_owned()),
        ];
        let user = api::fetch_authenticated_user(transport, config, headers)
            .await
            .map_err(|e| match e {
                ApiError::Unauthorized => SessionError::InvalidCredentials,
                other => {
                    log::warn!("sign in failed: {other}");
                    SessionError::SignInFailed
                }
            })?;
        let session = Session::from_identity(user, email_address, password);
        log::info!("signed in as user {}", session.id);
        self.establish(session.clone());
        Ok(session)
    }

    /// Register with `POST /api/users`, then sign in with the same credentials.
    ///
    /// # Errors
    ///
    /// `ValidationFailed` on 400, `SignUpFailed` for other registration
    /// failures, or whatever the follow-up sign-in reports.
    pub async fn sign_up<T: Transport>(
        &mut self,
        transport: &T,
        config: &ClientConfig,
        profile: &NewUser,
    ) -> Result<Session, SessionError> {
        api::register_user(transport, config, profile).await.map_err(|e| match e {
            ApiError::ValidationFailed(messages) => SessionError::ValidationFailed(messages),
            other => {
                log::warn!("sign up failed: {other}");
                SessionError::SignUpFailed
            }
        })?;
        self.sign_in(transport, config, &profile.email_address, &profile.password).await
    }

    /// Forget the session and its persisted slot. Safe to call when signed out.
    pub fn sign_out(&mut self) {
        if let Some(session) = self.current.take() {
            log::info!("signed out user {}", session.id);
        }
        self.storage.remove(SESSION_STORAGE_KEY);
    }

    /// Headers for authenticated writes: Basic auth when signed in, always JSON.
    pub fn auth_headers(&self) -> Vec<(String, String)> {
        let mut headers = Vec::with_capacity(2);
        if let Some(session) = &self.current {
            headers.push((
                "Authorization".to_owned(),
                basic_auth_value(&session.email_address, &session.password),
            ));
        }
        headers.push(("Content-Type".to_owned(), "application/json".to_owned()));
        headers
    }
}
