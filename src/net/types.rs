//! Wire DTOs for the course-catalog REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the API's camelCase JSON. The owning user of a course is
//! sent under the key `User`; `owner` is accepted as an alias so fixtures and
//! alternative backends decode the same way.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Numeric primary key used by both courses and users.
pub type RecordId = u64;

/// A course as returned by `GET /api/courses` and `GET /api/courses/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: RecordId,
    pub title: String,
    /// Markdown source.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub estimated_time: Option<String>,
    /// Markdown source.
    #[serde(default)]
    pub materials_needed: Option<String>,
    #[serde(rename = "User", alias = "owner", default)]
    pub owner: Option<UserRef>,
}

impl Course {
    /// Display name of the owning user, or `"Unknown User"`.
    pub fn owner_name(&self) -> String {
        self.owner
            .as_ref()
            .map_or_else(|| "Unknown User".to_owned(), UserRef::full_name)
    }
}

/// The owning user embedded in a course payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: RecordId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email_address: Option<String>,
}

impl UserRef {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Identity returned by `GET /api/users` for valid Basic credentials.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email_address: Option<String>,
}

/// Body for `POST /api/courses` and `PUT /api/courses/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

impl CourseDraft {
    /// Build a draft from raw form inputs; blank optional fields become `null`.
    pub fn from_form(title: &str, description: &str, estimated_time: &str, materials_needed: &str) -> Self {
        Self {
            title: title.to_owned(),
            description: description.to_owned(),
            estimated_time: non_empty(estimated_time),
            materials_needed: non_empty(materials_needed),
        }
    }
}

fn non_empty(raw: &str) -> Option<String> {
    if raw.is_empty() { None } else { Some(raw.to_owned()) }
}

/// Body for `POST /api/users`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email_address", &self.email_address)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Error body shapes the API sends with a 400.
///
/// Variants are tried in order: a list under `errors`, then a single
/// `message`, then anything else.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Errors { errors: Vec<String> },
    Message { message: String },
    Unrecognized(serde_json::Value),
}

pub const GENERIC_VALIDATION_MESSAGE: &str = "Validation failed. Please check your input.";

impl ErrorPayload {
    /// Decode a response body, treating empty or non-JSON bodies as unrecognized.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or(Self::Unrecognized(serde_json::Value::Null))
    }

    /// Messages to show in the validation error list.
    pub fn into_messages(self) -> Vec<String> {
        match self {
            Self::Errors { errors } if !errors.is_empty() => errors,
            Self::Message { message } => vec![message],
            Self::Errors { .. } | Self::Unrecognized(_) => vec![GENERIC_VALIDATION_MESSAGE.to_owned()],
        }
    }
}
