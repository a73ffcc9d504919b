//! REST calls against the course-catalog API.
//!
//! Each function issues exactly one request through a `Transport` and turns
//! the response into typed data or an `ApiError`. Which error becomes which
//! navigation is decided per view in `net::outcome`.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and undecodable success bodies both surface as
//! `ApiError::ServerFailure`, so every call path ends in a typed result.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::outcome::ApiError;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use super::types::{AuthenticatedUser, Course, CourseDraft, NewUser};
use crate::config::ClientConfig;

pub const COURSES_PATH: &str = "/api/courses";
pub const USERS_PATH: &str = "/api/users";

fn course_path(id: &str) -> String {
    format!("{COURSES_PATH}/{id}")
}

fn json_headers() -> Vec<(String, String)> {
    vec![("Content-Type".to_owned(), "application/json".to_owned())]
}

/// Send `request` and classify the status; 2xx passes through untouched.
async fn exchange<T: Transport>(transport: &T, request: ApiRequest) -> Result<ApiResponse, ApiError> {
    let method = request.method;
    let url = request.url.clone();
    let response = transport.send(request).await.map_err(|e| {
        log::error!("{} {url} failed: {e}", method.as_str());
        ApiError::ServerFailure(e.to_string())
    })?;
    if !response.is_success() {
        log::warn!("{} {url} -> {}", method.as_str(), response.status);
    }
    ApiError::check(response)
}

fn decode<D: DeserializeOwned>(response: &ApiResponse) -> Result<D, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::ServerFailure(format!("invalid response body: {e}")))
}

fn encode<S: serde::Serialize>(value: &S) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::ServerFailure(e.to_string()))
}

/// `GET /api/courses`.
pub async fn fetch_courses<T: Transport>(transport: &T, config: &ClientConfig) -> Result<Vec<Course>, ApiError> {
    let request = ApiRequest::new(Method::Get, config.endpoint(COURSES_PATH));
    let response = exchange(transport, request).await?;
    decode(&response)
}

/// `GET /api/courses/{id}`.
pub async fn fetch_course<T: Transport>(transport: &T, config: &ClientConfig, id: &str) -> Result<Course, ApiError> {
    let request = ApiRequest::new(Method::Get, config.endpoint(&course_path(id)));
    let response = exchange(transport, request).await?;
    decode(&response)
}

/// `POST /api/courses`. Returns the new course id taken from `Location`, if any.
pub async fn create_course<T: Transport>(
    transport: &T,
    config: &ClientConfig,
    auth_headers: Vec<(String, String)>,
    draft: &CourseDraft,
) -> Result<Option<String>, ApiError> {
    let request = ApiRequest::new(Method::Post, config.endpoint(COURSES_PATH))
        .with_headers(auth_headers)
        .with_body(encode(draft)?);
    let response = exchange(transport, request).await?;
    Ok(response.location.as_deref().and_then(id_from_location))
}

/// `PUT /api/courses/{id}`.
pub async fn update_course<T: Transport>(
    transport: &T,
    config: &ClientConfig,
    auth_headers: Vec<(String, String)>,
    id: &str,
    draft: &CourseDraft,
) -> Result<(), ApiError> {
    let request = ApiRequest::new(Method::Put, config.endpoint(&course_path(id)))
        .with_headers(auth_headers)
        .with_body(encode(draft)?);
    exchange(transport, request).await.map(|_| ())
}

/// `DELETE /api/courses/{id}`.
pub async fn delete_course<T: Transport>(
    transport: &T,
    config: &ClientConfig,
    auth_headers: Vec<(String, String)>,
    id: &str,
) -> Result<(), ApiError> {
    let request = ApiRequest::new(Method::Delete, config.endpoint(&course_path(id))).with_headers(auth_headers);
    exchange(transport, request).await.map(|_| ())
}

/// `GET /api/users` with the caller's Basic credentials.
pub async fn fetch_authenticated_user<T: Transport>(
    transport: &T,
    config: &ClientConfig,
    auth_headers: Vec<(String, String)>,
) -> Result<AuthenticatedUser, ApiError> {
    let request = ApiRequest::new(Method::Get, config.endpoint(USERS_PATH)).with_headers(auth_headers);
    let response = exchange(transport, request).await?;
    decode(&response)
}

/// `POST /api/users`.
pub async fn register_user<T: Transport>(transport: &T, config: &ClientConfig, user: &NewUser) -> Result<(), ApiError> {
    let request = ApiRequest::new(Method::Post, config.endpoint(USERS_PATH))
        .with_headers(json_headers())
        .with_body(encode(user)?);
    exchange(transport, request).await.map(|_| ())
}

/// Last path segment of a `Location` value such as `/api/courses/42`.
/// A trailing slash leaves the final segment empty, which yields `None`.
pub fn id_from_location(location: &str) -> Option<String> {
    location
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
}
