//! Status-code taxonomy and the per-view mapping from API results to outcomes.
//!
//! DESIGN
//! ======
//! `ApiError::check` classifies any response once. The `*_outcome` functions
//! then decide, per operation, whether an error is shown inline, raised as an
//! alert, or escalated to a full-page error route. Anything an operation does
//! not handle explicitly lands on `/error`.

#[cfg(test)]
#[path = "outcome_test.rs"]
mod outcome_test;

use super::transport::ApiResponse;
use super::types::{Course, ErrorPayload};
use crate::routes::AppRoute;

pub const CREATE_UNAUTHORIZED_MESSAGE: &str = "You must be signed in to create courses.";
pub const UPDATE_UNAUTHORIZED_MESSAGE: &str = "You must be signed in to update courses.";
pub const DELETE_UNAUTHORIZED_MESSAGE: &str = "You must be signed in to delete courses.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 400 with the server's messages.
    #[error("validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
    /// 401.
    #[error("authentication required")]
    Unauthorized,
    /// 403.
    #[error("forbidden")]
    Forbidden,
    /// 404.
    #[error("not found")]
    NotFound,
    /// 500, any other non-2xx, transport failure, or undecodable body.
    #[error("server failure: {0}")]
    ServerFailure(String),
}

impl ApiError {
    /// Pass 2xx responses through, classify everything else.
    pub fn check(response: ApiResponse) -> Result<ApiResponse, Self> {
        match response.status {
            200..=299 => Ok(response),
            400 => Err(Self::ValidationFailed(ErrorPayload::parse(&response.body).into_messages())),
            401 => Err(Self::Unauthorized),
            403 => Err(Self::Forbidden),
            404 => Err(Self::NotFound),
            status => Err(Self::ServerFailure(format!("unexpected status {status}"))),
        }
    }
}

/// What a view does with the result of one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewOutcome<T> {
    /// Stay and render the data.
    Render(T),
    /// Leave the view.
    Navigate(AppRoute),
    /// Stay and show these messages in the validation list.
    ShowErrors(Vec<String>),
    /// Stay and raise a blocking alert.
    Alert(String),
}

fn escalate<T>(err: &ApiError) -> ViewOutcome<T> {
    log::error!("escalating to error view: {err}");
    ViewOutcome::Navigate(AppRoute::Error)
}

/// Course list: only success renders.
pub fn list_outcome(result: Result<Vec<Course>, ApiError>) -> ViewOutcome<Vec<Course>> {
    match result {
        Ok(courses) => ViewOutcome::Render(courses),
        Err(err) => escalate(&err),
    }
}

/// Course detail (also the initial load of the update form).
pub fn detail_outcome(result: Result<Course, ApiError>) -> ViewOutcome<Course> {
    match result {
        Ok(course) => ViewOutcome::Render(course),
        Err(ApiError::NotFound) => ViewOutcome::Navigate(AppRoute::NotFound),
        Err(err) => escalate(&err),
    }
}

/// Create: go to the new course, or home when `Location` is missing.
pub fn create_outcome(result: Result<Option<String>, ApiError>) -> ViewOutcome<()> {
    match result {
        Ok(Some(id)) => ViewOutcome::Navigate(AppRoute::CourseDetail(id)),
        Ok(None) => ViewOutcome::Navigate(AppRoute::Home),
        Err(ApiError::ValidationFailed(messages)) => ViewOutcome::ShowErrors(messages),
        Err(ApiError::Unauthorized) => ViewOutcome::ShowErrors(vec![CREATE_UNAUTHORIZED_MESSAGE.to_owned()]),
        Err(err @ (ApiError::Forbidden | ApiError::NotFound | ApiError::ServerFailure(_))) => escalate(&err),
    }
}

/// Update: back to the detail view of `id`.
pub fn update_outcome(id: &str, result: Result<(), ApiError>) -> ViewOutcome<()> {
    match result {
        Ok(()) => ViewOutcome::Navigate(AppRoute::CourseDetail(id.to_owned())),
        Err(ApiError::ValidationFailed(messages)) => ViewOutcome::ShowErrors(messages),
        Err(ApiError::Unauthorized) => ViewOutcome::ShowErrors(vec![UPDATE_UNAUTHORIZED_MESSAGE.to_owned()]),
        Err(ApiError::Forbidden) => ViewOutcome::Navigate(AppRoute::Forbidden),
        Err(ApiError::NotFound) => ViewOutcome::Navigate(AppRoute::NotFound),
        Err(err @ ApiError::ServerFailure(_)) => escalate(&err),
    }
}

/// Delete: home on success, alert and stay on 401.
pub fn delete_outcome(result: Result<(), ApiError>) -> ViewOutcome<()> {
    match result {
        Ok(()) => ViewOutcome::Navigate(AppRoute::Home),
        Err(ApiError::Unauthorized) => ViewOutcome::Alert(DELETE_UNAUTHORIZED_MESSAGE.to_owned()),
        Err(ApiError::Forbidden) => ViewOutcome::Navigate(AppRoute::Forbidden),
        Err(ApiError::NotFound) => ViewOutcome::Navigate(AppRoute::NotFound),
        Err(err @ (ApiError::ValidationFailed(_) | ApiError::ServerFailure(_))) => escalate(&err),
    }
}
