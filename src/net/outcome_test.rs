use super::*;

fn course(id: u64) -> Course {
    Course {
        id,
        title: "Build a Basic Bookcase".to_owned(),
        description: String::new(),
        estimated_time: None,
        materials_needed: None,
        owner: None,
    }
}

fn server_failure() -> ApiError {
    ApiError::ServerFailure("unexpected status 500".to_owned())
}

// =============================================================
// ApiError::check
// =============================================================

#[test]
fn check_passes_success_through() {
    let resp = ApiResponse::new(201).with_location("/api/courses/42");
    assert_eq!(ApiError::check(resp.clone()), Ok(resp));
}

#[test]
fn check_classifies_known_statuses() {
    assert_eq!(ApiError::check(ApiResponse::new(401)), Err(ApiError::Unauthorized));
    assert_eq!(ApiError::check(ApiResponse::new(403)), Err(ApiError::Forbidden));
    assert_eq!(ApiError::check(ApiResponse::new(404)), Err(ApiError::NotFound));
}

#[test]
fn check_reads_validation_messages_from_400() {
    let resp = ApiResponse::new(400).with_body(r#"{"errors":["Title is required"]}"#);
    assert_eq!(
        ApiError::check(resp),
        Err(ApiError::ValidationFailed(vec!["Title is required".to_owned()]))
    );
}

#[test]
fn check_treats_other_statuses_as_server_failure() {
    for status in [302, 409, 418, 500, 502, 503] {
        assert!(
            matches!(ApiError::check(ApiResponse::new(status)), Err(ApiError::ServerFailure(_))),
            "status {status}"
        );
    }
}

// =============================================================
// list / detail
// =============================================================

#[test]
fn list_renders_on_success_and_escalates_everything_else() {
    assert_eq!(list_outcome(Ok(vec![course(1)])), ViewOutcome::Render(vec![course(1)]));
    for err in [ApiError::NotFound, ApiError::Forbidden, ApiError::Unauthorized, server_failure()] {
        assert_eq!(list_outcome(Err(err)), ViewOutcome::Navigate(AppRoute::Error));
    }
}

#[test]
fn detail_missing_course_goes_to_not_found() {
    assert_eq!(detail_outcome(Err(ApiError::NotFound)), ViewOutcome::Navigate(AppRoute::NotFound));
    assert_eq!(detail_outcome(Err(server_failure())), ViewOutcome::Navigate(AppRoute::Error));
    assert_eq!(detail_outcome(Ok(course(7))), ViewOutcome::Render(course(7)));
}

// =============================================================
// create
// =============================================================

#[test]
fn create_navigates_to_new_course() {
    assert_eq!(
        create_outcome(Ok(Some("42".to_owned()))),
        ViewOutcome::Navigate(AppRoute::CourseDetail("42".to_owned()))
    );
}

#[test]
fn create_without_location_goes_home() {
    assert_eq!(create_outcome(Ok(None)), ViewOutcome::Navigate(AppRoute::Home));
}

#[test]
fn create_shows_validation_and_auth_errors_inline() {
    assert_eq!(
        create_outcome(Err(ApiError::ValidationFailed(vec!["Title is required".to_owned()]))),
        ViewOutcome::ShowErrors(vec!["Title is required".to_owned()])
    );
    assert_eq!(
        create_outcome(Err(ApiError::Unauthorized)),
        ViewOutcome::ShowErrors(vec![CREATE_UNAUTHORIZED_MESSAGE.to_owned()])
    );
}

#[test]
fn create_escalates_unhandled_statuses() {
    for err in [ApiError::Forbidden, ApiError::NotFound, server_failure()] {
        assert_eq!(create_outcome(Err(err)), ViewOutcome::Navigate(AppRoute::Error));
    }
}

// =============================================================
// update
// =============================================================

#[test]
fn update_success_returns_to_detail() {
    assert_eq!(update_outcome("5", Ok(())), ViewOutcome::Navigate(AppRoute::CourseDetail("5".to_owned())));
}

#[test]
fn update_maps_every_status() {
    assert_eq!(
        update_outcome("5", Err(ApiError::ValidationFailed(vec!["Description is required".to_owned()]))),
        ViewOutcome::ShowErrors(vec!["Description is required".to_owned()])
    );
    assert_eq!(
        update_outcome("5", Err(ApiError::Unauthorized)),
        ViewOutcome::ShowErrors(vec![UPDATE_UNAUTHORIZED_MESSAGE.to_owned()])
    );
    assert_eq!(update_outcome("5", Err(ApiError::Forbidden)), ViewOutcome::Navigate(AppRoute::Forbidden));
    assert_eq!(update_outcome("5", Err(ApiError::NotFound)), ViewOutcome::Navigate(AppRoute::NotFound));
    assert_eq!(update_outcome("5", Err(server_failure())), ViewOutcome::Navigate(AppRoute::Error));
}

// =============================================================
// delete
// =============================================================

#[test]
fn delete_as_owner_goes_home() {
    assert_eq!(delete_outcome(Ok(())), ViewOutcome::Navigate(AppRoute::Home));
}

#[test]
fn delete_forbidden_goes_to_forbidden() {
    assert_eq!(delete_outcome(Err(ApiError::Forbidden)), ViewOutcome::Navigate(AppRoute::Forbidden));
}

#[test]
fn delete_unauthorized_alerts_and_stays() {
    assert_eq!(
        delete_outcome(Err(ApiError::Unauthorized)),
        ViewOutcome::Alert(DELETE_UNAUTHORIZED_MESSAGE.to_owned())
    );
}

#[test]
fn delete_other_failures() {
    assert_eq!(delete_outcome(Err(ApiError::NotFound)), ViewOutcome::Navigate(AppRoute::NotFound));
    assert_eq!(delete_outcome(Err(server_failure())), ViewOutcome::Navigate(AppRoute::Error));
    assert_eq!(
        delete_outcome(Err(ApiError::ValidationFailed(vec!["x".to_owned()]))),
        ViewOutcome::Navigate(AppRoute::Error)
    );
}
