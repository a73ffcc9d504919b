use futures::executor::block_on;

use super::*;
use crate::net::outcome::{ViewOutcome, create_outcome, detail_outcome};
use crate::net::transport::{MockTransport, TransportError};
use crate::routes::AppRoute;

fn config() -> ClientConfig {
    ClientConfig { api_base_url: "http://api.test".to_owned() }
}

fn auth() -> Vec<(String, String)> {
    vec![("Authorization".to_owned(), "Basic am9lQHNtaXRoLmNvbTpqb2VwYXNzd29yZA==".to_owned())]
}

// =============================================================
// Location parsing
// =============================================================

#[test]
fn id_from_location_takes_last_segment() {
    assert_eq!(id_from_location("/api/courses/42"), Some("42".to_owned()));
    assert_eq!(id_from_location("http://api.test/api/courses/42"), Some("42".to_owned()));
    assert_eq!(id_from_location(""), None);
    assert_eq!(id_from_location("/"), None);
}

#[test]
fn id_from_location_trailing_slash_has_no_id() {
    assert_eq!(id_from_location("/api/courses/"), None);
    assert_eq!(id_from_location("http://api.test/api/courses/42/"), None);
}

// =============================================================
// Reads
// =============================================================

#[test]
fn fetch_courses_decodes_list() {
    let mock = MockTransport::replying([Ok(ApiResponse::new(200).with_body(
        r#"[{"id":1,"title":"Bookcase","description":"d","User":{"id":1,"firstName":"Joe","lastName":"Smith"}}]"#,
    ))]);
    let courses = block_on(fetch_courses(&mock, &config())).unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].title, "Bookcase");

    let sent = mock.requests();
    assert_eq!(sent[0].method, Method::Get);
    assert_eq!(sent[0].url, "http://api.test/api/courses");
}

#[test]
fn fetch_course_missing_maps_to_not_found_route() {
    let mock = MockTransport::replying([Ok(ApiResponse::new(404))]);
    let result = block_on(fetch_course(&mock, &config(), "999"));
    assert_eq!(mock.requests()[0].url, "http://api.test/api/courses/999");
    assert_eq!(detail_outcome(result), ViewOutcome::Navigate(AppRoute::NotFound));
}

#[test]
fn undecodable_success_body_is_server_failure() {
    let mock = MockTransport::replying([Ok(ApiResponse::new(200).with_body("<html>"))]);
    assert!(matches!(block_on(fetch_courses(&mock, &config())), Err(ApiError::ServerFailure(_))));
}

#[test]
fn transport_failure_is_server_failure() {
    let mock = MockTransport::replying([Err(TransportError::Network("offline".to_owned()))]);
    assert!(matches!(
        block_on(fetch_course(&mock, &config(), "1")),
        Err(ApiError::ServerFailure(_))
    ));
}

// =============================================================
// Writes
// =============================================================

#[test]
fn create_course_reads_location_header() {
    let mock = MockTransport::replying([Ok(ApiResponse::new(201).with_location("/api/courses/42"))]);
    let draft = CourseDraft::from_form("New", "Body", "", "");
    let result = block_on(create_course(&mock, &config(), auth(), &draft));
    assert_eq!(result, Ok(Some("42".to_owned())));
    assert_eq!(create_outcome(result), ViewOutcome::Navigate(AppRoute::CourseDetail("42".to_owned())));

    let sent = &mock.requests()[0];
    assert_eq!(sent.method, Method::Post);
    assert!(sent.header("Authorization").unwrap().starts_with("Basic "));
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["title"], "New");
    assert_eq!(body["estimatedTime"], serde_json::Value::Null);
}

#[test]
fn create_course_location_without_id_goes_home() {
    let mock = MockTransport::replying([Ok(ApiResponse::new(201).with_location("/api/courses/"))]);
    let draft = CourseDraft::from_form("New", "Body", "", "");
    let result = block_on(create_course(&mock, &config(), auth(), &draft));
    assert_eq!(result, Ok(None));
    assert_eq!(create_outcome(result), ViewOutcome::Navigate(AppRoute::Home));
}

#[test]
fn create_course_validation_errors_render_verbatim() {
    let mock = MockTransport::replying([Ok(ApiResponse::new(400).with_body(r#"{"errors":["Title is required"]}"#))]);
    let draft = CourseDraft::from_form("", "Body", "", "");
    let result = block_on(create_course(&mock, &config(), auth(), &draft));
    assert_eq!(create_outcome(result), ViewOutcome::ShowErrors(vec!["Title is required".to_owned()]));
}

#[test]
fn update_course_uses_put_on_course_path() {
    let mock = MockTransport::replying([Ok(ApiResponse::new(204))]);
    let draft = CourseDraft::from_form("T", "D", "1 hour", "");
    assert_eq!(block_on(update_course(&mock, &config(), auth(), "5", &draft)), Ok(()));
    let sent = &mock.requests()[0];
    assert_eq!(sent.method, Method::Put);
    assert_eq!(sent.url, "http://api.test/api/courses/5");
}

#[test]
fn delete_course_sends_auth_without_body() {
    let mock = MockTransport::replying([Ok(ApiResponse::new(403))]);
    assert_eq!(block_on(delete_course(&mock, &config(), auth(), "5")), Err(ApiError::Forbidden));
    let sent = &mock.requests()[0];
    assert_eq!(sent.method, Method::Delete);
    assert!(sent.body.is_none());
    assert!(sent.header("Authorization").is_some());
}

#[test]
fn register_user_posts_json_profile() {
    let mock = MockTransport::replying([Ok(ApiResponse::new(201))]);
    let user = NewUser {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email_address: "ada@example.com".to_owned(),
        password: "engine".to_owned(),
    };
    assert_eq!(block_on(register_user(&mock, &config(), &user)), Ok(()));
    let sent = &mock.requests()[0];
    assert_eq!(sent.url, "http://api.test/api/users");
    assert_eq!(sent.header("content-type"), Some("application/json"));
}
