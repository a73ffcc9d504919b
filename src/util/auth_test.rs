use futures::executor::block_on;

use super::*;
use crate::config::{ClientConfig, SESSION_STORAGE_KEY};
use crate::net::transport::{ApiResponse, MockTransport};
use crate::state::navigation::NavigationState;
use crate::util::storage::MemoryStorage;

#[test]
fn signed_out_user_is_redirected_with_return_path() {
    let store = SessionStore::new(MemoryStorage::default());
    let decision = guard_decision(&store, "/courses/create");
    assert_eq!(decision, GuardDecision::RedirectToSignIn { return_to: "/courses/create".to_owned() });
}

#[test]
fn corrupted_session_is_treated_as_signed_out() {
    let storage = MemoryStorage::default();
    storage.set(SESSION_STORAGE_KEY, "{{{");
    let store = SessionStore::restored(storage);
    assert!(matches!(guard_decision(&store, "/courses/create"), GuardDecision::RedirectToSignIn { .. }));
}

#[test]
fn guarded_update_round_trips_through_sign_in() {
    let mut store = SessionStore::new(MemoryStorage::default());
    let mut nav = NavigationState::default();

    let GuardDecision::RedirectToSignIn { return_to } = guard_decision(&store, "/courses/5/update") else {
        panic!("expected redirect");
    };
    nav.remember(&return_to);

    let mock = MockTransport::replying([Ok(ApiResponse::new(200)
        .with_body(r#"{"id":1,"firstName":"Joe","lastName":"Smith"}"#))]);
    let config = ClientConfig { api_base_url: "http://api.test".to_owned() };
    block_on(store.sign_in(&mock, &config, "joe@smith.com", "joepassword")).unwrap();

    assert_eq!(nav.take_return_path(), "/courses/5/update");
    assert_eq!(guard_decision(&store, "/courses/5/update"), GuardDecision::Render);
}

// =============================================================
// edit_gate
// =============================================================

fn course_owned_by(owner_id: u64) -> Course {
    serde_json::from_value(serde_json::json!({
        "id": 5,
        "title": "Bookcase",
        "User": { "id": owner_id, "firstName": "Joe", "lastName": "Smith" }
    }))
    .unwrap()
}

fn signed_in_as(id: u64) -> SessionStore<MemoryStorage> {
    let storage = MemoryStorage::default();
    storage.set(
        SESSION_STORAGE_KEY,
        &serde_json::json!({
            "id": id,
            "firstName": "Joe",
            "lastName": "Smith",
            "emailAddress": "joe@smith.com",
            "password": "joepassword"
        })
        .to_string(),
    );
    SessionStore::restored(storage)
}

#[test]
fn owner_may_edit() {
    let course = course_owned_by(1);
    assert_eq!(edit_gate(&signed_in_as(1), course.clone()), ViewOutcome::Render(course));
}

#[test]
fn non_owner_is_sent_to_forbidden() {
    assert_eq!(edit_gate(&signed_in_as(2), course_owned_by(1)), ViewOutcome::Navigate(AppRoute::Forbidden));
}

#[test]
fn signed_out_user_is_sent_to_forbidden() {
    let store = SessionStore::new(MemoryStorage::default());
    assert_eq!(edit_gate(&store, course_owned_by(1)), ViewOutcome::Navigate(AppRoute::Forbidden));
}
