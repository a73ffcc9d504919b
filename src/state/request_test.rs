use super::*;

#[test]
fn load_state_defaults_to_idle_and_counts_as_loading() {
    let state: LoadState<u8> = LoadState::default();
    assert_eq!(state, LoadState::Idle);
    assert!(state.is_loading());
    assert!(LoadState::<u8>::Loading.is_loading());
}

#[test]
fn ready_exposes_value() {
    let state = LoadState::Ready(7);
    assert!(!state.is_loading());
    assert_eq!(state.ready(), Some(&7));
    assert_eq!(LoadState::<u8>::Failed.ready(), None);
    assert!(!LoadState::<u8>::Failed.is_loading());
}

#[test]
fn form_begin_clears_previous_errors() {
    let mut form = FormState { busy: false, errors: vec!["Title is required".to_owned()] };
    assert!(form.begin());
    assert!(form.busy);
    assert!(form.errors.is_empty());
}

#[test]
fn form_begin_rejects_duplicate_submission() {
    let mut form = FormState::default();
    assert!(form.begin());
    assert!(!form.begin());
    assert!(form.busy);
}

#[test]
fn form_finish_releases_and_shows_errors() {
    let mut form = FormState::default();
    form.begin();
    form.finish(vec!["Description is required".to_owned()]);
    assert!(!form.busy);
    assert_eq!(form.errors, vec!["Description is required".to_owned()]);
    assert!(form.begin());
}
