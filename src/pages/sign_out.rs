//! `/signout`: clears the session and returns to the list.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionSignal, SessionStore};

#[component]
pub fn SignOutPage() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();

    Effect::new(move || {
        session.update(SessionStore::sign_out);
        navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
}
