//! Route wrapper that only renders its children for a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `/courses/create` and `/courses/:id/update`. A signed-out visitor is
//! sent to `/signin` and the requested path is parked in `NavigationState` so
//! sign-in can bring them back.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::AppRoute;
use crate::state::navigation::NavigationState;
use crate::state::session::SessionSignal;
use crate::util::auth::{GuardDecision, guard_decision};

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let nav = expect_context::<RwSignal<NavigationState>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let path = location.pathname.get();
        session.with(|store| guard_decision(store, &path))
    });

    Effect::new(move || {
        if let GuardDecision::RedirectToSignIn { return_to } = decision.get() {
            nav.update(|n| n.remember(&return_to));
            navigate(&AppRoute::SignIn.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Render>
            {children()}
        </Show>
    }
}
