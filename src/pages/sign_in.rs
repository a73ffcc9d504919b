//! Sign-in form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::validation_errors::ValidationErrors;
use crate::config::ClientConfig;
use crate::net::transport::BrowserTransport;
use crate::state::navigation::NavigationState;
use crate::state::request::FormState;
use crate::state::session::SessionSignal;
use crate::util::forms::validate_sign_in;
use crate::util::mount::MountGuard;

#[component]
pub fn SignInPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<SessionSignal>();
    let nav = expect_context::<RwSignal<NavigationState>>();
    let navigate = use_navigate();
    let mount = MountGuard::install();

    let email_address = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());

    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email, pass) = match validate_sign_in(&email_address.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(errors) => {
                form.update(|f| f.errors = errors);
                return;
            }
        };
        if !form.try_update(FormState::begin).unwrap_or(false) {
            return;
        }
        let config = config.clone();
        let navigate = submit_navigate.clone();
        let mount = mount.clone();
        leptos::task::spawn_local(async move {
            let mut store = session.get_untracked();
            let result = store.sign_in(&BrowserTransport, &config, &email, &pass).await;
            match result {
                Ok(_) => {
                    // Persisted already; the signal must follow even if the view is gone.
                    session.try_set(store);
                    if !mount.is_mounted() {
                        return;
                    }
                    form.try_update(|f| f.finish(Vec::new()));
                    let target = nav.try_update(NavigationState::take_return_path).unwrap_or_else(|| "/".to_owned());
                    navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
                Err(e) => {
                    if mount.is_mounted() {
                        form.try_update(|f| f.finish(e.messages()));
                    }
                }
            }
        });
    };

    let on_cancel = move |_: leptos::ev::MouseEvent| navigate("/", NavigateOptions::default());

    view! {
        <div class="form--centered">
            <h2>"Sign In"</h2>
            <ValidationErrors errors=Signal::derive(move || form.with(|f| f.errors.clone()))/>
            <form on:submit=on_submit>
                <label for="emailAddress">"Email Address"</label>
                <input
                    id="emailAddress"
                    name="emailAddress"
                    type="email"
                    prop:value=move || email_address.get()
                    on:input=move |ev| email_address.set(event_target_value(&ev))
                />
                <label for="password">"Password"</label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="button" type="submit" disabled=move || form.with(|f| f.busy)>
                    {move || if form.with(|f| f.busy) { "Signing In..." } else { "Sign In" }}
                </button>
                <button class="button button-secondary" type="button" on:click=on_cancel>
                    "Cancel"
                </button>
            </form>
            <p>"Don't have a user account? Click here to " <A href="/signup">"sign up"</A> "!"</p>
        </div>
    }
}
