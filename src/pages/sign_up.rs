//! Sign-up form. A successful registration signs the new user in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::validation_errors::ValidationErrors;
use crate::config::ClientConfig;
use crate::net::transport::BrowserTransport;
use crate::state::request::FormState;
use crate::state::session::{SessionError, SessionSignal};
use crate::util::forms::{humanize_sign_up_errors, validate_sign_up};
use crate::util::mount::MountGuard;

#[component]
pub fn SignUpPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();
    let mount = MountGuard::install();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email_address = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(FormState::default());

    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let profile = match validate_sign_up(
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &email_address.get_untracked(),
            &password.get_untracked(),
        ) {
            Ok(profile) => profile,
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
            let result = store.sign_up(&BrowserTransport, &config, &profile).await;
            match result {
                Ok(_) => {
                    session.try_set(store);
                    if !mount.is_mounted() {
                        return;
                    }
                    form.try_update(|f| f.finish(Vec::new()));
                    navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
                }
                Err(e) => {
                    if !mount.is_mounted() {
                        return;
                    }
                    let errors = match e {
                        SessionError::ValidationFailed(messages) => humanize_sign_up_errors(messages),
                        other => other.messages(),
                    };
                    form.try_update(|f| f.finish(errors));
                }
            }
        });
    };

    let on_cancel = move |_: leptos::ev::MouseEvent| navigate("/", NavigateOptions::default());

    view! {
        <div class="form--centered">
            <h2>"Sign Up"</h2>
            <ValidationErrors errors=Signal::derive(move || form.with(|f| f.errors.clone()))/>
            <form on:submit=on_submit>
                <label for="firstName">"First Name"</label>
                <input
                    id="firstName"
                    name="firstName"
                    type="text"
                    prop:value=move || first_name.get()
                    on:input=move |ev| first_name.set(event_target_value(&ev))
                />
                <label for="lastName">"Last Name"</label>
                <input
                    id="lastName"
                    name="lastName"
                    type="text"
                    prop:value=move || last_name.get()
                    on:input=move |ev| last_name.set(event_target_value(&ev))
                />
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
                    {move || if form.with(|f| f.busy) { "Signing Up..." } else { "Sign Up" }}
                </button>
                <button class="button button-secondary" type="button" on:click=on_cancel>
                    "Cancel"
                </button>
            </form>
            <p>"Already have a user account? Click here to " <A href="/signin">"sign in"</A> "!"</p>
        </div>
    }
}
