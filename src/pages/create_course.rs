//! Create-course form (guarded).

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::course_form::{CourseFields, CourseFormFields};
use crate::components::validation_errors::ValidationErrors;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::outcome::{ViewOutcome, create_outcome};
use crate::net::transport::BrowserTransport;
use crate::state::request::FormState;
use crate::state::session::SessionSignal;
use crate::util::mount::MountGuard;

#[component]
pub fn CreateCoursePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<SessionSignal>();
    let navigate = use_navigate();
    let mount = MountGuard::install();

    let fields = CourseFields::new();
    let form = RwSignal::new(FormState::default());
    let author = Signal::derive(move || {
        session.with(|s| s.current().map_or_else(|| "Unknown User".to_owned(), |u| u.full_name()))
    });

    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(FormState::begin).unwrap_or(false) {
            return;
        }
        let draft = fields.draft();
        let headers = session.with_untracked(|s| s.auth_headers());
        let config = config.clone();
        let navigate = submit_navigate.clone();
        let mount = mount.clone();
        leptos::task::spawn_local(async move {
            let outcome = create_outcome(api::create_course(&BrowserTransport, &config, headers, &draft).await);
            if !mount.is_mounted() {
                return;
            }
            match outcome {
                ViewOutcome::Navigate(route) => {
                    form.try_update(|f| f.finish(Vec::new()));
                    navigate(&route.path(), NavigateOptions::default());
                }
                ViewOutcome::ShowErrors(errors) => {
                    form.try_update(|f| f.finish(errors));
                }
                ViewOutcome::Render(()) | ViewOutcome::Alert(_) => {
                    form.try_update(|f| f.finish(Vec::new()));
                }
            }
        });
    };

    let on_cancel = move |_: leptos::ev::MouseEvent| navigate("/", NavigateOptions::default());

    view! {
        <div class="wrap">
            <h2>"Create Course"</h2>
            <ValidationErrors errors=Signal::derive(move || form.with(|f| f.errors.clone()))/>
            <form on:submit=on_submit>
                <CourseFormFields fields=fields author=author/>
                <button class="button" type="submit" disabled=move || form.with(|f| f.busy)>
                    {move || if form.with(|f| f.busy) { "Creating Course..." } else { "Create Course" }}
                </button>
                <button
                    class="button button-secondary"
                    type="button"
                    on:click=on_cancel
                    disabled=move || form.with(|f| f.busy)
                >
                    "Cancel"
                </button>
            </form>
        </div>
    }
}
