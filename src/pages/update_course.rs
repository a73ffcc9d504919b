//! Update-course form (guarded, owner only).
//!
//! The course is loaded first; a non-owner is sent to `/forbidden` before the
//! form appears. The API's 403 on submit is still mapped, in case ownership
//! changed or the local check was bypassed.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::course_form::{CourseFields, CourseFormFields};
use crate::components::validation_errors::ValidationErrors;
use crate::config::ClientConfig;
use crate::net::api;
use crate::net::outcome::{ViewOutcome, detail_outcome, update_outcome};
use crate::net::transport::BrowserTransport;
use crate::net::types::Course;
use crate::routes::AppRoute;
use crate::state::request::{FormState, LoadState};
use crate::state::session::SessionSignal;
use crate::util::auth::edit_gate;
use crate::util::mount::MountGuard;

#[component]
pub fn UpdateCoursePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<SessionSignal>();
    let params = use_params_map();
    let navigate = use_navigate();
    let mount = MountGuard::install();

    let course_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let course = RwSignal::new(LoadState::<Course>::Idle);
    let fields = CourseFields::new();
    let form = RwSignal::new(FormState::default());

    let load_config = config.clone();
    let load_navigate = navigate.clone();
    let load_mount = mount.clone();
    Effect::new(move || {
        let id = course_id.get();
        course.set(LoadState::Loading);
        let config = load_config.clone();
        let navigate = load_navigate.clone();
        let mount = load_mount.clone();
        leptos::task::spawn_local(async move {
            let outcome = match detail_outcome(api::fetch_course(&BrowserTransport, &config, &id).await) {
                ViewOutcome::Render(loaded) => session.with_untracked(|s| edit_gate(s, loaded)),
                other => other,
            };
            if !mount.is_mounted() || course_id.try_get_untracked().as_deref() != Some(id.as_str()) {
                return;
            }
            match outcome {
                ViewOutcome::Render(loaded) => {
                    fields.fill(&loaded);
                    course.try_set(LoadState::Ready(loaded));
                }
                ViewOutcome::Navigate(route) => {
                    course.try_set(LoadState::Failed);
                    navigate(&route.path(), NavigateOptions::default());
                }
                ViewOutcome::ShowErrors(_) | ViewOutcome::Alert(_) => {}
            }
        });
    });

    let author = Signal::derive(move || {
        course.with(|c| c.ready().map_or_else(|| "Unknown User".to_owned(), Course::owner_name))
    });

    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !form.try_update(FormState::begin).unwrap_or(false) {
            return;
        }
        let id = course_id.get_untracked();
        let draft = fields.draft();
        let headers = session.with_untracked(|s| s.auth_headers());
        let config = config.clone();
        let navigate = submit_navigate.clone();
        let mount = mount.clone();
        leptos::task::spawn_local(async move {
            let outcome = update_outcome(&id, api::update_course(&BrowserTransport, &config, headers, &id, &draft).await);
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

    let on_cancel = move |_: leptos::ev::MouseEvent| {
        navigate(&AppRoute::CourseDetail(course_id.get_untracked()).path(), NavigateOptions::default());
    };

    view! {
        <Show
            when=move || course.with(|c| c.ready().is_some())
            fallback=|| view! { <div class="wrap"><p>"Loading course..."</p></div> }
        >
            <div class="wrap">
                <h2>"Update Course"</h2>
                <ValidationErrors errors=Signal::derive(move || form.with(|f| f.errors.clone()))/>
                <form on:submit=on_submit.clone()>
                    <CourseFormFields fields=fields author=author/>
                    <button class="button" type="submit" disabled=move || form.with(|f| f.busy)>
                        {move || if form.with(|f| f.busy) { "Updating Course..." } else { "Update Course" }}
                    </button>
                    <button
                        class="button button-secondary"
                        type="button"
                        on:click=on_cancel.clone()
                        disabled=move || form.with(|f| f.busy)
                    >
                        "Cancel"
                    </button>
                </form>
            </div>
        </Show>
    }
}
