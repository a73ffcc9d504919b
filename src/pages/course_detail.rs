//! Read view for one course with owner-only update/delete controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controls are hidden unless the signed-in user owns the course. Delete still
//! handles 401/403/404 from the API, since the local check is only cosmetic.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::config::ClientConfig;
use crate::net::api;
use crate::net::outcome::{ViewOutcome, delete_outcome, detail_outcome};
use crate::net::transport::BrowserTransport;
use crate::net::types::Course;
use crate::state::request::LoadState;
use crate::state::session::SessionSignal;
use crate::util::browser;
use crate::util::markdown::render_markdown_html;
use crate::util::mount::MountGuard;

const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this course? This action cannot be undone.";
const NO_MATERIALS: &str = "No materials specified";

#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let session = expect_context::<SessionSignal>();
    let params = use_params_map();
    let navigate = use_navigate();
    let mount = MountGuard::install();

    let course_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());
    let course = RwSignal::new(LoadState::<Course>::Idle);
    let deleting = RwSignal::new(false);

    let fetch_config = config.clone();
    let fetch_navigate = navigate.clone();
    let fetch_mount = mount.clone();
    Effect::new(move || {
        let id = course_id.get();
        course.set(LoadState::Loading);
        let config = fetch_config.clone();
        let navigate = fetch_navigate.clone();
        let mount = fetch_mount.clone();
        leptos::task::spawn_local(async move {
            let outcome = detail_outcome(api::fetch_course(&BrowserTransport, &config, &id).await);
            if !mount.is_mounted() || course_id.try_get_untracked().as_deref() != Some(id.as_str()) {
                return;
            }
            match outcome {
                ViewOutcome::Render(loaded) => {
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

    let is_owner = move || session.with(|s| course.with(|c| c.ready().is_some_and(|c| s.owns(c))));

    let on_delete = move |_: leptos::ev::MouseEvent| {
        if deleting.get_untracked() || !browser::confirm(DELETE_CONFIRMATION) {
            return;
        }
        deleting.set(true);
        let id = course_id.get_untracked();
        let headers = session.with_untracked(|s| s.auth_headers());
        let config = config.clone();
        let navigate = navigate.clone();
        let mount = mount.clone();
        leptos::task::spawn_local(async move {
            let outcome = delete_outcome(api::delete_course(&BrowserTransport, &config, headers, &id).await);
            if !mount.is_mounted() {
                return;
            }
            match outcome {
                ViewOutcome::Navigate(route) => navigate(&route.path(), NavigateOptions::default()),
                ViewOutcome::Alert(message) => browser::alert(&message),
                ViewOutcome::Render(()) | ViewOutcome::ShowErrors(_) => {}
            }
            deleting.try_set(false);
        });
    };
    let on_delete = StoredValue::new(on_delete);

    view! {
        <Show
            when=move || course.with(|c| c.ready().is_some())
            fallback=|| view! { <div class="wrap"><p>"Loading course..."</p></div> }
        >
            <div class="actions--bar">
                <div class="wrap">
                    <Show when=is_owner>
                        <A href=move || format!("/courses/{}/update", course_id.get()) attr:class="button">
                            "Update Course"
                        </A>
                        <button class="button" on:click=move |ev| on_delete.with_value(|f| f(ev)) disabled=move || deleting.get()>
                            {move || if deleting.get() { "Deleting..." } else { "Delete Course" }}
                        </button>
                    </Show>
                    <A href="/" attr:class="button button-secondary">"Return to List"</A>
                </div>
            </div>
            {move || course.get().ready().cloned().map(|c| view! { <CourseBody course=c/> })}
        </Show>
    }
}

#[component]
fn CourseBody(course: Course) -> impl IntoView {
    let owner = course.owner_name();
    let description = render_markdown_html(&course.description);
    let materials = render_markdown_html(course.materials_needed.as_deref().unwrap_or(NO_MATERIALS));

    view! {
        <div class="wrap">
            <h2>"Course Detail"</h2>
            <form>
                <div class="main--flex">
                    <div>
                        <label for="courseTitle">"Course"</label>
                        <input id="courseTitle" name="courseTitle" type="text" prop:value=course.title readonly/>
                        <p>"By " {owner}</p>
                        <label for="courseDescription">"Description"</label>
                        <div class="course--detail--list" inner_html=description></div>
                    </div>
                    <div>
                        <label for="estimatedTime">"Estimated Time"</label>
                        <input
                            id="estimatedTime"
                            name="estimatedTime"
                            type="text"
                            prop:value=course.estimated_time.unwrap_or_default()
                            readonly
                        />
                        <label for="materialsNeeded">"Materials Needed"</label>
                        <div class="course--detail--list" inner_html=materials></div>
                    </div>
                </div>
            </form>
        </div>
    }
}
