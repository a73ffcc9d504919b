//! Course list, the landing route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api;
use crate::net::outcome::{ViewOutcome, list_outcome};
use crate::net::transport::BrowserTransport;
use crate::net::types::Course;
use crate::state::request::LoadState;
use crate::util::mount::MountGuard;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let courses = RwSignal::new(LoadState::<Vec<Course>>::Idle);
    let mount = MountGuard::install();

    courses.set(LoadState::Loading);
    leptos::task::spawn_local(async move {
        let outcome = list_outcome(api::fetch_courses(&BrowserTransport, &config).await);
        if !mount.is_mounted() {
            return;
        }
        match outcome {
            ViewOutcome::Render(items) => {
                courses.try_set(LoadState::Ready(items));
            }
            ViewOutcome::Navigate(route) => {
                courses.try_set(LoadState::Failed);
                navigate(&route.path(), NavigateOptions::default());
            }
            ViewOutcome::ShowErrors(_) | ViewOutcome::Alert(_) => {}
        }
    });

    view! {
        <Show
            when=move || !courses.with(LoadState::is_loading)
            fallback=|| view! { <div class="wrap"><p>"Loading courses..."</p></div> }
        >
            <div class="wrap main--grid">
                {move || {
                    courses
                        .get()
                        .ready()
                        .cloned()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|course| {
                            view! {
                                <A href=format!("/courses/{}", course.id) attr:class="course--module course--link">
                                    <h2 class="course--label">"Course"</h2>
                                    <h3 class="course--title">{course.title}</h3>
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <A href="/courses/create" attr:class="course--module course--add--module">
                    <span class="course--add--title">
                        <svg version="1.1" xmlns="http://www.w3.org/2000/svg" x="0px" y="0px" viewBox="0 0 13 13" class="add">
                            <polygon points="7,6 7,0 6,0 6,6 0,6 0,7 6,7 6,13 7,13 7,7 13,7 13,6 "></polygon>
                        </svg>
                        "New Course"
                    </span>
                </A>
            </div>
        </Show>
    }
}
