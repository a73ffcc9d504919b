//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::require_session::RequireSession;
use crate::config::ClientConfig;
use crate::pages::{
    course_detail::CourseDetailPage,
    courses::CoursesPage,
    create_course::CreateCoursePage,
    sign_in::SignInPage,
    sign_out::SignOutPage,
    sign_up::SignUpPage,
    status::{ForbiddenPage, NotFoundPage, UnhandledErrorPage},
    update_course::UpdateCoursePage,
};
use crate::state::navigation::NavigationState;
use crate::state::session::SessionStore;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Provides the API config, the restored session, and the guard's
/// navigation state, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    log::info!("course API at {}", config.api_base_url);
    provide_context(config);
    provide_context(RwSignal::new(SessionStore::restored(BrowserStorage)));
    provide_context(RwSignal::new(NavigationState::default()));

    view! {
        <Stylesheet id="global" href="/styles/global.css"/>
        <Title text="Courses"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=CoursesPage/>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route path=StaticSegment("signout") view=SignOutPage/>
                    <Route
                        path=(StaticSegment("courses"), StaticSegment("create"))
                        view=|| view! { <RequireSession><CreateCoursePage/></RequireSession> }
                    />
                    <Route path=(StaticSegment("courses"), ParamSegment("id")) view=CourseDetailPage/>
                    <Route
                        path=(StaticSegment("courses"), ParamSegment("id"), StaticSegment("update"))
                        view=|| view! { <RequireSession><UpdateCoursePage/></RequireSession> }
                    />
                    <Route path=StaticSegment("notfound") view=NotFoundPage/>
                    <Route path=StaticSegment("forbidden") view=ForbiddenPage/>
                    <Route path=StaticSegment("error") view=UnhandledErrorPage/>
                </Routes>
            </main>
        </Router>
    }
}
