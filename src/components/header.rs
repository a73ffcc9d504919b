//! Site header with identity-aware navigation links.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionSignal;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<SessionSignal>();
    let full_name = move || session.with(|s| s.current().map(crate::state::session::Session::full_name));

    view! {
        <header>
            <div class="wrap header--flex">
                <h1 class="header--logo">
                    <A href="/">"Courses"</A>
                </h1>
                <nav>
                    <Show
                        when=move || full_name().is_some()
                        fallback=|| {
                            view! {
                                <ul class="header--signedout">
                                    <li><A href="/signup">"Sign Up"</A></li>
                                    <li><A href="/signin">"Sign In"</A></li>
                                </ul>
                            }
                        }
                    >
                        <ul class="header--signedin">
                            <li>"Welcome, " {move || full_name().unwrap_or_default()} "!"</li>
                            <li><A href="/signout">"Sign Out"</A></li>
                        </ul>
                    </Show>
                </nav>
            </div>
        </header>
    }
}
