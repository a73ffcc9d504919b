//! Terminal error views: not found, forbidden, unhandled error.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
fn StatusView(title: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="wrap">
            <h2>{title}</h2>
            <p>{message}</p>
            <A href="/" attr:class="button button-secondary">"Return to List"</A>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <StatusView title="Not Found" message="Sorry! We couldn't find the page you're looking for."/> }
}

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    view! { <StatusView title="Forbidden" message="Oh oh! You can't access this page."/> }
}

#[component]
pub fn UnhandledErrorPage() -> impl IntoView {
    view! { <StatusView title="Error" message="Sorry! We just encountered an unexpected error."/> }
}
