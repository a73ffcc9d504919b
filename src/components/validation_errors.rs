//! Inline list of messages from the last failed submission.

use leptos::prelude::*;

/// Renders nothing while `errors` is empty.
#[component]
pub fn ValidationErrors(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
    view! {
        <Show when=move || errors.with(|e| !e.is_empty())>
            <div class="validation--errors">
                <h3>"Validation Errors"</h3>
                <ul>
                    {move || errors.get().into_iter().map(|message| view! { <li>{message}</li> }).collect::<Vec<_>>()}
                </ul>
            </div>
        </Show>
    }
}
