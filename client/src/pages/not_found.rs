//! Catch-all route.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Oops! Page not found"</p>
            <A href="/">"Return to Home"</A>
        </div>
    }
}
