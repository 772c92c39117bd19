//! Fade-in wrapper re-keyed on every route change.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Wraps routed content; the enter animation restarts when the path changes.
#[component]
pub fn PageTransition(children: ChildrenFn) -> impl IntoView {
    let pathname = use_location().pathname;
    let entering = RwSignal::new(true);

    Effect::new(move || {
        pathname.track();
        entering.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(16).await;
            entering.set(false);
        });
    });

    view! {
        <div class=move || {
            if entering.get() { "page-transition page-transition--enter" } else { "page-transition" }
        }>{children()}</div>
    }
}
