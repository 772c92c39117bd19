//! Toast stack renderer and the `notify` entry point every page uses.
//!
//! SYSTEM CONTEXT
//! ==============
//! `NotificationState` lives in an app-level `RwSignal` context. Pages push
//! through [`notify`], which also schedules the auto-dismiss timer; the
//! `Toaster` only renders and handles manual dismissal.

use leptos::prelude::*;

use crate::state::notify::{NotificationState, Notice};
#[cfg(feature = "hydrate")]
use crate::state::notify::AUTO_DISMISS_MS;

/// Queue a notice and schedule its dismissal.
pub fn notify(notices: RwSignal<NotificationState>, notice: Notice) {
    let mut id = 0;
    notices.update(|n| id = n.push(notice));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
        notices.update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed-position stack of the visible toasts, newest at the bottom.
#[component]
pub fn Toaster() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationState>>();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = if toast.notice.is_destructive() { "toast toast--destructive" } else { "toast" };
                    let description = toast.notice.description.clone();
                    view! {
                        <li class=class role="status">
                            <div class="toast__body">
                                <p class="toast__title">{toast.notice.title.clone()}</p>
                                {description.map(|d| view! { <p class="toast__description">{d}</p> })}
                            </div>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                "×"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
