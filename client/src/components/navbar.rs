//! Top navigation bar with route-aware highlighting and a mobile menu.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// `(path, label)` for every primary destination, in display order.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("/home", "Home"),
    ("/upload", "Upload"),
    ("/assets", "Assets"),
    ("/verify", "Verify"),
    ("/transfer", "Transfer"),
];

/// Exact-path match; `/assets/x` does not activate `/assets`.
#[must_use]
pub fn is_active(current: &str, path: &str) -> bool {
    current == path
}

fn link_class(active: bool) -> &'static str {
    if active { "navbar__link navbar__link--active" } else { "navbar__link" }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let menu_open = RwSignal::new(false);

    // Close the mobile menu whenever the route changes.
    Effect::new(move || {
        pathname.track();
        menu_open.set(false);
    });

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|(path, label)| {
                let path = *path;
                view! {
                    <A href=path attr:class=move || link_class(is_active(&pathname.get(), path))>
                        {*label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href="/" attr:class="navbar__brand">
                    <span class="text-gradient">"Cryptex Vault"</span>
                </A>
                <div class="navbar__links">{links}</div>
                <button
                    class="navbar__menu-toggle"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class="sr-only">"Open main menu"</span>
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <div class=move || {
                if menu_open.get() { "navbar__mobile navbar__mobile--open" } else { "navbar__mobile" }
            }>{links}</div>
        </nav>
    }
}
