//! Landing route (`/`): animated title, then the wallet connect card.

use leptos::prelude::*;

use crate::components::wallet_button::WalletButton;

/// How long the title stays up before fading.
pub const TITLE_HOLD_MS: u32 = 3_000;
/// Gap between the title fading and the connect card appearing.
pub const CONNECT_DELAY_MS: u32 = 500;

#[component]
pub fn LandingPage() -> impl IntoView {
    let show_title = RwSignal::new(true);
    let show_connect = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TITLE_HOLD_MS).await;
            if !alive_task.load(Ordering::Relaxed) {
                return;
            }
            show_title.set(false);
            gloo_timers::future::TimeoutFuture::new(CONNECT_DELAY_MS).await;
            if alive_task.load(Ordering::Relaxed) {
                show_connect.set(true);
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    view! {
        <div class="landing-page">
            <div class="landing-page__glow landing-page__glow--purple"></div>
            <div class="landing-page__glow landing-page__glow--blue"></div>
            <div class="landing-page__glow landing-page__glow--accent"></div>
            <div class="landing-page__content">
                <div class=move || if show_title.get() { "landing-title" } else { "landing-title landing-title--hidden" }>
                    <h1>
                        <span class="reveal reveal--1">"Cryptex"</span>
                        " "
                        <span class="reveal reveal--2">"Vault"</span>
                        <br />
                        <span class="reveal reveal--3 text-gradient">"Own"</span>
                        " "
                        <span class="reveal reveal--4">"What's"</span>
                        " "
                        <span class="reveal reveal--5">"Yours"</span>
                    </h1>
                    <p>"Secure your digital creations with unbreakable blockchain protection"</p>
                </div>
                <div class=move || {
                    if show_connect.get() { "landing-connect landing-connect--visible" } else { "landing-connect" }
                }>
                    <div class="glass-card landing-connect__card">
                        <h2 class="text-gradient">"Connect to continue"</h2>
                        <p>
                            "Connect your MetaMask wallet to access the Cryptex Vault platform and protect your digital assets."
                        </p>
                        <WalletButton animated=true />
                    </div>
                </div>
            </div>
        </div>
    }
}
