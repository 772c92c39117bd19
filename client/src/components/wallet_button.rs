//! "Connect to MetaMask" button driving the wallet connector.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::notify::NotificationState;
use crate::state::wallet::WalletState;

/// On success stores the account in `WalletState`, notifies, and navigates
/// to `/home`. Disabled while a request is pending.
#[component]
pub fn WalletButton(#[prop(optional)] animated: bool) -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();
    let notices = expect_context::<RwSignal<NotificationState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_click = move |_| {
        if wallet.get_untracked().connecting {
            return;
        }
        wallet.update(|w| w.connecting = true);

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toaster::notify;
            use crate::net::wallet::{INSTALL_URL, InjectedProvider, WalletError, connect, connected_notice};

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match connect(&InjectedProvider).await {
                    Ok(account) => {
                        log::debug!("wallet connected: {account}");
                        notify(notices, connected_notice(&account));
                        wallet.update(|w| {
                            w.account = Some(account);
                            w.connecting = false;
                        });
                        navigate("/home", NavigateOptions::default());
                    }
                    Err(err) => {
                        log::warn!("wallet connect failed: {err}");
                        notify(notices, err.notice());
                        if err == WalletError::ProviderUnavailable {
                            crate::util::browser::open_in_new_tab(INSTALL_URL);
                        }
                        wallet.update(|w| w.connecting = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = notices;
            wallet.update(|w| w.connecting = false);
        }
    };

    view! {
        <button
            class=if animated { "crypto-button crypto-button--glow" } else { "crypto-button" }
            disabled=move || wallet.get().connecting
            on:click=on_click
        >
            <span class="crypto-button__icon">"◈"</span>
            <span>{move || if wallet.get().connecting { "Connecting..." } else { "Connect to MetaMask" }}</span>
        </button>
    }
}
