//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::page_transition::PageTransition;
use crate::components::toaster::Toaster;
use crate::pages::{
    assets::AssetsPage, home::HomePage, landing::LandingPage, not_found::NotFoundPage, profile::ProfilePage,
    transfer::TransferPage, upload::UploadPage, verify::VerifyPage,
};
use crate::state::{notify::NotificationState, wallet::WalletState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the wallet account and the notification queue, the only state
/// shared between pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(WalletState::default()));
    provide_context(RwSignal::new(NotificationState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/cryptex-vault.css"/>
        <Title text="Cryptex Vault"/>

        <Router>
            <PageTransition>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("upload") view=UploadPage/>
                    <Route path=StaticSegment("assets") view=AssetsPage/>
                    <Route path=StaticSegment("verify") view=VerifyPage/>
                    <Route path=StaticSegment("transfer") view=TransferPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </PageTransition>
        </Router>
        <Toaster/>
    }
}
