//! Upload page: pick a kind, pick a file, register it on the mock ledger.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns an `UploadSession` for its lifetime. The simulated submit
//! runs on `spawn_local`; its completion is keyed by the submission ticket so
//! a reset during the wait simply drops the late result.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::file_upload_card::FileUploadCard;
use crate::components::kind_picker::KindPicker;
use crate::components::navbar::Navbar;
use crate::components::toaster::notify;
use crate::net::ledger::{SimulatedLedger, UPLOAD_LATENCY_MS, settle};
use crate::state::asset::{AssetKind, FileInfo, file_selected_notice};
use crate::state::notify::{NotificationState, Notice};
use crate::state::upload::{UPLOAD_VERB, UploadSession, uploaded_notice};
use crate::state::workflow::Screen;
use crate::util::browser::copy_to_clipboard;

fn kind_title(kind: AssetKind) -> String {
    kind.label().to_owned()
}

fn kind_blurb(kind: AssetKind) -> String {
    format!("Secure your {} with blockchain protection", kind.label().to_lowercase())
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationState>>();
    let session = RwSignal::new(UploadSession::new());
    let screen = Memo::new(move |_| session.with(UploadSession::screen));

    let on_pick = Callback::new(move |kind: AssetKind| session.update(|s| s.choose_kind(kind)));
    let on_file = Callback::new(move |file: FileInfo| match session.try_update(|s| s.offer_file(file.clone())) {
        Some(Ok(())) => notify(notices, file_selected_notice(&file)),
        Some(Err(err)) => notify(notices, err.notice(UPLOAD_VERB)),
        None => {}
    });
    let on_clear = Callback::new(move |()| session.update(UploadSession::clear_file));

    let on_submit = move |_| {
        let ticket = match session.try_update(UploadSession::begin_submit) {
            Some(Ok(ticket)) => ticket,
            Some(Err(err)) => {
                notify(notices, err.notice(UPLOAD_VERB));
                return;
            }
            None => return,
        };
        leptos::task::spawn_local(async move {
            settle(UPLOAD_LATENCY_MS).await;
            match SimulatedLedger::default().register(&mut rand::rng()) {
                Ok(hash) => {
                    log::debug!("upload #{ticket} registered {hash}");
                    if session.try_update(|s| s.complete(ticket, hash)).unwrap_or(false) {
                        notify(notices, uploaded_notice());
                    }
                }
                Err(err) => {
                    log::warn!("upload #{ticket} failed: {err}");
                    if session.try_update(|s| s.fail(ticket)).unwrap_or(false) {
                        notify(notices, err.notice());
                    }
                }
            }
        });
    };

    let result_hash = move || session.with(|s| s.result_hash().map(str::to_owned)).unwrap_or_default();
    let on_copy = move |_| {
        copy_to_clipboard(&result_hash());
        notify(notices, Notice::info("Hash copied to clipboard"));
    };

    view! {
        <div class="page upload-page">
            <Navbar />
            <main class="page__content">
                <header class="page__header">
                    <h1>
                        <span class="text-gradient">"Secure Your"</span>
                        " Digital Assets"
                    </h1>
                    <p>
                        "Upload your files to establish proof of ownership on the blockchain. "
                        "Your assets will be timestamped and secured with unbreakable cryptographic protection."
                    </p>
                </header>
                {move || match screen.get() {
                    Screen::KindPicker => {
                        view! { <KindPicker title=kind_title blurb=kind_blurb on_pick=on_pick /> }.into_any()
                    }
                    Screen::FilePicker(kind) => {
                        view! {
                            <div class="workflow-step">
                                <button
                                    class="link-button"
                                    on:click=move |_| session.update(UploadSession::clear_kind)
                                >
                                    "← Back to file types"
                                </button>
                                <FileUploadCard
                                    kind=kind
                                    verb="Upload"
                                    selected=Signal::derive(move || session.with(|s| s.file().cloned()))
                                    on_file=on_file
                                    on_clear=on_clear
                                />
                                <div class="workflow-step__actions">
                                    <button
                                        class="crypto-button"
                                        disabled=move || !session.with(UploadSession::can_submit)
                                        on:click=on_submit
                                    >
                                        {move || {
                                            if session.with(UploadSession::is_submitting) {
                                                "Securing your asset..."
                                            } else {
                                                "Secure on Blockchain"
                                            }
                                        }}
                                    </button>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    Screen::Result => {
                        view! {
                            <section class="result-card glass-card">
                                <div class="result-card__icon result-card__icon--success">"🛡"</div>
                                <h2>"Asset Secured Successfully"</h2>
                                <p>"Your asset has been secured on the blockchain with a unique digital fingerprint."</p>
                                <div class="result-card__field">
                                    <p class="result-card__label">"Asset Hash (Unique Identifier)"</p>
                                    <div class="result-card__row">
                                        <p class="mono text-accent">{result_hash}</p>
                                        <button class="chip-button" on:click=on_copy>"Copy"</button>
                                    </div>
                                </div>
                                <ul class="result-card__features">
                                    <li>
                                        <strong>"Tamper-proof Verification"</strong>
                                        <span>"Any changes to the original will be detectable"</span>
                                    </li>
                                    <li>
                                        <strong>"Copyright Protection"</strong>
                                        <span>"Immutable proof of ownership established"</span>
                                    </li>
                                </ul>
                                <div class="result-card__actions">
                                    <button
                                        class="outline-button"
                                        on:click=move |_| session.update(UploadSession::start_another)
                                    >
                                        "Upload Another Asset"
                                    </button>
                                    <button
                                        class="crypto-button"
                                        on:click=move |_| {
                                            notify(
                                                notices,
                                                Notice::info(
                                                    "This would navigate to asset details in a complete implementation",
                                                ),
                                            );
                                        }
                                    >
                                        "View Asset Details"
                                    </button>
                                </div>
                            </section>
                        }
                            .into_any()
                    }
                }}
            </main>
        </div>
    }
}
