//! Verify page: check a file against the mock registry.
//!
//! Shares the kind/file steps with Upload. The verdict is a mocked uniform
//! draw, so the result screen renders whichever of the three outcomes came
//! back.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::file_upload_card::FileUploadCard;
use crate::components::kind_picker::KindPicker;
use crate::components::navbar::Navbar;
use crate::components::toaster::notify;
use crate::net::ledger::{SimulatedLedger, VERIFY_LATENCY_MS, settle};
use crate::state::asset::{AssetKind, FileInfo, file_selected_notice};
use crate::state::notify::NotificationState;
use crate::state::verify::{AssetDetails, MODIFICATION_HINTS, Outcome, VERIFY_VERB, VerificationSession};
use crate::state::workflow::Screen;
use crate::util::timefmt::{format_timestamp, now};

fn kind_title(kind: AssetKind) -> String {
    format!("Verify {}", kind.label())
}

fn kind_blurb(kind: AssetKind) -> String {
    format!("Check if this {} is authentic and registered", kind.noun())
}

fn outcome_modifier(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Authentic => "success",
        Outcome::Modified => "warning",
        Outcome::NotFound => "danger",
    }
}

fn details_view(details: AssetDetails) -> impl IntoView {
    view! {
        <div class="result-card__details glass-card">
            <h3>"Asset Details"</h3>
            <dl class="detail-grid">
                <div>
                    <dt>"Owner"</dt>
                    <dd>{details.owner}</dd>
                </div>
                <div>
                    <dt>"Registered On"</dt>
                    <dd>{format_timestamp(details.registered_at)}</dd>
                </div>
                <div>
                    <dt>"Last Verified"</dt>
                    <dd>{format_timestamp(details.last_verified_at)}</dd>
                </div>
                <div>
                    <dt>"Hash"</dt>
                    <dd class="mono">{details.content_hash}</dd>
                </div>
            </dl>
        </div>
    }
}

fn modification_view() -> impl IntoView {
    view! {
        <div class="result-card__details glass-card">
            <h3>"Potential Modifications"</h3>
            <p>
                "The cryptographic hash of this file does not match the original registered version. "
                "This could indicate:"
            </p>
            <ul class="hint-list">
                {MODIFICATION_HINTS.into_iter().map(|hint| view! { <li>{hint}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn VerifyPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationState>>();
    let session = RwSignal::new(VerificationSession::new());
    let screen = Memo::new(move |_| session.with(VerificationSession::screen));

    let on_pick = Callback::new(move |kind: AssetKind| session.update(|s| s.choose_kind(kind)));
    let on_file = Callback::new(move |file: FileInfo| match session.try_update(|s| s.offer_file(file.clone())) {
        Some(Ok(())) => notify(notices, file_selected_notice(&file)),
        Some(Err(err)) => notify(notices, err.notice(VERIFY_VERB)),
        None => {}
    });
    let on_clear = Callback::new(move |()| session.update(VerificationSession::clear_file));

    let on_verify = move |_| {
        let ticket = match session.try_update(VerificationSession::begin_submit) {
            Some(Ok(ticket)) => ticket,
            Some(Err(err)) => {
                notify(notices, err.notice(VERIFY_VERB));
                return;
            }
            None => return,
        };
        leptos::task::spawn_local(async move {
            settle(VERIFY_LATENCY_MS).await;
            match SimulatedLedger::default().verify(&mut rand::rng(), now()) {
                Ok(verdict) => {
                    log::debug!("verify #{ticket} -> {:?}", verdict.outcome());
                    let notice = verdict.notice();
                    if session.try_update(|s| s.complete(ticket, verdict)).unwrap_or(false) {
                        notify(notices, notice);
                    }
                }
                Err(err) => {
                    log::warn!("verify #{ticket} failed: {err}");
                    if session.try_update(|s| s.fail(ticket)).unwrap_or(false) {
                        notify(notices, err.notice());
                    }
                }
            }
        });
    };

    let result_view = move || {
        let (outcome, details) = session.with(|s| (s.outcome(), s.details().cloned()));
        let outcome = outcome.unwrap_or(Outcome::NotFound);
        view! {
            <section class="result-card glass-card">
                <div class=format!("result-card__icon result-card__icon--{}", outcome_modifier(outcome))>
                    {match outcome {
                        Outcome::Authentic => "✓",
                        Outcome::Modified => "!",
                        Outcome::NotFound => "✕",
                    }}
                </div>
                <h2>{outcome.headline()}</h2>
                <p>{outcome.explanation()}</p>
                {details.map(details_view)}
                {(outcome == Outcome::Modified).then(modification_view)}
                <div class="result-card__actions">
                    <button
                        class="crypto-button"
                        on:click=move |_| session.update(VerificationSession::start_another)
                    >
                        "Verify Another Asset"
                    </button>
                </div>
            </section>
        }
    };

    view! {
        <div class="page verify-page">
            <Navbar />
            <main class="page__content">
                <header class="page__header">
                    <h1>
                        <span class="text-gradient">"Verify"</span>
                        " Digital Assets"
                    </h1>
                    <p>
                        "Check if a digital asset is authentic and registered on the blockchain. "
                        "Detect unauthorized modifications and verify ownership."
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
                                    on:click=move |_| session.update(VerificationSession::clear_kind)
                                >
                                    "← Back to file types"
                                </button>
                                <FileUploadCard
                                    kind=kind
                                    verb="Verify"
                                    selected=Signal::derive(move || session.with(|s| s.file().cloned()))
                                    on_file=on_file
                                    on_clear=on_clear
                                />
                                <div class="workflow-step__actions">
                                    <button
                                        class="crypto-button"
                                        disabled=move || !session.with(VerificationSession::can_submit)
                                        on:click=on_verify
                                    >
                                        {move || {
                                            if session.with(VerificationSession::is_submitting) {
                                                "Verifying asset..."
                                            } else {
                                                "Verify on Blockchain"
                                            }
                                        }}
                                    </button>
                                </div>
                                <p class="workflow-step__note">
                                    "We never store the files you upload for verification"
                                </p>
                            </div>
                        }
                            .into_any()
                    }
                    Screen::Result => result_view().into_any(),
                }}
            </main>
        </div>
    }
}
