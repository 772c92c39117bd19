//! Transfer page: hand an asset hash to a recipient on the mock ledger.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::navbar::Navbar;
use crate::components::toaster::notify;
use crate::net::ledger::{SimulatedLedger, TRANSFER_LATENCY_MS, settle};
use crate::state::notify::{NotificationState, Notice};
use crate::state::transfer::{TransferPhase, TransferSession, transferred_notice};
use crate::util::browser::copy_to_clipboard;
use crate::util::timefmt::{format_timestamp, now};

/// Verb passed to shared workflow notices; the transfer guards never use it.
const TRANSFER_VERB: &str = "transfer";

#[component]
pub fn TransferPage() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationState>>();
    let session = RwSignal::new(TransferSession::new());
    let completed = Memo::new(move |_| session.with(|s| s.phase() == TransferPhase::Completed));
    let editable = move || session.with(|s| s.phase() == TransferPhase::Editing);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let ticket = match session.try_update(TransferSession::begin_submit) {
            Some(Ok(ticket)) => ticket,
            Some(Err(err)) => {
                notify(notices, err.notice(TRANSFER_VERB));
                return;
            }
            None => return,
        };
        leptos::task::spawn_local(async move {
            settle(TRANSFER_LATENCY_MS).await;
            match SimulatedLedger::default().transfer(&mut rand::rng(), now()) {
                Ok(receipt) => {
                    log::debug!("transfer #{ticket} -> {}", receipt.transaction_hash);
                    if session.try_update(|s| s.complete(ticket, receipt)).unwrap_or(false) {
                        notify(notices, transferred_notice());
                    }
                }
                Err(err) => {
                    log::warn!("transfer #{ticket} failed: {err}");
                    if session.try_update(|s| s.fail(ticket)).unwrap_or(false) {
                        notify(notices, err.notice());
                    }
                }
            }
        });
    };

    let receipt_view = move || {
        let (source, recipient, receipt) =
            session.with(|s| (s.source_hash().to_owned(), s.recipient().to_owned(), s.receipt().cloned()));
        let (tx_hash, completed_at) = receipt
            .map(|r| (r.transaction_hash, format_timestamp(r.completed_at)))
            .unwrap_or_default();
        let tx_for_copy = tx_hash.clone();
        let on_copy = move |_| {
            copy_to_clipboard(&tx_for_copy);
            notify(notices, Notice::info("Transaction hash copied to clipboard"));
        };
        view! {
            <div class="transfer-receipt">
                <div class="result-card__icon result-card__icon--success">"✓"</div>
                <h2>"Transfer Complete"</h2>
                <p>"The asset ownership has been successfully transferred on the blockchain."</p>
                <div class="result-card__details glass-card">
                    <h3>"Transaction Details"</h3>
                    <dl class="detail-list">
                        <dt>"Asset Hash"</dt>
                        <dd class="mono">{source}</dd>
                        <dt>"Transferred To"</dt>
                        <dd>{recipient}</dd>
                        <dt>"Transaction Hash"</dt>
                        <dd class="result-card__row">
                            <span class="mono">{tx_hash}</span>
                            <button class="chip-button" on:click=on_copy>"Copy"</button>
                        </dd>
                        <dt>"Timestamp"</dt>
                        <dd>{completed_at}</dd>
                    </dl>
                </div>
                <div class="result-card__actions">
                    <button class="crypto-button" on:click=move |_| session.update(TransferSession::start_another)>
                        "Transfer Another Asset"
                    </button>
                </div>
            </div>
        }
    };

    let form_view = move || {
        view! {
            <form class="transfer-form" on:submit=on_submit>
                <p class="transfer-form__intro">
                    "Enter the unique hash of the asset you want to transfer and the recipient's ID to securely transfer ownership."
                </p>
                <label for="asset-hash">"Asset Hash"</label>
                <input
                    id="asset-hash"
                    type="text"
                    placeholder="Enter the hash of the asset"
                    readonly=move || !editable()
                    prop:value=move || session.with(|s| s.source_hash().to_owned())
                    on:input=move |ev| session.update(|s| s.set_source_hash(event_target_value(&ev)))
                />
                <p class="field-hint">"The unique identifier of the asset you want to transfer"</p>
                <label for="recipient-id">"Recipient ID"</label>
                <input
                    id="recipient-id"
                    type="text"
                    placeholder="Enter the recipient's wallet address or user ID"
                    readonly=move || !editable()
                    prop:value=move || session.with(|s| s.recipient().to_owned())
                    on:input=move |ev| session.update(|s| s.set_recipient(event_target_value(&ev)))
                />
                <p class="field-hint">"The wallet address or user ID of the recipient"</p>
                <p class="transfer-form__warning">"This transfer cannot be reversed once completed"</p>
                <button
                    type="submit"
                    class="crypto-button crypto-button--wide"
                    disabled=move || session.with(TransferSession::is_submitting)
                >
                    {move || {
                        if session.with(TransferSession::is_submitting) {
                            "Processing transfer..."
                        } else {
                            "Transfer Ownership →"
                        }
                    }}
                </button>
            </form>
        }
    };

    view! {
        <div class="page transfer-page">
            <Navbar />
            <main class="page__content">
                <header class="page__header">
                    <h1>
                        <span class="text-gradient">"Transfer"</span>
                        " Asset Ownership"
                    </h1>
                    <p>
                        "Securely transfer ownership of your digital assets to another user or wallet "
                        "while maintaining the asset's verifiable history on the blockchain."
                    </p>
                </header>
                <section class="transfer-card glass-card">
                    {move || if completed.get() { receipt_view().into_any() } else { form_view().into_any() }}
                </section>
            </main>
        </div>
    }
}
