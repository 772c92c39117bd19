//! Card for one catalog record.

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::state::asset::AssetKind;
use crate::state::catalog::AssetRecord;
use crate::state::notify::{NotificationState, Notice};
use crate::util::browser::copy_to_clipboard;
use crate::util::hex::shorten;
use crate::util::timefmt::format_timestamp;

fn kind_caption(kind: AssetKind) -> &'static str {
    match kind {
        AssetKind::Image => "Image Asset",
        AssetKind::Document => "PDF Asset",
        AssetKind::Audio => "Audio Asset",
    }
}

#[component]
pub fn AssetCard(record: AssetRecord) -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationState>>();
    let hash = record.content_hash;

    let on_copy = move |_| {
        copy_to_clipboard(hash);
        notify(notices, Notice::info("Copied to clipboard"));
    };
    let on_details = move |_| {
        notify(
            notices,
            Notice::success("View Details", "This would open asset details in a real implementation"),
        );
    };
    let on_verify = move |_| {
        notify(notices, Notice::success("Verify Asset", "This would verify the asset in a real implementation"));
    };

    view! {
        <article class="asset-card glass-card">
            {record.preview_url.map(|url| {
                view! {
                    <div class="asset-card__preview">
                        <img src=url alt=record.display_name />
                    </div>
                }
            })}
            <div class="asset-card__body">
                <h3 class="asset-card__name" title=record.display_name>{record.display_name}</h3>
                <p class="asset-card__kind">{kind_caption(record.kind)}</p>
                <dl class="asset-card__meta">
                    <dt>"Asset Hash:"</dt>
                    <dd>
                        <span class="mono">{shorten(hash, 6, 4)}</span>
                        <button class="asset-card__copy" title="Copy hash" on:click=on_copy>"⧉"</button>
                    </dd>
                    <dt>"Timestamp:"</dt>
                    <dd>{format_timestamp(record.registered_at)}</dd>
                </dl>
                <div class="asset-card__actions">
                    <button class="link-button" on:click=on_details>"View Details"</button>
                    <button class="link-button link-button--accent" on:click=on_verify>"Verify"</button>
                </div>
            </div>
        </article>
    }
}
