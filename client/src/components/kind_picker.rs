//! Three-card asset kind picker shared by the Upload and Verify pages.

use leptos::prelude::*;

use crate::state::asset::AssetKind;

fn kind_icon(kind: AssetKind) -> &'static str {
    match kind {
        AssetKind::Image => "🖼",
        AssetKind::Document => "📄",
        AssetKind::Audio => "♫",
    }
}

/// `title` and `blurb` render the heading and caption for each kind.
#[component]
pub fn KindPicker(
    title: fn(AssetKind) -> String,
    blurb: fn(AssetKind) -> String,
    #[prop(into)] on_pick: Callback<AssetKind>,
) -> impl IntoView {
    view! {
        <div class="kind-picker">
            {AssetKind::ALL
                .into_iter()
                .map(|kind| {
                    view! {
                        <button class="kind-picker__card glass-card" on:click=move |_| on_pick.run(kind)>
                            <div class="kind-picker__icon">{kind_icon(kind)}</div>
                            <h3 class="kind-picker__title">{title(kind)}</h3>
                            <p class="kind-picker__blurb">{blurb(kind)}</p>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
