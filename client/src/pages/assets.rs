//! Assets page: searchable, filterable grid over the seed catalog.
//!
//! Cards fade in one at a time. The reveal is cosmetic: filtering is
//! synchronous, and a new query restarts the reveal from the first card.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::asset_card::AssetCard;
use crate::components::navbar::Navbar;
use crate::state::asset::AssetKind;
use crate::state::catalog::{KindFilter, REVEAL_STEP_MS, empty_state_message, filter_assets, seed_catalog};

#[component]
pub fn AssetsPage() -> impl IntoView {
    let catalog = StoredValue::new(seed_catalog());
    let query = RwSignal::new(String::new());
    let filter = RwSignal::new(KindFilter::All);

    let visible = Memo::new(move |_| {
        let q = query.get();
        let f = filter.get();
        catalog.with_value(|records| filter_assets(records, &q, f).into_iter().cloned().collect::<Vec<_>>())
    });

    // Number of cards revealed so far; `generation` cancels superseded reveals.
    let revealed = RwSignal::new(0_usize);
    let generation = RwSignal::new(0_u64);
    Effect::new(move || {
        let total = visible.with(Vec::len);
        revealed.set(0);
        generation.update(|g| *g += 1);
        let mine = generation.get_untracked();
        leptos::task::spawn_local(async move {
            for _ in 0..total {
                crate::net::ledger::settle(REVEAL_STEP_MS).await;
                if generation.get_untracked() != mine {
                    return;
                }
                revealed.update(|n| *n += 1);
            }
        });
    });

    view! {
        <div class="page assets-page">
            <Navbar />
            <main class="page__content">
                <header class="page__header page__header--split">
                    <div>
                        <h1>
                            <span class="text-gradient">"Your Protected"</span>
                            " Assets"
                        </h1>
                        <p>"All your digital creations secured on the blockchain with Cryptex Vault"</p>
                    </div>
                    <div class="search-bar">
                        <input
                            type="text"
                            class="search-bar__input"
                            placeholder="Search assets..."
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                        <select
                            class="search-bar__filter"
                            prop:value=move || filter.get().as_str()
                            on:change=move |ev| filter.set(KindFilter::parse(&event_target_value(&ev)))
                        >
                            <option value="all">"All Types"</option>
                            <option value=AssetKind::Image.as_str()>"Images"</option>
                            <option value=AssetKind::Document.as_str()>"PDFs"</option>
                            <option value=AssetKind::Audio.as_str()>"Audio"</option>
                        </select>
                    </div>
                </header>
                <Show
                    when=move || !visible.with(Vec::is_empty)
                    fallback=move || {
                        view! {
                            <div class="empty-state glass-card">
                                <h3>"No assets found"</h3>
                                <p>{move || empty_state_message(&query.get(), filter.get())}</p>
                                <A href="/upload" attr:class="crypto-button">
                                    "Upload Your First Asset"
                                </A>
                            </div>
                        }
                    }
                >
                    <div class="asset-grid">
                        {move || {
                            visible
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, record)| {
                                    let class = move || {
                                        if index < revealed.get() {
                                            "asset-grid__item asset-grid__item--visible"
                                        } else {
                                            "asset-grid__item"
                                        }
                                    };
                                    view! {
                                        <div class=class>
                                            <AssetCard record=record />
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </main>
        </div>
    }
}
