//! Profile page: editable display fields, wallet address and activity log.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::state::profile::{ActivityEntry, ProfileRecord, ProfileState, seed_activity};
use crate::state::wallet::WalletState;
use crate::util::timefmt::{format_date, now};

const QUICK_ACTIONS: [(&str, &str); 3] =
    [("/upload", "Upload New Asset"), ("/verify", "Verify an Asset"), ("/assets", "View My Assets")];

fn activity_view(entry: ActivityEntry) -> impl IntoView {
    view! {
        <li class="activity">
            <div class="activity__head">
                <span class=format!("activity__kind activity__kind--{}", entry.kind.label().to_lowercase())>
                    {entry.kind.label()}
                </span>
                <span class="activity__date">{entry.occurred_at}</span>
            </div>
            <p>
                <span class="muted">"Asset: "</span>
                {entry.asset}
            </p>
            {entry.recipient.map(|to| {
                view! {
                    <p>
                        <span class="muted">"Transferred to: "</span>
                        <span class="text-accent">{to}</span>
                    </p>
                }
            })}
            <span class=format!("badge badge--{}", entry.status.css_modifier())>{entry.status.label()}</span>
        </li>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();
    let account = wallet.get_untracked().account;
    let profile = RwSignal::new(ProfileState::new(ProfileRecord::new(now().date(), account.as_deref())));
    let navigate = use_navigate();

    Effect::new(move || {
        let account = wallet.with(|w| w.account.clone());
        profile.update(|p| p.sync_wallet(account.as_deref()));
    });

    let activity = seed_activity();
    let editing = move || profile.with(ProfileState::is_editing);

    view! {
        <div class="page profile-page">
            <Navbar />
            <main class="page__content">
                <header class="page__header">
                    <h1>
                        <span class="text-gradient">"Your"</span>
                        " Profile"
                    </h1>
                    <p>"Manage your personal information and view your activity"</p>
                </header>
                <div class="profile-grid">
                    <aside class="profile-grid__side">
                        <section class="profile-card glass-card">
                            <div class="avatar">{move || profile.with(|p| p.committed().avatar_initial())}</div>
                            <Show
                                when=editing
                                fallback=move || {
                                    view! {
                                        <h2>{move || profile.with(|p| p.committed().name_or_placeholder().to_owned())}</h2>
                                        <p class="muted">
                                            {move || profile.with(|p| p.committed().email_or_placeholder().to_owned())}
                                        </p>
                                    }
                                }
                            >
                                <label>"Name"</label>
                                <input
                                    type="text"
                                    placeholder="Enter your name"
                                    prop:value=move || profile.with(|p| p.draft().display_name.clone())
                                    on:input=move |ev| profile.update(|p| p.set_draft_name(event_target_value(&ev)))
                                />
                                <label>"Email"</label>
                                <input
                                    type="email"
                                    placeholder="Enter your email"
                                    prop:value=move || profile.with(|p| p.draft().email.clone())
                                    on:input=move |ev| profile.update(|p| p.set_draft_email(event_target_value(&ev)))
                                />
                            </Show>
                            <dl class="profile-card__facts">
                                <dt>"Wallet Address"</dt>
                                <dd class="mono truncate">
                                    {move || profile.with(|p| p.committed().wallet_address.clone())}
                                </dd>
                                <dt>"Member Since"</dt>
                                <dd>{move || profile.with(|p| format_date(p.committed().member_since))}</dd>
                                <dt>"Assets Owned"</dt>
                                <dd>{move || profile.with(|p| p.committed().owned_asset_count)}</dd>
                            </dl>
                            <div class="profile-card__actions">
                                <button class="crypto-button" on:click=move |_| profile.update(ProfileState::toggle)>
                                    {move || if editing() { "Save" } else { "Edit Profile" }}
                                </button>
                                <Show when=editing>
                                    <button class="outline-button" on:click=move |_| profile.update(ProfileState::cancel)>
                                        "Cancel"
                                    </button>
                                </Show>
                            </div>
                        </section>
                        <section class="quick-actions glass-card">
                            <h3>"Quick Actions"</h3>
                            {QUICK_ACTIONS
                                .into_iter()
                                .map(|(path, label)| {
                                    let navigate = navigate.clone();
                                    view! {
                                        <button
                                            class="quick-actions__item"
                                            on:click=move |_| navigate(path, NavigateOptions::default())
                                        >
                                            {label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </section>
                    </aside>
                    <section class="activity-log glass-card">
                        <h3>"Recent Activity"</h3>
                        {if activity.is_empty() {
                            view! {
                                <div class="empty-state">
                                    <p>"No activity yet"</p>
                                    <p class="muted">"Your recent actions will appear here"</p>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! { <ul class="activity-list">{activity.into_iter().map(activity_view).collect_view()}</ul> }
                                .into_any()
                        }}
                    </section>
                </div>
            </main>
        </div>
    }
}
