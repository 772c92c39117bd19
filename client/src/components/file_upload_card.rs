//! File picker card with drag-and-drop.
//!
//! The card only converts the browser `File` into [`FileInfo`] and hands it
//! up; acceptance is decided by the page's workflow so rejections leave the
//! held file untouched.

use leptos::prelude::*;

use crate::state::asset::{AssetKind, FileInfo};

fn card_title(kind: AssetKind, verb: &str) -> String {
    let noun = match kind {
        AssetKind::Image => "Image",
        AssetKind::Document => "PDF",
        AssetKind::Audio => "Audio",
    };
    format!("{verb} {noun}")
}

fn card_description(kind: AssetKind) -> &'static str {
    match kind {
        AssetKind::Image => "Protect your images, photos and visual creations",
        AssetKind::Document => "Secure your documents, articles and written works",
        AssetKind::Audio => "Copyright your music, podcasts and audio content",
    }
}

#[cfg(feature = "hydrate")]
fn file_info(file: &web_sys::File) -> FileInfo {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let byte_size = file.size().max(0.0) as u64;
    FileInfo::new(file.name(), byte_size, file.type_())
}

#[component]
pub fn FileUploadCard(
    kind: AssetKind,
    verb: &'static str,
    #[prop(into)] selected: Signal<Option<FileInfo>>,
    #[prop(into)] on_file: Callback<FileInfo>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let drag_active = RwSignal::new(false);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            if let Some(file) = input.files().and_then(|list| list.get(0)) {
                on_file.run(file_info(&file));
            }
            // Allow re-picking the same file after a rejection.
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, on_file);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_active.set(false);
        #[cfg(feature = "hydrate")]
        if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|list| list.get(0)) {
            on_file.run(file_info(&file));
        }
    };

    let zone_class = move || {
        if drag_active.get() { "upload-card__zone upload-card__zone--active" } else { "upload-card__zone" }
    };

    view! {
        <div class="upload-card glass-card">
            <Show
                when=move || selected.get().is_some()
                fallback=move || {
                    view! {
                        <div class="upload-card__empty">
                            <h3 class="upload-card__title">{card_title(kind, verb)}</h3>
                            <p class="upload-card__description">{card_description(kind)}</p>
                            <label
                                class=zone_class
                                on:dragenter=move |ev: leptos::ev::DragEvent| {
                                    ev.prevent_default();
                                    drag_active.set(true);
                                }
                                on:dragover=move |ev: leptos::ev::DragEvent| {
                                    ev.prevent_default();
                                    drag_active.set(true);
                                }
                                on:dragleave=move |_| drag_active.set(false)
                                on:drop=on_drop
                            >
                                <p>
                                    <span class="upload-card__cta">"Click to upload"</span>
                                    " or drag and drop"
                                </p>
                                <p class="upload-card__limit">{format!("Max file size: {}MB", kind.max_size_mb())}</p>
                                <input
                                    type="file"
                                    class="upload-card__input"
                                    accept=kind.accept_attr()
                                    on:change=on_change
                                />
                            </label>
                            <p class="upload-card__note">"Your file will be securely stored on the blockchain"</p>
                        </div>
                    }
                }
            >
                <div class="upload-card__selected">
                    <div class="upload-card__check">"✓"</div>
                    <h3 class="upload-card__title">"File Selected"</h3>
                    <p class="upload-card__name">{move || selected.get().map(|f| f.name).unwrap_or_default()}</p>
                    <p class="upload-card__size">{move || selected.get().map(|f| f.size_label()).unwrap_or_default()}</p>
                    <button class="link-button" on:click=move |_| on_clear.run(())>
                        "Select a different file"
                    </button>
                </div>
            </Show>
        </div>
    }
}
