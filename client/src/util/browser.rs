//! Thin wrappers over browser APIs used by pages.
//!
//! Every function is a no-op outside the `hydrate` build so SSR rendering and
//! native tests never touch `web_sys`.

/// Fire-and-forget clipboard write. Returns whether a clipboard was available.
#[cfg(feature = "hydrate")]
pub fn copy_to_clipboard(text: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let clipboard: Option<web_sys::Clipboard> = window.navigator().clipboard().into();
    let Some(clipboard) = clipboard else {
        return false;
    };
    let _ = clipboard.write_text(text);
    true
}

#[cfg(not(feature = "hydrate"))]
pub fn copy_to_clipboard(_text: &str) -> bool {
    false
}

/// Open `url` in a new tab (used for the wallet install page).
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.open_with_url_and_target(url, "_blank").is_err() {
                log::warn!("could not open {url}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}
