//! Wallet connector over an injected provider capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser exposes `window.ethereum` when a wallet extension is installed.
//! Pages never touch that global directly: they go through [`WalletProvider`],
//! whose availability is queried explicitly so tests can substitute a stub.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use std::future::Future;

use crate::state::notify::Notice;
use crate::util::hex::shorten;

/// Where users without a wallet are sent.
pub const INSTALL_URL: &str = "https://metamask.io/download/";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("no wallet provider is installed")]
    ProviderUnavailable,
    #[error("wallet connection rejected: {0}")]
    ConnectionRejected(String),
}

impl WalletError {
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::ProviderUnavailable => {
                Notice::destructive("MetaMask Not Found", "Please install MetaMask extension to continue")
            }
            Self::ConnectionRejected(_) => {
                Notice::destructive("Connection Failed", "Failed to connect to MetaMask. Please try again.")
            }
        }
    }
}

/// Host-supplied capability for requesting wallet account access.
pub trait WalletProvider {
    /// Whether a provider is present at all.
    fn is_available(&self) -> bool;

    /// Ask the user to expose their accounts. `Err` carries the provider's
    /// rejection reason.
    fn request_accounts(&self) -> impl Future<Output = Result<Vec<String>, String>>;
}

/// Request account access and return the first account.
///
/// # Errors
///
/// `ProviderUnavailable` when no provider is present; `ConnectionRejected`
/// when the request is refused, errors, or yields no account.
pub async fn connect<P: WalletProvider>(provider: &P) -> Result<String, WalletError> {
    if !provider.is_available() {
        return Err(WalletError::ProviderUnavailable);
    }
    let accounts = provider
        .request_accounts()
        .await
        .map_err(WalletError::ConnectionRejected)?;
    accounts
        .into_iter()
        .next()
        .filter(|account| !account.is_empty())
        .ok_or_else(|| WalletError::ConnectionRejected("provider returned no accounts".to_owned()))
}

#[must_use]
pub fn connected_notice(account: &str) -> Notice {
    Notice::success(
        "Successfully connected!",
        format!("Connected to account: {}", shorten(account, 6, 4)),
    )
}

/// `window.ethereum`, as injected by MetaMask-compatible extensions.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct InjectedProvider;

#[cfg(feature = "hydrate")]
impl InjectedProvider {
    fn ethereum() -> Option<wasm_bindgen::JsValue> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &"ethereum".into()).ok()?;
        (!value.is_undefined() && !value.is_null()).then_some(value)
    }
}

#[cfg(feature = "hydrate")]
fn describe_js_error(err: &wasm_bindgen::JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    js_sys::Reflect::get(err, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| "unknown provider error".to_owned())
}

#[cfg(feature = "hydrate")]
impl WalletProvider for InjectedProvider {
    fn is_available(&self) -> bool {
        Self::ethereum().is_some()
    }

    async fn request_accounts(&self) -> Result<Vec<String>, String> {
        use wasm_bindgen::JsCast as _;

        let ethereum = Self::ethereum().ok_or_else(|| "provider unavailable".to_owned())?;
        let request = js_sys::Reflect::get(&ethereum, &"request".into())
            .map_err(|e| describe_js_error(&e))?
            .dyn_into::<js_sys::Function>()
            .map_err(|e| describe_js_error(&e))?;

        let args = js_sys::Object::new();
        js_sys::Reflect::set(&args, &"method".into(), &"eth_requestAccounts".into())
            .map_err(|e| describe_js_error(&e))?;

        let promise = request
            .call1(&ethereum, &args)
            .map_err(|e| describe_js_error(&e))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|e| describe_js_error(&e))?;
        let result = wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map_err(|e| describe_js_error(&e))?;

        Ok(js_sys::Array::from(&result)
            .iter()
            .filter_map(|v| v.as_string())
            .collect())
    }
}
