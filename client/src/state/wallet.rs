//! Connected wallet account, shared app-wide.

/// Set by the connect button, read by the profile page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalletState {
    pub account: Option<String>,
    pub connecting: bool,
}
