//! Host configuration parsed from environment variables.
//!
//! ERROR HANDLING
//! ==============
//! Every startup failure is a [`HostError`] returned from `main`; nothing in
//! the host panics on bad input.

use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Overrides the Leptos `site-root` (where `/pkg` is served from).
    pub site_root: Option<String>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `VAULT_HOST`: bind address, default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `VAULT_SITE_ROOT`: Leptos site root override
    ///
    /// # Errors
    ///
    /// Returns `InvalidEnv` when `VAULT_HOST` or `PORT` does not parse.
    pub fn from_env() -> Result<Self, HostError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`] over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEnv` when `VAULT_HOST` or `PORT` does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, HostError> {
        let raw_host = lookup("VAULT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let host = raw_host
            .trim()
            .parse()
            .map_err(|_| HostError::InvalidEnv { var: "VAULT_HOST", value: raw_host.clone() })?;
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| HostError::InvalidEnv { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let site_root = lookup("VAULT_SITE_ROOT").filter(|v| !v.trim().is_empty());
        Ok(Self { host, port, site_root })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
