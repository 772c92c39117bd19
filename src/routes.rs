//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own. It server-renders the Leptos app for every
//! client route, serves the compiled WASM/CSS bundle under `/pkg` and answers
//! `/healthz` for probes.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{HostConfig, HostError};

/// Load Leptos options, applying the configured site root override.
///
/// # Errors
///
/// Returns `HostError::Leptos` if the `[package.metadata.leptos]` section is
/// missing or malformed.
pub fn leptos_options(config: &HostConfig) -> Result<LeptosOptions, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let mut options = conf.leptos_options;
    if let Some(root) = &config.site_root {
        options.site_root = root.as_str().into();
    }
    Ok(options)
}

/// Leptos SSR routes + static bundle + health probe.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(vault_client::app::App);
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || vault_client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(vault_client::app::shell))
        .with_state(leptos_options);

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;
