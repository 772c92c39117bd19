mod config;
mod routes;

use config::{HostConfig, HostError};

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(err) = dotenv {
        if !err.not_found() {
            tracing::warn!(error = %err, "ignoring unreadable .env");
        }
    }

    let config = HostConfig::from_env()?;
    let leptos_options = routes::leptos_options(&config)?;
    let app = routes::app(leptos_options);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "cryptex vault listening");
    axum::serve(listener, app).await?;
    Ok(())
}
