//! Chatbox relay server
//!
//! Usage:
//!   BIND_ADDRESS=0.0.0.0:4000 chatbox-relay
//!   LOG_FORMAT=json RUST_LOG=chatbox_relay=debug chatbox-relay

use anyhow::Context;
use chatbox_relay::{router, Config, WebSocketState};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().context("Failed to load configuration")?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    if config.json_logs {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(env_filter)
            .init();
    }

    let app = router(WebSocketState::new());

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    tracing::info!(bind_address = %config.bind_address, "Relay listening");

    axum::serve(listener, app).await.context("Relay server failed")?;
    Ok(())
}
