//! Flagdesk - moderation flag API server
//!
//! Main entry point for the HTTP service.

use std::sync::Arc;

use anyhow::{Context, Result};
use flagdesk_api::utils::logging::init_tracing;
use flagdesk_api::{app, AppContext};
use flagdesk_domain::Config;
use flagdesk_infra::config;

#[tokio::main]
async fn main() -> Result<()> {
    // Environment must be populated before the config loader reads it
    let dotenv = dotenvy::dotenv();

    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_tracing(&config.logging).map_err(anyhow::Error::msg)?;

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env file loaded"),
    }
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "no configuration found, using defaults");
    }

    let ctx = Arc::new(AppContext::new(config));
    let bind_addr = ctx.config.server.bind_addr.clone();

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "flagdesk listening");

    axum::serve(listener, app(Arc::clone(&ctx)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    ctx.shutdown().await;
    tracing::info!("flagdesk stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
