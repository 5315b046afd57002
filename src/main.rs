use std::sync::Arc;

use anyhow::Context;
use quotebook::{
    config::ServerConfig,
    core::store::QuoteStore,
    service::quote_service::QuoteService,
    telemetry,
    transport::{self, AppState},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    telemetry::init_tracing().context("failed to install tracing subscriber")?;

    let config = ServerConfig::from_env().context("failed to load server configuration")?;

    let store = Arc::new(QuoteStore::new());
    tracing::info!("quote store created");
    let service = Arc::new(QuoteService::new(store));
    tracing::info!("quote service created");
    let app = transport::router(AppState::new(service, config.request_timeout));
    tracing::info!("routes registered");

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    tracing::info!(addr = %config.bind_addr(), "quote server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("quote server error")?;

    tracing::info!("quote server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(err = ?err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
