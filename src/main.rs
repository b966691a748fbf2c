// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::net::SocketAddr;
use std::sync::Arc;

use bitcoin_price_exporter::{AppState, Config, MetricsRegistry, Result, create_router};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;

    tracing::info!("Upstream price API: {}", config.upstream_url);
    tracing::info!(
        "Upstream timeout {:?}, readiness probe {} (timeout {:?})",
        config.upstream_timeout,
        config.readiness_probe_url,
        config.readiness_timeout
    );
    if config.api_key_present {
        tracing::info!("API_KEY is set but not used by any endpoint");
    }

    let metrics = MetricsRegistry::new();
    let state = Arc::new(AppState::new(config.clone(), metrics)?);

    // Graceful shutdown on Ctrl+C
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    let app = create_router(state);

    let addr: SocketAddr = config.server_addr().parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Bitcoin price exporter starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /bitcoin       - BTC price in USD");
    tracing::info!("  - GET /metrics       - Prometheus metrics");
    tracing::info!("  - GET /healthz/live  - Liveness");
    tracing::info!("  - GET /healthz/ready - Readiness");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    Ok(())
}

fn setup_tracing() {
    // RUST_LOG wins; otherwise default to "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
