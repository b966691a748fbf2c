// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module for the Bitcoin price exporter
//!
//! # Endpoints
//! - `GET /bitcoin` — current BTC price in USD
//! - `GET /metrics` — Prometheus metrics
//! - `GET /healthz/live` — liveness
//! - `GET /healthz/ready` — readiness

pub mod handlers;
mod state;

use axum::{Router, routing::get};
use std::sync::Arc;

pub use state::AppState;

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/bitcoin", get(handlers::bitcoin_price))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/healthz/live", get(handlers::liveness))
        .route("/healthz/ready", get(handlers::readiness))
        .with_state(state)
}
