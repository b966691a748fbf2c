// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Bitcoin Price Exporter
//!
//! HTTP service that proxies the Binance `BTCUSDT` ticker as JSON and
//! exposes Prometheus metrics plus liveness and readiness probes.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `binance`: upstream ticker client
//! - `config`: configuration management
//! - `error`: error types
//! - `metrics`: Prometheus registry and collectors
//! - `probe`: readiness connectivity check
//! - `prelude`: commonly used types and traits

mod api;
mod binance;
mod config;
mod error;
mod http;
mod metrics;
mod probe;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Metrics registry and labels
pub use metrics::{MetricsRegistry, UpstreamErrorLabels};

/// Upstream ticker client and payload types
pub use binance::{BinanceClient, PriceQuote, PriceResponse};

/// Readiness connectivity check
pub use probe::ReadinessProbe;
