// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry and update logic

mod init;
mod scrape;
mod update;

use crate::metrics::labels::UpstreamErrorLabels;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Process-wide metrics, cloned into every handler through the app state.
///
/// Clones share the same underlying atomics, so an increment made through
/// one clone is visible to every scrape.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    // price endpoint
    price_requests: Counter,
    // upstream call outcome
    upstream_errors: Family<UpstreamErrorLabels, Counter>,
    upstream_duration_milliseconds: Gauge,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
