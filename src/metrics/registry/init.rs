// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Registry initialization and metric registration

use crate::metrics::collectors::{ProcessCollector, RuntimeCollector};
use crate::metrics::labels::UpstreamErrorLabels;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::MetricsRegistry;

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let price_requests = Counter::default();
        registry.register(
            "bitcoin_price_requests",
            "Total number of Bitcoin price requests",
            price_requests.clone(),
        );

        let upstream_errors = Family::<UpstreamErrorLabels, Counter>::default();
        registry.register(
            "bitcoin_price_upstream_errors",
            "Failed upstream price calls by kind (unavailable, decode)",
            upstream_errors.clone(),
        );
        // Expose both kinds from the start so rates work before the first failure
        for kind in [UpstreamErrorLabels::UNAVAILABLE, UpstreamErrorLabels::DECODE] {
            let _ = upstream_errors.get_or_create(&UpstreamErrorLabels {
                kind: kind.to_string(),
            });
        }

        let upstream_duration_milliseconds = Gauge::default();
        registry.register(
            "bitcoin_price_upstream_duration_milliseconds",
            "Duration of the last upstream price call in milliseconds",
            upstream_duration_milliseconds.clone(),
        );

        registry.register_collector(Box::new(ProcessCollector::new()));
        registry.register_collector(Box::new(RuntimeCollector));

        Self {
            registry: Arc::new(Mutex::new(registry)),
            price_requests,
            upstream_errors,
            upstream_duration_milliseconds,
        }
    }
}
