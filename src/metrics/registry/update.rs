// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metric updates issued by the HTTP handlers

use std::time::Duration;

use crate::error::AppError;
use crate::metrics::labels::UpstreamErrorLabels;

use super::MetricsRegistry;

impl MetricsRegistry {
    /// Counts one price endpoint invocation, whatever its outcome
    pub fn record_price_request(&self) {
        self.price_requests.inc();
    }

    pub fn record_upstream_error(&self, error: &AppError) {
        self.upstream_errors
            .get_or_create(&UpstreamErrorLabels::for_error(error))
            .inc();
    }

    pub fn record_upstream_duration(&self, duration: Duration) {
        // Whole milliseconds, rounded
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let millis = (duration.as_secs_f64() * 1000.0).round() as i64;
        self.upstream_duration_milliseconds.set(millis);
    }

    /// Current value of the price request counter
    pub fn price_requests_total(&self) -> u64 {
        self.price_requests.get()
    }
}
