// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry for the Bitcoin price exporter
//!
//! Contains the label types, the scrape-time collectors and the Prometheus registry.

mod collectors;
mod labels;
mod registry;


/// Scrape-time process and runtime collectors
pub use collectors::{ProcessCollector, RuntimeCollector};

/// Labels for upstream failures
pub use labels::UpstreamErrorLabels;

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
