// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Application state shared across HTTP handlers

use crate::binance::BinanceClient;
use crate::config::Config;
use crate::error::Result;
use crate::metrics::MetricsRegistry;
use crate::probe::ReadinessProbe;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub metrics: MetricsRegistry,
    pub binance: BinanceClient,
    pub probe: ReadinessProbe,
}

impl AppState {
    /// Builds the outbound clients described by `config`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an HTTP client cannot be built.
    pub fn new(config: Config, metrics: MetricsRegistry) -> Result<Self> {
        let binance = BinanceClient::new(config.upstream_url.clone(), config.upstream_timeout)?;
        let probe = ReadinessProbe::new(
            config.readiness_probe_url.clone(),
            config.readiness_timeout,
        )?;
        Ok(Self {
            config,
            metrics,
            binance,
            probe,
        })
    }
}
