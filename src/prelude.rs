// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! ```rust
//! use bitcoin_price_exporter::prelude::*;
//! ```

// Core types
pub use crate::config::Config;
pub use crate::error::{AppError, Result};

// HTTP API
pub use crate::api::{AppState, create_router};

// Metrics types
pub use crate::metrics::{MetricsRegistry, ProcessCollector, RuntimeCollector, UpstreamErrorLabels};

// Outbound clients
pub use crate::binance::{BinanceClient, PriceQuote, PriceResponse};
pub use crate::probe::ReadinessProbe;
