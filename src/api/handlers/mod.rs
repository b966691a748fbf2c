// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod health;
mod metrics;
mod price;

pub use health::{liveness, readiness};
pub use metrics::metrics_handler;
pub use price::bitcoin_price;
