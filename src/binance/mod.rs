// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Binance ticker API client
//!
//! Fetches the latest `BTCUSDT` price from the public ticker endpoint.

mod client;
mod types;

pub use client::BinanceClient;
pub use types::{PriceQuote, PriceResponse};
