// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Type definitions for the ticker payload and the price response

use serde::{Deserialize, Serialize};

/// Ticker document returned by the upstream, e.g. `{"symbol":"BTCUSDT","price":"67890.12"}`
///
/// `price` stays decimal text so the caller sees exactly what the upstream sent.
/// Only `price` is required; a missing `symbol` decodes as empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PriceQuote {
    #[serde(default)]
    pub symbol: String,
    pub price: String,
}

/// Body of a successful `GET /bitcoin`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceResponse {
    pub currency: String,
    pub price: String,
    pub source: String,
}

impl PriceResponse {
    pub const CURRENCY: &'static str = "USD";
    pub const SOURCE: &'static str = "Binance";
}

impl From<PriceQuote> for PriceResponse {
    fn from(quote: PriceQuote) -> Self {
        Self {
            currency: Self::CURRENCY.to_string(),
            price: quote.price,
            source: Self::SOURCE.to_string(),
        }
    }
}
