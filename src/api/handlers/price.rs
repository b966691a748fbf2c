// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{Json, extract::State};
use std::sync::Arc;
use std::time::Instant;

use crate::api::AppState;
use crate::binance::PriceResponse;
use crate::error::Result;

/// GET /bitcoin
///
/// Proxies the upstream ticker. The request counter is bumped before the
/// outbound call so every invocation is counted, whatever the outcome.
pub async fn bitcoin_price(State(state): State<Arc<AppState>>) -> Result<Json<PriceResponse>> {
    let start = Instant::now();
    state.metrics.record_price_request();

    let result = state.binance.fetch_quote().await;
    let elapsed = start.elapsed();
    state.metrics.record_upstream_duration(elapsed);

    match result {
        Ok(quote) => {
            let symbol = if quote.symbol.is_empty() {
                "unknown symbol"
            } else {
                quote.symbol.as_str()
            };
            tracing::info!(
                "Fetched {} price {} USD in {:?}",
                symbol,
                quote.price,
                elapsed
            );
            Ok(Json(PriceResponse::from(quote)))
        }
        Err(e) => {
            state.metrics.record_upstream_error(&e);
            tracing::warn!("Upstream price call failed after {:?}: {}", elapsed, e);
            Err(e)
        }
    }
}
