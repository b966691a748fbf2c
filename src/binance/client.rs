// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! High-level ticker client

use std::time::Duration;

use crate::error::Result;
use crate::http::client_with_timeout;

use super::types::PriceQuote;

/// Ticker API client
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BinanceClient {
    http: reqwest::Client,
    url: String,
}

impl BinanceClient {
    /// Creates a client for `url` with a per-call `timeout`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: client_with_timeout(timeout)?,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the current quote
    ///
    /// The upstream status code is not inspected; whatever body comes back
    /// must decode as a ticker document.
    ///
    /// # Errors
    ///
    /// `AppError::Upstream` when the request or body read fails (including
    /// timeout), `AppError::Decode` when the body is not a ticker document.
    pub async fn fetch_quote(&self) -> Result<PriceQuote> {
        let response = self
            .http
            .get(&self.url)
            .header("accept", "application/json")
            .send()
            .await?;
        let body = response.bytes().await?;
        let quote = serde_json::from_slice(&body)?;
        Ok(quote)
    }
}
