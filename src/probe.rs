// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Outbound connectivity check backing the readiness endpoint

use std::time::Duration;

use reqwest::StatusCode;

use crate::error::Result;
use crate::http::client_with_timeout;

/// Issues a single bounded GET against a fixed URL
#[derive(Debug, Clone)]
pub struct ReadinessProbe {
    http: reqwest::Client,
    url: String,
}

impl ReadinessProbe {
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

    /// Succeeds on any HTTP response, whatever its status
    ///
    /// # Errors
    ///
    /// `AppError::Upstream` on connection failure or timeout.
    pub async fn check(&self) -> Result<StatusCode> {
        let response = self.http.get(&self.url).send().await?;
        Ok(response.status())
    }
}
