// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Outbound HTTP client construction

use std::time::Duration;

use crate::error::{AppError, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds a client whose every request, body included, is bounded by `timeout`
pub fn client_with_timeout(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {e}")))
}
