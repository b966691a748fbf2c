// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Label types for Prometheus metrics

use prometheus_client::encoding::EncodeLabelSet;

use crate::error::AppError;

/// Upstream failure kind: `unavailable` or `decode`
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct UpstreamErrorLabels {
    pub kind: String,
}

impl UpstreamErrorLabels {
    pub const UNAVAILABLE: &'static str = "unavailable";
    pub const DECODE: &'static str = "decode";

    pub fn for_error(error: &AppError) -> Self {
        let kind = match error {
            AppError::Decode(_) => Self::DECODE,
            _ => Self::UNAVAILABLE,
        };
        Self {
            kind: kind.to_string(),
        }
    }
}
