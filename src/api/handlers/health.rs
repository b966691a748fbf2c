// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;
use std::time::Instant;

use crate::api::AppState;

/// GET /healthz/live
///
/// Answers as long as the process accepts connections. Checks nothing else.
pub async fn liveness() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// GET /healthz/ready
///
/// Ready only if the outbound probe gets any HTTP response within its timeout.
pub async fn readiness(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let start = Instant::now();
    match state.probe.check().await {
        Ok(status) => {
            tracing::debug!(
                "Readiness probe {} answered {} in {:?}",
                state.probe.url(),
                status,
                start.elapsed()
            );
            (StatusCode::OK, "READY")
        }
        Err(e) => {
            tracing::warn!(
                "Readiness probe {} failed after {:?}: {}",
                state.probe.url(),
                start.elapsed(),
                e
            );
            (StatusCode::SERVICE_UNAVAILABLE, "NOT READY")
        }
    }
}
