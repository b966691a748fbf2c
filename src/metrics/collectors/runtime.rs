// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! tokio runtime metrics

use prometheus_client::collector::Collector;
use prometheus_client::encoding::DescriptorEncoder;
use tokio::runtime::Handle;

use super::encode_gauge;

/// Reports worker and task counts of the runtime serving the scrape
#[derive(Debug, Default)]
pub struct RuntimeCollector;

impl Collector for RuntimeCollector {
    #[allow(clippy::cast_possible_wrap)]
    fn encode(&self, mut encoder: DescriptorEncoder) -> Result<(), std::fmt::Error> {
        let Ok(handle) = Handle::try_current() else {
            return Ok(());
        };
        let metrics = handle.metrics();

        encode_gauge(
            &mut encoder,
            "tokio_runtime_workers",
            "Number of worker threads used by the runtime",
            metrics.num_workers() as i64,
        )?;
        encode_gauge(
            &mut encoder,
            "tokio_runtime_alive_tasks",
            "Number of tasks currently alive in the runtime",
            metrics.num_alive_tasks() as i64,
        )?;
        encode_gauge(
            &mut encoder,
            "tokio_runtime_global_queue_depth",
            "Number of tasks pending in the runtime global queue",
            metrics.global_queue_depth() as i64,
        )?;
        Ok(())
    }
}
