// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Custom collectors evaluated at scrape time
//!
//! - `process`: CPU, memory, file descriptors and threads of this process
//! - `runtime`: tokio worker and task counts

mod process;
mod runtime;

pub use process::ProcessCollector;
pub use runtime::RuntimeCollector;

use prometheus_client::encoding::{
    DescriptorEncoder, EncodeCounterValue, EncodeGaugeValue, EncodeMetric,
};
use prometheus_client::metrics::counter::ConstCounter;
use prometheus_client::metrics::gauge::ConstGauge;

fn encode_gauge<N: EncodeGaugeValue>(
    encoder: &mut DescriptorEncoder,
    name: &str,
    help: &str,
    value: N,
) -> Result<(), std::fmt::Error> {
    let gauge = ConstGauge::new(value);
    let metric_encoder = encoder.encode_descriptor(name, help, None, gauge.metric_type())?;
    gauge.encode(metric_encoder)
}

fn encode_counter<N: EncodeCounterValue>(
    encoder: &mut DescriptorEncoder,
    name: &str,
    help: &str,
    value: N,
) -> Result<(), std::fmt::Error> {
    let counter = ConstCounter::new(value);
    let metric_encoder = encoder.encode_descriptor(name, help, None, counter.metric_type())?;
    counter.encode(metric_encoder)
}
