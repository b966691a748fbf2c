// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Process metrics read from procfs
//!
//! Only Linux exposes `/proc/self`; elsewhere the collector emits nothing.

use std::path::{Path, PathBuf};

use prometheus_client::collector::Collector;
use prometheus_client::encoding::DescriptorEncoder;

use super::{encode_counter, encode_gauge};

/// Kernel USER_HZ, fixed at 100 for the procfs ABI on all mainstream architectures
const CLOCK_TICKS_PER_SEC: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
struct ProcStat {
    cpu_seconds: f64,
    threads: i64,
    start_ticks: u64,
    virtual_memory_bytes: u64,
}

#[derive(Debug, Clone, PartialEq)]
struct ProcessSnapshot {
    cpu_seconds: f64,
    threads: i64,
    virtual_memory_bytes: u64,
    resident_memory_bytes: Option<u64>,
    open_fds: Option<usize>,
    start_time_seconds: Option<f64>,
}

/// Collects `process_*` metrics for the running exporter
#[derive(Debug)]
pub struct ProcessCollector {
    proc_root: PathBuf,
}

impl Default for ProcessCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessCollector {
    pub fn new() -> Self {
        Self::with_proc_root("/proc")
    }

    /// Reads from an alternative procfs mount
    pub fn with_proc_root(root: impl Into<PathBuf>) -> Self {
        Self {
            proc_root: root.into(),
        }
    }

    /// Reads procfs synchronously on the scraping task, under the registry lock.
    /// A few small files per scrape; move it out of the lock if this grows.
    fn snapshot(&self) -> Option<ProcessSnapshot> {
        let self_dir = self.proc_root.join("self");
        let stat = std::fs::read_to_string(self_dir.join("stat")).ok()?;
        let stat = parse_stat(&stat)?;

        let resident_memory_bytes = std::fs::read_to_string(self_dir.join("status"))
            .ok()
            .and_then(|s| parse_status_rss_bytes(&s));
        let open_fds = count_open_fds(&self_dir.join("fd"));
        let start_time_seconds = std::fs::read_to_string(self.proc_root.join("stat"))
            .ok()
            .and_then(|s| parse_boot_time(&s))
            .map(|btime| btime as f64 + stat.start_ticks as f64 / CLOCK_TICKS_PER_SEC);

        Some(ProcessSnapshot {
            cpu_seconds: stat.cpu_seconds,
            threads: stat.threads,
            virtual_memory_bytes: stat.virtual_memory_bytes,
            resident_memory_bytes,
            open_fds,
            start_time_seconds,
        })
    }
}

impl Collector for ProcessCollector {
    #[allow(clippy::cast_possible_wrap)]
    fn encode(&self, mut encoder: DescriptorEncoder) -> Result<(), std::fmt::Error> {
        let Some(snapshot) = self.snapshot() else {
            return Ok(());
        };

        encode_counter(
            &mut encoder,
            "process_cpu_seconds",
            "Total user and system CPU time spent in seconds",
            snapshot.cpu_seconds,
        )?;
        encode_gauge(
            &mut encoder,
            "process_virtual_memory_bytes",
            "Virtual memory size in bytes",
            snapshot.virtual_memory_bytes as i64,
        )?;
        encode_gauge(
            &mut encoder,
            "process_threads",
            "Number of OS threads in the process",
            snapshot.threads,
        )?;
        if let Some(rss) = snapshot.resident_memory_bytes {
            encode_gauge(
                &mut encoder,
                "process_resident_memory_bytes",
                "Resident memory size in bytes",
                rss as i64,
            )?;
        }
        if let Some(fds) = snapshot.open_fds {
            encode_gauge(
                &mut encoder,
                "process_open_fds",
                "Number of open file descriptors",
                fds as i64,
            )?;
        }
        if let Some(start) = snapshot.start_time_seconds {
            encode_gauge(
                &mut encoder,
                "process_start_time_seconds",
                "Start time of the process since unix epoch in seconds",
                start,
            )?;
        }
        Ok(())
    }
}

/// Parses `/proc/<pid>/stat`. The command name may contain spaces and
/// parentheses, so fields are counted from the last `)`.
fn parse_stat(content: &str) -> Option<ProcStat> {
    let rest = &content[content.rfind(')')? + 1..];
    let fields: Vec<&str> = rest.split_whitespace().collect();
    // fields[0] is field 3 (state) of proc(5)
    let utime: u64 = fields.get(11)?.parse().ok()?;
    let stime: u64 = fields.get(12)?.parse().ok()?;
    let threads: i64 = fields.get(17)?.parse().ok()?;
    let start_ticks: u64 = fields.get(19)?.parse().ok()?;
    let virtual_memory_bytes: u64 = fields.get(20)?.parse().ok()?;

    Some(ProcStat {
        cpu_seconds: (utime + stime) as f64 / CLOCK_TICKS_PER_SEC,
        threads,
        start_ticks,
        virtual_memory_bytes,
    })
}

/// Extracts `VmRSS` (reported in kB) from `/proc/<pid>/status`
fn parse_status_rss_bytes(content: &str) -> Option<u64> {
    let line = content.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kb: u64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kb * 1024)
}

/// Extracts `btime` from `/proc/stat`
fn parse_boot_time(content: &str) -> Option<u64> {
    content
        .lines()
        .find_map(|l| l.strip_prefix("btime "))
        .and_then(|v| v.trim().parse().ok())
}

fn count_open_fds(dir: &Path) -> Option<usize> {
    std::fs::read_dir(dir).ok().map(|entries| entries.count())
}
