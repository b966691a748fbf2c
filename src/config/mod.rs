// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the Bitcoin price exporter
//!
//! Loads and validates configuration from environment variables.

use std::time::Duration;

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const UPSTREAM_URL: &str = "https://api.binance.com/api/v3/ticker/price?symbol=BTCUSDT";
    pub const UPSTREAM_TIMEOUT_SECS: u64 = 5;
    pub const READINESS_PROBE_URL: &str = "https://www.google.com";
    pub const READINESS_TIMEOUT_SECS: u64 = 2;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const API_KEY: &str = "API_KEY";
    pub const UPSTREAM_URL: &str = "UPSTREAM_URL";
    pub const UPSTREAM_TIMEOUT_SECS: &str = "UPSTREAM_TIMEOUT_SECS";
    pub const READINESS_PROBE_URL: &str = "READINESS_PROBE_URL";
    pub const READINESS_TIMEOUT_SECS: &str = "READINESS_TIMEOUT_SECS";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub upstream_url: String,
    pub upstream_timeout: Duration,
    pub readiness_probe_url: String,
    pub readiness_timeout: Duration,
    /// Whether `API_KEY` was provided. The key itself is never used or logged.
    pub api_key_present: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: defaults::PORT,
            upstream_url: defaults::UPSTREAM_URL.to_string(),
            upstream_timeout: Duration::from_secs(defaults::UPSTREAM_TIMEOUT_SECS),
            readiness_probe_url: defaults::READINESS_PROBE_URL.to_string(),
            readiness_timeout: Duration::from_secs(defaults::READINESS_TIMEOUT_SECS),
            api_key_present: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup(env_vars::PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::Config(format!("Invalid {} '{}': {}", env_vars::PORT, raw, e))
            })?,
            None => defaults::PORT,
        };

        let upstream_url =
            lookup(env_vars::UPSTREAM_URL).unwrap_or_else(|| defaults::UPSTREAM_URL.to_string());
        let readiness_probe_url = lookup(env_vars::READINESS_PROBE_URL)
            .unwrap_or_else(|| defaults::READINESS_PROBE_URL.to_string());

        let upstream_timeout = parse_timeout(
            env_vars::UPSTREAM_TIMEOUT_SECS,
            lookup(env_vars::UPSTREAM_TIMEOUT_SECS),
            defaults::UPSTREAM_TIMEOUT_SECS,
        );
        let readiness_timeout = parse_timeout(
            env_vars::READINESS_TIMEOUT_SECS,
            lookup(env_vars::READINESS_TIMEOUT_SECS),
            defaults::READINESS_TIMEOUT_SECS,
        );

        let api_key_present = lookup(env_vars::API_KEY).is_some_and(|k| !k.is_empty());

        let config = Config {
            port,
            upstream_url,
            upstream_timeout,
            readiness_probe_url,
            readiness_timeout,
            api_key_present,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration values
    pub fn validate(&self) -> Result<()> {
        validate_url(env_vars::UPSTREAM_URL, &self.upstream_url)?;
        validate_url(env_vars::READINESS_PROBE_URL, &self.readiness_probe_url)?;
        Ok(())
    }

    /// Address the HTTP server listens on
    pub fn server_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn validate_url(name: &str, url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(AppError::Config(format!("{name} cannot be empty")));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AppError::Config(format!(
            "Invalid {name} '{url}': expected http:// or https:// scheme"
        )));
    }
    Ok(())
}

fn parse_timeout(name: &str, raw: Option<String>, default_secs: u64) -> Duration {
    let Some(raw) = raw else {
        return Duration::from_secs(default_secs);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Duration::from_secs(secs),
        _ => {
            tracing::warn!(
                "Invalid {} '{}', using default of {}s",
                name,
                raw,
                default_secs
            );
            Duration::from_secs(default_secs)
        }
    }
}
