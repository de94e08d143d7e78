//! Runtime configuration, read from the environment (and an optional `.env` file).

use crate::error::AdminError;
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3002/api";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST API (`LUMA_API_URL`).
    pub api_url: String,
    /// Per-request timeout (`LUMA_REQUEST_TIMEOUT_MS`).
    pub request_timeout: Duration,
    /// Dashboard auto-refresh period (`LUMA_REFRESH_INTERVAL_SECS`).
    pub refresh_interval: Duration,
    /// Capacity of each gateway actor's request channel (`LUMA_CHANNEL_BUFFER`).
    pub channel_buffer: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, AdminError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AdminError> {
        let api_url = lookup("LUMA_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let timeout_ms: u64 = parse(&lookup, "LUMA_REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;
        let interval_secs: u64 =
            parse(&lookup, "LUMA_REFRESH_INTERVAL_SECS", DEFAULT_REFRESH_INTERVAL_SECS)?;
        let channel_buffer: usize = parse(&lookup, "LUMA_CHANNEL_BUFFER", DEFAULT_CHANNEL_BUFFER)?;

        // tokio panics on a zero interval period or a zero-capacity channel.
        if interval_secs == 0 {
            return Err(AdminError::Config("LUMA_REFRESH_INTERVAL_SECS must be positive".into()));
        }
        if channel_buffer == 0 {
            return Err(AdminError::Config("LUMA_CHANNEL_BUFFER must be positive".into()));
        }

        Ok(Self {
            api_url,
            request_timeout: Duration::from_millis(timeout_ms),
            refresh_interval: Duration::from_secs(interval_secs),
            channel_buffer,
        })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AdminError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AdminError::Config(format!("{key}: cannot parse '{raw}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api_url, "http://localhost:3002/api");
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("LUMA_API_URL", "https://api.luma.tn/api"),
            ("LUMA_REQUEST_TIMEOUT_MS", "2500"),
            ("LUMA_REFRESH_INTERVAL_SECS", " 60 "),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "https://api.luma.tn/api");
        assert_eq!(config.request_timeout, Duration::from_millis(2500));
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert_eq!(config.channel_buffer, DEFAULT_CHANNEL_BUFFER);
    }

    #[test]
    fn bad_values_are_config_errors() {
        let err = AppConfig::from_lookup(lookup(&[("LUMA_REQUEST_TIMEOUT_MS", "soon")])).unwrap_err();
        assert!(matches!(err, AdminError::Config(msg) if msg.contains("LUMA_REQUEST_TIMEOUT_MS")));

        let err = AppConfig::from_lookup(lookup(&[("LUMA_REFRESH_INTERVAL_SECS", "0")])).unwrap_err();
        assert!(matches!(err, AdminError::Config(_)));
    }
}
