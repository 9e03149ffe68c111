//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the checker.
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration for the airdrop checker.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CheckerConfig {
    /// Airdrop API endpoint settings.
    pub api: ApiConfig,

    /// Request pacing.
    pub scheduler: SchedulerConfig,

    /// Throttle retry settings.
    pub retry: RetryConfig,

    /// Input and output file locations.
    pub files: FilesConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Airdrop API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; the wallet address is appended verbatim.
    pub base_url: String,

    /// Total time allowed for one request/response in seconds.
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://airdrops.fyi/backend/airdrops/".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Scheduler configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Minimum spacing between the start of two API calls in milliseconds.
    pub min_interval_ms: u64,
}

impl SchedulerConfig {
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: 2001,
        }
    }
}

/// Throttle retry configuration.
///
/// There is deliberately no attempt cap: a throttled wallet is retried until
/// it succeeds or fails for another reason.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Fixed delay before resubmitting a throttled wallet, in milliseconds.
    pub throttle_delay_ms: u64,
}

impl RetryConfig {
    pub fn throttle_delay(&self) -> Duration {
        Duration::from_millis(self.throttle_delay_ms)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            throttle_delay_ms: 3000,
        }
    }
}

/// File locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FilesConfig {
    /// Newline-delimited wallet list.
    pub input_path: PathBuf,

    /// Delimited-text result file, overwritten each run.
    pub output_path: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("wallets.txt"),
            output_path: PathBuf::from("result.csv"),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_api_pacing() {
        let config = CheckerConfig::default();
        assert_eq!(config.scheduler.min_interval(), Duration::from_millis(2001));
        assert_eq!(config.retry.throttle_delay(), Duration::from_millis(3000));
        assert_eq!(config.files.input_path, PathBuf::from("wallets.txt"));
        assert_eq!(config.files.output_path, PathBuf::from("result.csv"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: CheckerConfig = toml::from_str(
            r#"
            [scheduler]
            min_interval_ms = 500
            "#,
        )
        .unwrap();

        assert_eq!(config.scheduler.min_interval_ms, 500);
        assert_eq!(config.retry.throttle_delay_ms, 3000);
        assert_eq!(config.api.base_url, "https://airdrops.fyi/backend/airdrops/");
    }
}
