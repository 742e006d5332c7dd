//! Configuration management for trendwatch
//!
//! This module handles loading and validating configuration from environment
//! variables, files, and command-line arguments. The category/keyword set and
//! the score value ranges are compiled in and deliberately not configurable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Trends provider configuration
    pub provider: ProviderConfig,

    /// Output configuration
    pub output: OutputConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Provider-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider base URL
    pub base_url: String,

    /// Relative window submitted with each query
    pub timeframe: String,

    /// Rate limit (requests per second)
    pub rate_limit: u32,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,

    /// Pause after each successfully fetched category, in seconds
    pub courtesy_delay_secs: u64,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the JSON record written each run
    pub path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("TRENDWATCH_BASE_URL")
            .unwrap_or_else(|_| String::from("https://trends.google.com"));

        let timeframe =
            std::env::var("TRENDWATCH_TIMEFRAME").unwrap_or_else(|_| String::from("now 7-d"));

        let rate_limit = std::env::var("TRENDWATCH_RATE_LIMIT")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(1);

        let request_timeout_secs = std::env::var("TRENDWATCH_REQUEST_TIMEOUT")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let courtesy_delay_secs = std::env::var("TRENDWATCH_COURTESY_DELAY")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(3);

        let output_path = std::env::var("TRENDWATCH_OUTPUT")
            .unwrap_or_else(|_| String::from("trends_data.json"))
            .into();

        let log_level =
            std::env::var("TRENDWATCH_LOG_LEVEL").unwrap_or_else(|_| String::from("info"));

        let log_format =
            std::env::var("TRENDWATCH_LOG_FORMAT").unwrap_or_else(|_| String::from("text"));

        Ok(Self {
            provider: ProviderConfig {
                base_url,
                timeframe,
                rate_limit,
                request_timeout_secs,
                courtesy_delay_secs,
            },
            output: OutputConfig { path: output_path },
            logging: LoggingConfig {
                level: log_level,
                format: log_format,
            },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.provider.base_url)
            .with_context(|| format!("invalid base_url: {}", self.provider.base_url))?;

        if self.provider.rate_limit == 0 {
            anyhow::bail!("rate_limit must be greater than 0");
        }

        if self.provider.timeframe.trim().is_empty() {
            anyhow::bail!("timeframe must not be empty");
        }

        if self.output.path.as_os_str().is_empty() {
            anyhow::bail!("output path must not be empty");
        }

        Ok(())
    }

    /// Get request timeout as Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.provider.request_timeout_secs)
    }

    /// Get courtesy delay as Duration
    #[must_use]
    pub fn courtesy_delay(&self) -> Duration {
        Duration::from_secs(self.provider.courtesy_delay_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig {
                base_url: String::from("https://trends.google.com"),
                timeframe: String::from("now 7-d"),
                rate_limit: 1,
                request_timeout_secs: 30,
                courtesy_delay_secs: 3,
            },
            output: OutputConfig {
                path: PathBuf::from("trends_data.json"),
            },
            logging: LoggingConfig {
                level: String::from("info"),
                format: String::from("text"),
            },
        }
    }
}
