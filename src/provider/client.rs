//! HTTP client for the trends provider
//!
//! Wraps reqwest with a governor rate limiter so bursts of categories cannot
//! exceed the provider's request budget. A single failed or empty attempt is
//! final: the caller decides what to do per category, so there is no retry
//! loop here.

use crate::error::ProviderError;
use crate::provider::{FetchOutcome, TimeSeries, TrendsProvider};
use async_trait::async_trait;
use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use reqwest::{Client, StatusCode};
use std::num::NonZeroU32;
use std::time::Duration;

/// Path of the interest-over-time endpoint, relative to the base URL
const INTEREST_ENDPOINT: &str = "/api/interest_over_time";

/// Trends provider client with rate limiting
pub struct HttpTrendsClient {
    /// HTTP client with configured timeout and compression
    client: Client,

    /// Rate limiter gating every outgoing request
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,

    /// Provider base URL (overridable for tests with mock servers)
    base_url: String,
}

impl HttpTrendsClient {
    /// Create a new client with default settings
    ///
    /// # Arguments
    ///
    /// * `base_url` - Provider base URL
    /// * `requests_per_second` - Maximum number of requests per second
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Http` if the HTTP client cannot be created
    pub fn new(base_url: &str, requests_per_second: u32) -> Result<Self, ProviderError> {
        Self::with_config(base_url, requests_per_second, Duration::from_secs(30))
    }

    /// Create a new client with a custom request timeout
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Http` if the HTTP client cannot be created
    pub fn with_config(
        base_url: &str,
        requests_per_second: u32,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .user_agent(concat!("trendwatch/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let rate = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::new(1).unwrap());
        let quota = Quota::per_second(rate);
        let rate_limiter = RateLimiter::direct(quota);

        Ok(Self {
            client,
            rate_limiter,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Map a non-success status to its provider error
    fn status_error(status: StatusCode) -> ProviderError {
        match status.as_u16() {
            429 => ProviderError::RateLimited,
            401 | 403 => ProviderError::Auth(status.as_u16()),
            code => ProviderError::Status(code),
        }
    }
}

#[async_trait]
impl TrendsProvider for HttpTrendsClient {
    async fn interest_over_time(
        &self,
        keyword: &str,
        timeframe: &str,
    ) -> Result<FetchOutcome, ProviderError> {
        if keyword.is_empty() {
            return Err(ProviderError::EmptyKeyword);
        }

        // Wait for rate limiter
        self.rate_limiter.until_ready().await;

        let url = format!("{}{INTEREST_ENDPOINT}", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("keyword", keyword), ("timeframe", timeframe)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::Http(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::status_error(status));
        }

        let series: TimeSeries = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        if series.is_empty() {
            return Ok(FetchOutcome::Empty);
        }

        Ok(FetchOutcome::Series(series))
    }
}
