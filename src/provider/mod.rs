//! External trends provider interface
//!
//! The provider is a black box: given one keyword and a relative timeframe it
//! either returns an interest-over-time series or fails. Failures and empty
//! series are both final for that keyword within a run — there is no retry at
//! this layer; the assembler compensates at the category level.

pub mod client;

pub use client::HttpTrendsClient;

use crate::error::ProviderError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Relative window submitted to the provider by default
pub const DEFAULT_TIMEFRAME: &str = "now 7-d";

/// One sample of interest for a keyword at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestPoint {
    pub timestamp: DateTime<Utc>,
    pub value: u32,
}

/// Interest-over-time series for a single keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub keyword: String,
    pub points: Vec<InterestPoint>,
}

impl TimeSeries {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
}

/// Outcome of a single fetch
///
/// An explicit variant for the empty case keeps the fallback decision out of
/// the error path: the assembler matches on this instead of catching thrown
/// errors across category boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Non-empty series for the requested keyword
    Series(TimeSeries),
    /// Provider answered but had no data for the window
    Empty,
}

/// Capability for querying keyword interest from the external provider
#[async_trait]
pub trait TrendsProvider: Send + Sync {
    /// Fetch the interest-over-time series for one keyword
    ///
    /// `timeframe` is a relative window expression the provider accepts,
    /// e.g. `"now 7-d"`.
    async fn interest_over_time(
        &self,
        keyword: &str,
        timeframe: &str,
    ) -> Result<FetchOutcome, ProviderError>;
}
