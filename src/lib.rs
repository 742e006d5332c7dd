//! trendwatch - Keyword interest tracker with curated fallback scoring
//!
//! Periodically fetches interest scores for a fixed set of curated keywords
//! across a few business categories and persists them as a timestamped JSON
//! record. When the trends provider is unavailable or returns empty data, a
//! category falls back to randomized curated-backup values so the output
//! record is always complete.
//!
//! # Architecture
//!
//! - [`catalog`] - Compiled-in category/keyword configuration
//! - [`provider`] - Trends provider client with rate limiting
//! - [`scoring`] - Pluggable score strategies for the two value bands
//! - [`assembler`] - Per-category fetch-with-fallback loop
//! - [`storage`] - JSON record persistence
//! - [`config`] - Configuration management and settings
//!
//! # Example
//!
//! ```no_run
//! use trendwatch::assembler::TrendAssembler;
//! use trendwatch::config::Config;
//! use trendwatch::provider::HttpTrendsClient;
//! use trendwatch::scoring::RandomScorer;
//! use trendwatch::storage::RecordWriter;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = HttpTrendsClient::new(&config.provider.base_url, config.provider.rate_limit)?;
//!     let assembler = TrendAssembler::new(client, RandomScorer);
//!     let record = assembler.assemble().await;
//!     RecordWriter::new(&config.output.path).write(&record)?;
//!     Ok(())
//! }
//! ```

pub mod assembler;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod scoring;
pub mod storage;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::assembler::TrendAssembler;
    pub use crate::catalog::{Category, CATEGORIES};
    pub use crate::config::Config;
    pub use crate::error::{Error, ProviderError, Result};
    pub use crate::models::{CategoryScores, KeywordScore, TrendRecord};
    pub use crate::provider::{FetchOutcome, HttpTrendsClient, TimeSeries, TrendsProvider};
    pub use crate::scoring::{RandomScorer, ScoreBand, Scorer};
    pub use crate::storage::RecordWriter;
}

// Direct re-exports for convenience
pub use models::{CategoryScores, KeywordScore, TrendRecord};
