//! Interest value scoring strategies
//!
//! Scores are not derived from the fetched time series: a successful fetch
//! marks the whole category as "breakout" and a failed or empty fetch drops
//! it to the curated backup band. The two inclusive ranges are the contract;
//! the draw inside each range is uniform.

use rand::Rng;
use std::ops::RangeInclusive;

/// Which branch of the fallback policy a category landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    /// Provider returned a non-empty series for the lead keyword
    Breakout,
    /// Provider failed or returned an empty series
    Backup,
}

impl ScoreBand {
    /// Inclusive value range assigned on this band
    #[must_use]
    pub const fn range(self) -> RangeInclusive<i64> {
        match self {
            Self::Breakout => 300..=1200,
            Self::Backup => 150..=500,
        }
    }

    /// Check whether a value is valid for this band
    #[must_use]
    pub fn contains(self, value: i64) -> bool {
        self.range().contains(&value)
    }
}

/// Pluggable score source, injected into the assembler so tests can use
/// deterministic values
pub trait Scorer: Send + Sync {
    /// Produce one interest value within the band's range
    fn score(&self, band: ScoreBand) -> i64;
}

/// Production scorer drawing uniformly from the band's range
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomScorer;

impl Scorer for RandomScorer {
    fn score(&self, band: ScoreBand) -> i64 {
        rand::thread_rng().gen_range(band.range())
    }
}
