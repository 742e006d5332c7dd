//! Result assembly with category-level fallback
//!
//! One pass over the catalog, fully sequential. Each category queries the
//! provider once, with its lead keyword only; the outcome decides the score
//! band for every keyword in the category. Provider failures never escape a
//! category: `assemble` always returns a fully populated record.

use crate::catalog::{Category, CATEGORIES};
use crate::models::{CategoryScores, KeywordScore, TrendRecord};
use crate::provider::{FetchOutcome, TrendsProvider, DEFAULT_TIMEFRAME};
use crate::scoring::{ScoreBand, Scorer};
use std::time::Duration;

/// Pause after each successfully fetched category, to stay polite with the
/// provider. Failed categories skip it; the provider already answered fast.
const COURTESY_DELAY: Duration = Duration::from_secs(3);

/// Builds the per-run [`TrendRecord`] from provider outcomes
pub struct TrendAssembler<P, S> {
    provider: P,
    scorer: S,
    timeframe: String,
    courtesy_delay: Duration,
}

impl<P, S> TrendAssembler<P, S>
where
    P: TrendsProvider,
    S: Scorer,
{
    /// Create an assembler with the default timeframe and courtesy delay
    pub fn new(provider: P, scorer: S) -> Self {
        Self {
            provider,
            scorer,
            timeframe: DEFAULT_TIMEFRAME.to_string(),
            courtesy_delay: COURTESY_DELAY,
        }
    }

    /// Override the relative window submitted to the provider
    #[must_use]
    pub fn with_timeframe(mut self, timeframe: &str) -> Self {
        self.timeframe = timeframe.to_string();
        self
    }

    /// Override the post-success courtesy delay (tests set this to zero)
    #[must_use]
    pub fn with_courtesy_delay(mut self, delay: Duration) -> Self {
        self.courtesy_delay = delay;
        self
    }

    /// Process every category and assemble the final record
    ///
    /// Infallible by design: a provider failure downgrades that category to
    /// backup scoring and the loop continues. The returned record always
    /// contains every configured category with every configured keyword.
    pub async fn assemble(&self) -> TrendRecord {
        let mut categories = Vec::with_capacity(CATEGORIES.len());

        for category in CATEGORIES {
            tracing::info!(category = %category.name, "fetching interest scores");

            let band = self.fetch_band(category).await;
            categories.push(self.score_category(category, band));

            if band == ScoreBand::Breakout {
                tokio::time::sleep(self.courtesy_delay).await;
            }
        }

        TrendRecord::now(categories)
    }

    /// Query the lead keyword and decide the category's score band
    async fn fetch_band(&self, category: &Category) -> ScoreBand {
        match self
            .provider
            .interest_over_time(category.lead_keyword(), &self.timeframe)
            .await
        {
            Ok(FetchOutcome::Series(series)) => {
                tracing::debug!(
                    category = %category.name,
                    keyword = %category.lead_keyword(),
                    points = series.len(),
                    "provider returned live data"
                );
                ScoreBand::Breakout
            }
            Ok(FetchOutcome::Empty) => {
                tracing::warn!(
                    category = %category.name,
                    "empty series from provider, using curated backup data"
                );
                ScoreBand::Backup
            }
            Err(e) => {
                tracing::warn!(
                    category = %category.name,
                    error = %e,
                    "provider error, using curated backup data"
                );
                ScoreBand::Backup
            }
        }
    }

    /// Assign a score to every keyword in the category
    ///
    /// The fetched series values are deliberately not used here: the band is
    /// a category-level signal applied uniformly across the keyword list.
    fn score_category(&self, category: &Category, band: ScoreBand) -> CategoryScores {
        let scores = category
            .keywords
            .iter()
            .map(|kw| KeywordScore {
                name: (*kw).to_string(),
                value: self.scorer.score(band),
            })
            .collect();

        CategoryScores {
            name: category.name.to_string(),
            scores,
        }
    }
}
