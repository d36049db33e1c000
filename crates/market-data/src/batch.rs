//! Batch orchestration of per-symbol quote fetches.
//!
//! Given an ordered list of symbols, the orchestrator fans out fetches in
//! waves of at most `concurrency` simultaneous upstream calls, with an
//! optional fixed delay between waves to stay under the provider's
//! unpublished rate limit. That is the single pacing policy: there is no
//! per-item sleep and no adaptive backoff.
//!
//! Outcomes are reassembled in input order with input multiplicity (a
//! symbol listed twice is fetched twice), and one symbol's failure never
//! aborts its siblings. No task is detached, so dropping the returned
//! future (client disconnect) cancels all in-flight fetches.

use std::sync::Arc;
use std::time::Duration;

use futures::future;
use tracing::{debug, info};

use crate::cache::ClassificationCache;
use crate::errors::MarketDataError;
use crate::fetcher::{FetcherConfig, QuoteFetcher};
use crate::models::{BatchResult, FetchOutcome};
use crate::provider::MarketDataProvider;

/// Tunable policy knobs for batch processing.
///
/// The right values depend on the upstream's actual (undocumented) rate
/// limit and need field tuning, so all of them are external configuration
/// rather than compiled-in constants.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Maximum simultaneous in-flight fetches. Caps upstream connections
    /// regardless of input size; higher is faster but riskier against
    /// rate limits.
    pub concurrency: usize,
    /// Fixed pause inserted between successive waves.
    pub wave_delay: Duration,
    /// Upper bound for one upstream lookup.
    pub fetch_timeout: Duration,
    /// Decimal places for the derived percent-change field.
    pub change_precision: u32,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: 5,
            wave_delay: Duration::ZERO,
            fetch_timeout: Duration::from_secs(10),
            change_precision: 4,
        }
    }
}

/// Orchestrates concurrent per-symbol fetches into one ordered result.
pub struct BatchOrchestrator {
    fetcher: QuoteFetcher,
    classifications: ClassificationCache,
    config: BatchConfig,
}

impl BatchOrchestrator {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: BatchConfig) -> Self {
        let fetcher = QuoteFetcher::new(
            provider.clone(),
            FetcherConfig {
                fetch_timeout: config.fetch_timeout,
                change_precision: config.change_precision,
            },
        );
        let classifications = ClassificationCache::new(provider, config.fetch_timeout);
        Self {
            fetcher,
            classifications,
            config,
        }
    }

    /// Process a batch of normalized symbols.
    ///
    /// Returns exactly one outcome per input symbol, in input order. The
    /// only request-level failure is an empty input; every fetch problem
    /// is recorded inside the corresponding outcome instead.
    pub async fn process_symbols(
        &self,
        symbols: &[String],
    ) -> Result<BatchResult, MarketDataError> {
        if symbols.is_empty() {
            return Err(MarketDataError::EmptyBatch);
        }

        let concurrency = self.config.concurrency.max(1);
        let mut outcomes = Vec::with_capacity(symbols.len());

        for (index, wave) in symbols.chunks(concurrency).enumerate() {
            if index > 0 && !self.config.wave_delay.is_zero() {
                debug!("Pacing: sleeping {:?} before next wave", self.config.wave_delay);
                tokio::time::sleep(self.config.wave_delay).await;
            }

            // join_all preserves the order of its input futures, which is
            // what keeps outcomes aligned with input positions
            let fetches = wave.iter().map(|symbol| self.fetch_one(symbol));
            outcomes.extend(future::join_all(fetches).await);
        }

        let result = BatchResult::from_outcomes(outcomes);
        info!(
            "Processed batch of {} symbols, {} succeeded",
            result.requested, result.succeeded
        );
        Ok(result)
    }

    /// One unit of work: quote fields from the fetcher, classification
    /// from the cache, merged into a single outcome.
    async fn fetch_one(&self, symbol: &str) -> FetchOutcome {
        match self.fetcher.fetch(symbol).await {
            Ok(mut record) => {
                let classification = self.classifications.classify(symbol).await;
                record.sector = classification.sector;
                record.industry = classification.industry;
                FetchOutcome::quote(record)
            }
            Err(error) => {
                debug!("Fetch for '{}' failed: {}", symbol, error);
                FetchOutcome::failure(symbol, &error)
            }
        }
    }
}
