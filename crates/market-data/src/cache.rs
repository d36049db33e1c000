//! Process-wide classification cache.
//!
//! Sector/industry metadata changes rarely, so it is looked up at most
//! once per symbol per process. The cache is an explicitly owned value
//! injected into the orchestrator (fresh per test, never ambient global
//! state), grows monotonically and is never invalidated; eviction is a
//! documented non-goal.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::warn;

use crate::errors::MarketDataError;
use crate::models::Classification;
use crate::provider::MarketDataProvider;

/// Memoizes per-symbol classification lookups.
///
/// Concurrency contract: concurrent misses for the same symbol coalesce
/// into one upstream call (single-flight, via moka's per-key init
/// coalescing), and classifying one symbol never blocks another.
pub struct ClassificationCache {
    provider: Arc<dyn MarketDataProvider>,
    entries: Cache<String, Classification>,
    lookup_timeout: Duration,
}

impl ClassificationCache {
    pub fn new(provider: Arc<dyn MarketDataProvider>, lookup_timeout: Duration) -> Self {
        Self {
            provider,
            // No TTL and no capacity bound: sector/industry cardinality is
            // small relative to the memory budget
            entries: Cache::builder().build(),
            lookup_timeout,
        }
    }

    /// Classification for one symbol, from cache or via a single upstream
    /// lookup.
    ///
    /// A provider answer with missing fields is stored as `unknown` and
    /// counts as a hit afterwards. A failed lookup degrades to `unknown`
    /// without being stored, so a later request may retry; it never turns
    /// an otherwise-successful quote into an error.
    pub async fn classify(&self, symbol: &str) -> Classification {
        let provider = self.provider.clone();
        let owned = symbol.to_string();
        let timeout = self.lookup_timeout;

        let result = self
            .entries
            .try_get_with(symbol.to_string(), async move {
                match tokio::time::timeout(timeout, provider.classification(&owned)).await {
                    Ok(result) => result,
                    Err(_) => Err(MarketDataError::Timeout(owned)),
                }
            })
            .await;

        match result {
            Ok(classification) => classification,
            Err(error) => {
                warn!(
                    "Classification lookup for '{}' failed, leaving unclassified: {}",
                    symbol, error
                );
                Classification::unknown()
            }
        }
    }

    /// Number of cached entries (eventually consistent).
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }
}
