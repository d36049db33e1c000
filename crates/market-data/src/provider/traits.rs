//! Market data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{Classification, ProviderInfo};

/// Trait for single-symbol market data providers.
///
/// Implement this trait to add support for a new upstream data source.
/// Both operations take one normalized symbol and issue one upstream
/// lookup; neither performs batching, caching or retries.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the raw quote field bag for a symbol.
    ///
    /// Returns whatever overlapping price/volume fields the upstream has;
    /// the fetcher resolves the fallback chains. A symbol the provider
    /// does not know yields `SymbolNotFound`.
    async fn lookup(&self, symbol: &str) -> Result<ProviderInfo, MarketDataError>;

    /// Fetch sector/industry classification for a symbol.
    ///
    /// A successful response with missing fields is a valid (and
    /// cacheable) `Classification`; only transport/provider failures
    /// return an error.
    async fn classification(&self, symbol: &str) -> Result<Classification, MarketDataError>;
}
