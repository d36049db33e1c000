//! Per-symbol quote fetching and normalization.
//!
//! The fetcher is the only place that knows about the upstream's two
//! overlapping field families and about derived fields. It turns one
//! provider lookup into a canonical [`QuoteRecord`], or a per-symbol
//! error; nothing here batches or paces.

use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{ProviderInfo, QuoteRecord};
use crate::provider::MarketDataProvider;

/// Configuration for the quote fetcher.
#[derive(Clone, Debug)]
pub struct FetcherConfig {
    /// Upper bound for one upstream lookup. A fetch that exceeds this
    /// resolves to a `Timeout` error instead of hanging the batch.
    pub fetch_timeout: Duration,
    /// Decimal places for the derived percent-change field.
    pub change_precision: u32,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(10),
            change_precision: 4,
        }
    }
}

/// Fetches and normalizes quotes one symbol at a time.
pub struct QuoteFetcher {
    provider: Arc<dyn MarketDataProvider>,
    config: FetcherConfig,
}

impl QuoteFetcher {
    pub fn new(provider: Arc<dyn MarketDataProvider>, config: FetcherConfig) -> Self {
        Self { provider, config }
    }

    /// Fetch one symbol and normalize the provider's field bag.
    ///
    /// Transport failures, timeouts and missing price data all surface as
    /// error values; the caller records them per symbol.
    pub async fn fetch(&self, symbol: &str) -> Result<QuoteRecord, MarketDataError> {
        let lookup = self.provider.lookup(symbol);
        let info = match tokio::time::timeout(self.config.fetch_timeout, lookup).await {
            Ok(result) => result?,
            Err(_) => {
                debug!(
                    "Lookup for '{}' exceeded {:?}",
                    symbol, self.config.fetch_timeout
                );
                return Err(MarketDataError::Timeout(symbol.to_string()));
            }
        };

        self.normalize(symbol, info)
    }

    /// Resolve fallback chains and compute derived fields.
    fn normalize(
        &self,
        symbol: &str,
        info: ProviderInfo,
    ) -> Result<QuoteRecord, MarketDataError> {
        // Primary family first, regular-market second. A present zero is a
        // valid value, only absence falls through.
        let price = info
            .current_price
            .or(info.regular_market_price)
            .ok_or_else(|| MarketDataError::NoPriceData(symbol.to_string()))?;

        let previous_close = info
            .previous_close
            .or(info.regular_market_previous_close);
        let volume = info.volume.or(info.regular_market_volume);

        let change_percent =
            percent_change(price, previous_close, self.config.change_precision);
        let relative_volume = ratio(volume, info.average_volume, 2);

        Ok(QuoteRecord {
            symbol: symbol.to_string(),
            name: info.long_name.or(info.short_name),
            price: Some(price),
            open: info.open.or(info.regular_market_open),
            high: info.day_high.or(info.regular_market_day_high),
            low: info.day_low.or(info.regular_market_day_low),
            volume,
            avg_volume: info.average_volume,
            change_percent,
            relative_volume,
            market_cap: info.market_cap,
            shares_float: info.float_shares,
            pe_ratio: info.trailing_pe,
            forward_pe: info.forward_pe,
            dividend_yield: info.dividend_yield,
            fifty_two_week_high: info.fifty_two_week_high,
            fifty_two_week_low: info.fifty_two_week_low,
            // Classification is merged in by the orchestrator from the cache
            sector: None,
            industry: None,
            country: info.country,
        })
    }
}

/// Percent change versus the previous close, or `None` when the previous
/// close is absent or zero. Never divides by zero, never errors.
fn percent_change(
    price: Decimal,
    previous_close: Option<Decimal>,
    precision: u32,
) -> Option<Decimal> {
    let previous = previous_close?;
    (price - previous)
        .checked_div(previous)
        .map(|r| (r * Decimal::ONE_HUNDRED).round_dp(precision))
}

/// Numerator over denominator under the same non-zero guard.
fn ratio(
    numerator: Option<Decimal>,
    denominator: Option<Decimal>,
    precision: u32,
) -> Option<Decimal> {
    numerator?
        .checked_div(denominator?)
        .map(|r| r.round_dp(precision))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Classification;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    struct BagProvider {
        info: ProviderInfo,
    }

    #[async_trait]
    impl MarketDataProvider for BagProvider {
        fn id(&self) -> &'static str {
            "STUB"
        }

        async fn lookup(&self, _symbol: &str) -> Result<ProviderInfo, MarketDataError> {
            Ok(self.info.clone())
        }

        async fn classification(
            &self,
            _symbol: &str,
        ) -> Result<Classification, MarketDataError> {
            Ok(Classification::unknown())
        }
    }

    struct SlowProvider;

    #[async_trait]
    impl MarketDataProvider for SlowProvider {
        fn id(&self) -> &'static str {
            "SLOW"
        }

        async fn lookup(&self, _symbol: &str) -> Result<ProviderInfo, MarketDataError> {
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok(ProviderInfo::default())
        }

        async fn classification(
            &self,
            _symbol: &str,
        ) -> Result<Classification, MarketDataError> {
            Ok(Classification::unknown())
        }
    }

    fn fetcher_for(info: ProviderInfo) -> QuoteFetcher {
        QuoteFetcher::new(Arc::new(BagProvider { info }), FetcherConfig::default())
    }

    #[tokio::test]
    async fn test_derived_fields_computed_and_rounded() {
        let fetcher = fetcher_for(ProviderInfo {
            current_price: Some(dec!(110)),
            previous_close: Some(dec!(100)),
            volume: Some(dec!(3000000)),
            average_volume: Some(dec!(2000000)),
            ..Default::default()
        });

        let record = fetcher.fetch("AAPL").await.unwrap();
        assert_eq!(record.change_percent, Some(dec!(10.0000)));
        assert_eq!(record.relative_volume, Some(dec!(1.50)));
    }

    #[tokio::test]
    async fn test_zero_previous_close_yields_absent_change() {
        let fetcher = fetcher_for(ProviderInfo {
            current_price: Some(dec!(5)),
            previous_close: Some(Decimal::ZERO),
            ..Default::default()
        });

        let record = fetcher.fetch("NEWIPO").await.unwrap();
        assert_eq!(record.change_percent, None);
    }

    #[tokio::test]
    async fn test_missing_average_volume_yields_absent_relative_volume() {
        let fetcher = fetcher_for(ProviderInfo {
            current_price: Some(dec!(10)),
            volume: Some(dec!(1000)),
            ..Default::default()
        });

        let record = fetcher.fetch("THIN").await.unwrap();
        assert_eq!(record.relative_volume, None);
    }

    #[tokio::test]
    async fn test_primary_field_preferred_over_regular_market() {
        let fetcher = fetcher_for(ProviderInfo {
            current_price: Some(dec!(101)),
            regular_market_price: Some(dec!(99)),
            ..Default::default()
        });

        let record = fetcher.fetch("AAPL").await.unwrap();
        assert_eq!(record.price, Some(dec!(101)));
    }

    #[tokio::test]
    async fn test_regular_market_fallback_when_primary_absent() {
        let fetcher = fetcher_for(ProviderInfo {
            regular_market_price: Some(dec!(99)),
            regular_market_open: Some(dec!(98)),
            ..Default::default()
        });

        let record = fetcher.fetch("AAPL").await.unwrap();
        assert_eq!(record.price, Some(dec!(99)));
        assert_eq!(record.open, Some(dec!(98)));
    }

    #[tokio::test]
    async fn test_no_price_on_either_family_is_no_price_data() {
        let fetcher = fetcher_for(ProviderInfo {
            volume: Some(dec!(1000)),
            ..Default::default()
        });

        let err = fetcher.fetch("ZZZZ").await.unwrap_err();
        assert!(matches!(err, MarketDataError::NoPriceData(ref s) if s == "ZZZZ"));
    }

    #[tokio::test]
    async fn test_slow_lookup_resolves_to_timeout() {
        let fetcher = QuoteFetcher::new(
            Arc::new(SlowProvider),
            FetcherConfig {
                fetch_timeout: Duration::from_millis(20),
                change_precision: 4,
            },
        );

        let err = fetcher.fetch("AAPL").await.unwrap_err();
        assert!(matches!(err, MarketDataError::Timeout(ref s) if s == "AAPL"));
    }

    #[test]
    fn test_percent_change_precision() {
        let change = percent_change(dec!(103.4567), Some(dec!(100)), 2);
        assert_eq!(change, Some(dec!(3.46)));

        let change = percent_change(dec!(103.4567), Some(dec!(100)), 4);
        assert_eq!(change, Some(dec!(3.4567)));
    }
}
