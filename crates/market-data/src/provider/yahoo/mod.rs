//! Yahoo Finance market data provider.
//!
//! Talks to the quoteSummary API, which needs crumb/cookie authentication.
//! The crumb is fetched lazily, cached on the provider instance, and
//! invalidated when Yahoo answers 401.

mod models;

use std::sync::RwLock;

use async_trait::async_trait;
use reqwest::header;
use rust_decimal::Decimal;
use tracing::debug;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{Classification, ProviderInfo};
use crate::provider::MarketDataProvider;

use models::{QuoteSummaryResponse, QuoteSummaryResult, RawValue};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Modules carrying the overlapping price/volume field families,
/// valuation metrics, and the country of domicile.
const QUOTE_MODULES: &str = "price,summaryDetail,financialData,defaultKeyStatistics,assetProfile";

/// Module carrying sector/industry classification.
const PROFILE_MODULES: &str = "assetProfile";

/// Cached Yahoo authentication data.
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    client: reqwest::Client,
    crumb: RwLock<Option<CrumbData>>,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            crumb: RwLock::new(None),
        })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        {
            let guard = self.crumb.read().unwrap();
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to get cookie: {}", e),
            })?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: "Failed to parse Yahoo cookie".to_string(),
            })?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to get crumb: {}", e),
            })?
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to read crumb: {}", e),
            })?;

        let crumb_data = CrumbData { cookie, crumb };

        let mut guard = self.crumb.write().unwrap();
        *guard = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails).
    fn clear_crumb(&self) {
        let mut guard = self.crumb.write().unwrap();
        *guard = None;
    }

    // ========================================================================
    // quoteSummary Requests
    // ========================================================================

    /// Issue one quoteSummary request for the given modules.
    async fn quote_summary(
        &self,
        symbol: &str,
        modules: &str,
    ) -> Result<QuoteSummaryResult, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules={}&crumb={}",
            encode(symbol),
            modules,
            encode(&crumb.crumb)
        );
        debug!("Yahoo quoteSummary request for '{}' ({})", symbol, modules);

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("quoteSummary request failed: {}", e),
            })?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.clear_crumb();
            return Err(MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: "Yahoo authentication expired".to_string(),
            });
        }

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }

        let data: QuoteSummaryResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::ProviderError {
                    provider: "YAHOO".to_string(),
                    message: format!("Failed to parse quoteSummary response: {}", e),
                })?;

        data.quote_summary
            .result
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }
}

/// Extract the raw numeric value from a wrapped Yahoo field.
fn raw_decimal(value: &Option<RawValue>) -> Option<Decimal> {
    value
        .as_ref()
        .and_then(|v| v.raw)
        .and_then(Decimal::from_f64_retain)
}

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn lookup(&self, symbol: &str) -> Result<ProviderInfo, MarketDataError> {
        let result = self.quote_summary(symbol, QUOTE_MODULES).await?;

        let price = result.price.as_ref();
        let detail = result.summary_detail.as_ref();
        let financial = result.financial_data.as_ref();
        let statistics = result.default_key_statistics.as_ref();
        let profile = result.asset_profile.as_ref();

        Ok(ProviderInfo {
            long_name: price.and_then(|p| p.long_name.clone()),
            short_name: price.and_then(|p| p.short_name.clone()),
            current_price: financial.and_then(|f| raw_decimal(&f.current_price)),
            regular_market_price: price.and_then(|p| raw_decimal(&p.regular_market_price)),
            previous_close: detail.and_then(|d| raw_decimal(&d.previous_close)),
            regular_market_previous_close: price
                .and_then(|p| raw_decimal(&p.regular_market_previous_close)),
            open: detail.and_then(|d| raw_decimal(&d.open)),
            regular_market_open: price.and_then(|p| raw_decimal(&p.regular_market_open)),
            day_high: detail.and_then(|d| raw_decimal(&d.day_high)),
            regular_market_day_high: price.and_then(|p| raw_decimal(&p.regular_market_day_high)),
            day_low: detail.and_then(|d| raw_decimal(&d.day_low)),
            regular_market_day_low: price.and_then(|p| raw_decimal(&p.regular_market_day_low)),
            volume: detail.and_then(|d| raw_decimal(&d.volume)),
            regular_market_volume: price.and_then(|p| raw_decimal(&p.regular_market_volume)),
            average_volume: detail.and_then(|d| raw_decimal(&d.average_daily_volume_10_day)),
            market_cap: detail.and_then(|d| raw_decimal(&d.market_cap)),
            float_shares: statistics.and_then(|s| raw_decimal(&s.float_shares)),
            trailing_pe: detail.and_then(|d| raw_decimal(&d.trailing_pe)),
            forward_pe: detail.and_then(|d| raw_decimal(&d.forward_pe)),
            dividend_yield: detail.and_then(|d| raw_decimal(&d.dividend_yield)),
            fifty_two_week_high: detail.and_then(|d| raw_decimal(&d.fifty_two_week_high)),
            fifty_two_week_low: detail.and_then(|d| raw_decimal(&d.fifty_two_week_low)),
            country: profile.and_then(|p| p.country.clone()),
        })
    }

    async fn classification(&self, symbol: &str) -> Result<Classification, MarketDataError> {
        let result = self.quote_summary(symbol, PROFILE_MODULES).await?;

        // Missing fields are a cacheable "unknown", not an error
        Ok(result
            .asset_profile
            .map(|profile| Classification {
                sector: profile.sector,
                industry: profile.industry,
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_raw_decimal_extraction() {
        let value = Some(RawValue { raw: Some(150.25) });
        assert_eq!(raw_decimal(&value), Some(dec!(150.25)));

        let empty = Some(RawValue { raw: None });
        assert_eq!(raw_decimal(&empty), None);

        assert_eq!(raw_decimal(&None), None);
    }
}
