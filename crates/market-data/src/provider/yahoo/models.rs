//! Yahoo Finance quoteSummary API response models.
//!
//! Yahoo wraps most numeric values in `{"raw": 123.45, "fmt": "123.45"}`
//! objects, and returns an empty object `{}` when no data is available,
//! so every leaf is optional.

use serde::Deserialize;

/// Main response wrapper for the quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResponse {
    pub quote_summary: QuoteSummary,
}

/// Quote summary container
#[derive(Debug, Deserialize)]
pub struct QuoteSummary {
    #[serde(default)]
    pub result: Vec<QuoteSummaryResult>,
}

/// Individual result from the quoteSummary API; one entry per module
/// requested in the URL.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSummaryResult {
    pub price: Option<PriceModule>,
    pub summary_detail: Option<SummaryDetailModule>,
    pub financial_data: Option<FinancialDataModule>,
    pub default_key_statistics: Option<KeyStatisticsModule>,
    pub asset_profile: Option<AssetProfileModule>,
}

/// Numeric value with raw and formatted representations; `{}` when absent.
#[derive(Debug, Deserialize, Clone)]
pub struct RawValue {
    pub raw: Option<f64>,
    // Note: fmt field exists but we only use raw values
}

/// `price` module: names plus the regular-market field family.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceModule {
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub regular_market_price: Option<RawValue>,
    pub regular_market_previous_close: Option<RawValue>,
    pub regular_market_open: Option<RawValue>,
    pub regular_market_day_high: Option<RawValue>,
    pub regular_market_day_low: Option<RawValue>,
    pub regular_market_volume: Option<RawValue>,
}

/// `summaryDetail` module: the current/day field family plus valuation
/// metrics.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryDetailModule {
    pub previous_close: Option<RawValue>,
    pub open: Option<RawValue>,
    pub day_high: Option<RawValue>,
    pub day_low: Option<RawValue>,
    pub volume: Option<RawValue>,
    pub average_daily_volume_10_day: Option<RawValue>,
    pub market_cap: Option<RawValue>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<RawValue>,
    #[serde(rename = "forwardPE")]
    pub forward_pe: Option<RawValue>,
    pub dividend_yield: Option<RawValue>,
    pub fifty_two_week_high: Option<RawValue>,
    pub fifty_two_week_low: Option<RawValue>,
}

/// `financialData` module: holds the session-dependent current price.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialDataModule {
    pub current_price: Option<RawValue>,
}

/// `defaultKeyStatistics` module: share statistics.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStatisticsModule {
    pub float_shares: Option<RawValue>,
}

/// `assetProfile` module: company classification.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetProfileModule {
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_raw_value() {
        let json = r#"{"raw": 150.25, "fmt": "150.25"}"#;
        let value: RawValue = serde_json::from_str(json).unwrap();
        assert_eq!(value.raw, Some(150.25));
    }

    #[test]
    fn test_deserialize_raw_value_empty_object() {
        // Yahoo returns {} for fields with no data (e.g., no dividend)
        let value: RawValue = serde_json::from_str("{}").unwrap();
        assert_eq!(value.raw, None);
    }

    #[test]
    fn test_deserialize_summary_detail() {
        let json = r#"{
            "previousClose": {"raw": 100.0, "fmt": "100.00"},
            "volume": {"raw": 1000000, "fmt": "1M"},
            "averageDailyVolume10Day": {"raw": 500000, "fmt": "500k"},
            "trailingPE": {"raw": 28.5, "fmt": "28.50"},
            "dividendYield": {}
        }"#;
        let detail: SummaryDetailModule = serde_json::from_str(json).unwrap();
        assert_eq!(detail.previous_close.as_ref().and_then(|v| v.raw), Some(100.0));
        assert_eq!(
            detail.average_daily_volume_10_day.as_ref().and_then(|v| v.raw),
            Some(500000.0)
        );
        assert_eq!(detail.trailing_pe.as_ref().and_then(|v| v.raw), Some(28.5));
        assert_eq!(detail.dividend_yield.as_ref().and_then(|v| v.raw), None);
    }

    #[test]
    fn test_deserialize_asset_profile() {
        let json = r#"{
            "sector": "Technology",
            "industry": "Consumer Electronics",
            "country": "United States"
        }"#;
        let profile: AssetProfileModule = serde_json::from_str(json).unwrap();
        assert_eq!(profile.sector, Some("Technology".to_string()));
        assert_eq!(profile.industry, Some("Consumer Electronics".to_string()));
        assert_eq!(profile.country, Some("United States".to_string()));
    }

    #[test]
    fn test_deserialize_empty_result_list() {
        let json = r#"{"quoteSummary": {"result": []}}"#;
        let response: QuoteSummaryResponse = serde_json::from_str(json).unwrap();
        assert!(response.quote_summary.result.is_empty());
    }
}
