use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Normalized quote record for one symbol.
///
/// Every numeric field is optional: the provider may omit any of them, and
/// absence must stay distinguishable from zero (a stock legitimately priced
/// near zero is not "no data"). Absent fields serialize as JSON `null` so
/// the wire shape is identical for every successful entry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Normalized (uppercased, trimmed) ticker symbol.
    pub symbol: String,

    /// Display name, preferring the long name over the short one.
    pub name: Option<String>,

    /// Last traded price. A record without a price is never constructed;
    /// the fetcher reports `NoPriceData` instead.
    pub price: Option<Decimal>,

    pub open: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,

    pub volume: Option<Decimal>,
    pub avg_volume: Option<Decimal>,

    /// Percent change versus the previous close, rounded to the configured
    /// precision. Absent when the previous close is missing or zero.
    pub change_percent: Option<Decimal>,

    /// Volume divided by average volume, rounded to 2 places. Absent when
    /// the average volume is missing or zero.
    pub relative_volume: Option<Decimal>,

    pub market_cap: Option<Decimal>,
    pub shares_float: Option<Decimal>,
    pub pe_ratio: Option<Decimal>,
    pub forward_pe: Option<Decimal>,
    pub dividend_yield: Option<Decimal>,
    pub fifty_two_week_high: Option<Decimal>,
    pub fifty_two_week_low: Option<Decimal>,

    pub sector: Option<String>,
    pub industry: Option<String>,
    pub country: Option<String>,
}
