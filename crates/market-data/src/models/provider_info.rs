use rust_decimal::Decimal;

/// Loosely-typed field bag returned by a single provider lookup.
///
/// The upstream exposes two overlapping field families depending on market
/// session state: the "current/day" family and the "regular market" family.
/// Both are carried here untouched; choosing one authoritative value per
/// field is the fetcher's job, not the provider's.
#[derive(Clone, Debug, Default)]
pub struct ProviderInfo {
    pub long_name: Option<String>,
    pub short_name: Option<String>,

    pub current_price: Option<Decimal>,
    pub regular_market_price: Option<Decimal>,

    pub previous_close: Option<Decimal>,
    pub regular_market_previous_close: Option<Decimal>,

    pub open: Option<Decimal>,
    pub regular_market_open: Option<Decimal>,

    pub day_high: Option<Decimal>,
    pub regular_market_day_high: Option<Decimal>,

    pub day_low: Option<Decimal>,
    pub regular_market_day_low: Option<Decimal>,

    pub volume: Option<Decimal>,
    pub regular_market_volume: Option<Decimal>,

    /// 10-day average daily volume.
    pub average_volume: Option<Decimal>,

    pub market_cap: Option<Decimal>,
    pub float_shares: Option<Decimal>,
    pub trailing_pe: Option<Decimal>,
    pub forward_pe: Option<Decimal>,
    pub dividend_yield: Option<Decimal>,
    pub fifty_two_week_high: Option<Decimal>,
    pub fifty_two_week_low: Option<Decimal>,

    /// Country of domicile. Part of the quote lookup rather than the
    /// cached classification entry.
    pub country: Option<String>,
}
