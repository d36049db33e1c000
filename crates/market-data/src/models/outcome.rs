use serde::Serialize;

use crate::errors::MarketDataError;
use crate::models::QuoteRecord;

/// Tagged per-symbol result: either a full quote record or a failure
/// carrying the symbol and the failure reason.
///
/// Serializes untagged, so a success entry is the plain quote object and a
/// failure entry is `{"symbol": ..., "error": ...}`. The presence of the
/// `error` field is what distinguishes the two on the wire.
#[derive(Clone, Debug, Serialize)]
#[serde(untagged)]
pub enum FetchOutcome {
    Quote(QuoteRecord),
    Failure(FetchFailure),
}

/// A per-symbol fetch failure, recorded in place of the quote so the
/// batch keeps one entry per input symbol.
#[derive(Clone, Debug, Serialize)]
pub struct FetchFailure {
    pub symbol: String,
    pub error: String,
}

impl FetchOutcome {
    pub fn quote(record: QuoteRecord) -> Self {
        Self::Quote(record)
    }

    pub fn failure(symbol: impl Into<String>, error: &MarketDataError) -> Self {
        Self::Failure(FetchFailure {
            symbol: symbol.into(),
            error: error.to_string(),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Quote(_))
    }

    pub fn symbol(&self) -> &str {
        match self {
            Self::Quote(record) => &record.symbol,
            Self::Failure(failure) => &failure.symbol,
        }
    }
}

/// Aggregate outcome of one batch, order-correlated to the input symbols.
#[derive(Clone, Debug, Serialize)]
pub struct BatchResult {
    /// One outcome per input symbol, in input order, duplicates included.
    pub outcomes: Vec<FetchOutcome>,
    /// Number of symbols requested (length of the input).
    pub requested: usize,
    /// Number of successful quote outcomes.
    pub succeeded: usize,
}

impl BatchResult {
    pub fn from_outcomes(outcomes: Vec<FetchOutcome>) -> Self {
        let requested = outcomes.len();
        let succeeded = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            outcomes,
            requested,
            succeeded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote_for(symbol: &str) -> FetchOutcome {
        FetchOutcome::quote(QuoteRecord {
            symbol: symbol.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_counts_exclude_failures() {
        let result = BatchResult::from_outcomes(vec![
            quote_for("AAPL"),
            FetchOutcome::failure("ZZZZ", &MarketDataError::NoPriceData("ZZZZ".to_string())),
            quote_for("MSFT"),
        ]);

        assert_eq!(result.requested, 3);
        assert_eq!(result.succeeded, 2);
    }

    #[test]
    fn test_failure_serializes_with_error_field() {
        let outcome =
            FetchOutcome::failure("ZZZZ", &MarketDataError::NoPriceData("ZZZZ".to_string()));
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["symbol"], "ZZZZ");
        assert_eq!(json["error"], "No price data for symbol: ZZZZ");
    }

    #[test]
    fn test_success_serializes_without_error_field() {
        let json = serde_json::to_value(quote_for("AAPL")).unwrap();
        assert_eq!(json["symbol"], "AAPL");
        assert!(json.get("error").is_none());
    }
}
