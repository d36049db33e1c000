//! Error types for the bulk quote market data crate.
//!
//! [`MarketDataError`] covers both request-level failures (an empty batch)
//! and per-symbol fetch failures. Per-symbol errors are carried as values
//! inside [`FetchOutcome`](crate::models::FetchOutcome) entries; they never
//! cross the orchestrator boundary as exceptions.

use thiserror::Error;

/// Errors that can occur during quote fetching and batch orchestration.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider does not know the symbol at all.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider answered, but neither the current-price nor the
    /// regular-market price field was present. Treated as "symbol
    /// unavailable" rather than a malformed response.
    #[error("No price data for symbol: {0}")]
    NoPriceData(String),

    /// The upstream call exceeded the configured per-fetch timeout.
    #[error("Timeout fetching symbol: {0}")]
    Timeout(String),

    /// A provider-specific error occurred (malformed response, auth
    /// expiry, upstream 5xx, ...).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The batch input contained no symbols. This is a caller-input
    /// error and is surfaced before any fetch is attempted.
    #[error("No symbols to process")]
    EmptyBatch,

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Whether the error reflects the caller's input rather than an
    /// upstream fetch failure.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::EmptyBatch)
    }

    /// Whether a later, identical request could plausibly succeed.
    ///
    /// Used to decide what may be cached: transient failures must not be
    /// memoized, terminal ones (unknown symbol) could be.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::SymbolNotFound(_) | Self::NoPriceData(_) | Self::EmptyBatch => false,
            Self::Timeout(_) | Self::ProviderError { .. } | Self::Network(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_price_data_is_terminal() {
        let error = MarketDataError::NoPriceData("ZZZZ".to_string());
        assert!(!error.is_transient());
    }

    #[test]
    fn test_timeout_is_transient() {
        let error = MarketDataError::Timeout("AAPL".to_string());
        assert!(error.is_transient());
    }

    #[test]
    fn test_provider_error_is_transient() {
        let error = MarketDataError::ProviderError {
            provider: "YAHOO".to_string(),
            message: "Internal server error".to_string(),
        };
        assert!(error.is_transient());
    }

    #[test]
    fn test_empty_batch_is_caller_error() {
        assert!(MarketDataError::EmptyBatch.is_caller_error());
        assert!(!MarketDataError::SymbolNotFound("X".to_string()).is_caller_error());
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: INVALID");

        let error = MarketDataError::ProviderError {
            provider: "YAHOO".to_string(),
            message: "authentication expired".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: YAHOO - authentication expired"
        );
    }
}
