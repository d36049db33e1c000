//! Bulk Quote Market Data Crate
//!
//! This crate provides the batch-fetch orchestration core for the bulk
//! quote service: given a list of ticker symbols and an upstream provider
//! that answers one symbol per call, fetch all of them concurrently
//! without unbounded fan-out, tolerate per-symbol failures, and avoid
//! re-fetching slow-changing classification metadata.
//!
//! # Architecture
//!
//! ```text
//! +--------------------+
//! |  BatchOrchestrator |  (waves of at most C fetches, pacing, ordering)
//! +--------------------+
//!       |            |
//!       v            v
//! +--------------+  +---------------------+
//! | QuoteFetcher |  | ClassificationCache |  (single-flight memoization)
//! +--------------+  +---------------------+
//!       |            |
//!       v            v
//! +---------------------------+
//! |    MarketDataProvider     |  (one symbol per call, e.g. Yahoo)
//! +---------------------------+
//! ```
//!
//! # Core Types
//!
//! - [`BatchOrchestrator`] / [`BatchConfig`] - concurrent batch processing
//! - [`QuoteFetcher`] - per-symbol normalization with field fallback chains
//! - [`ClassificationCache`] - memoized sector/industry lookups
//! - [`QuoteRecord`] / [`FetchOutcome`] / [`BatchResult`] - result shapes
//! - [`MarketDataProvider`] - the single-symbol provider seam

pub mod batch;
pub mod cache;
pub mod errors;
pub mod fetcher;
pub mod models;
pub mod provider;

// Re-export the core types
pub use batch::{BatchConfig, BatchOrchestrator};
pub use cache::ClassificationCache;
pub use errors::MarketDataError;
pub use fetcher::{FetcherConfig, QuoteFetcher};
pub use models::{
    BatchResult, Classification, FetchFailure, FetchOutcome, ProviderInfo, QuoteRecord,
};

// Re-export provider types
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;
