//! Market data models
//!
//! This module contains the core data types for batch quote operations:
//! - `quote` - The normalized per-symbol quote record (QuoteRecord)
//! - `provider_info` - Loosely-typed field bag returned by provider lookups (ProviderInfo)
//! - `classification` - Slow-changing sector/industry metadata (Classification)
//! - `outcome` - Tagged per-symbol results and batch aggregates (FetchOutcome, BatchResult)

mod classification;
mod outcome;
mod provider_info;
mod quote;

pub use classification::Classification;
pub use outcome::{BatchResult, FetchFailure, FetchOutcome};
pub use provider_info::ProviderInfo;
pub use quote::QuoteRecord;
