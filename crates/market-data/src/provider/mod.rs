//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The Yahoo Finance implementation
//!
//! Providers are deliberately dumb adapters: one symbol in, one loosely
//! typed field bag (or classification) out. Batching, pacing, caching and
//! field normalization all live above this seam, so the rest of the crate
//! can be exercised against stub providers in tests.

mod traits;

pub mod yahoo;

pub use traits::MarketDataProvider;
