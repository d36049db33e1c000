//! HTTP surface for the bulk quote service.
//!
//! Routing, request parsing and symbol normalization live here; all
//! fetch orchestration is delegated to `bulkquote-market-data`.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

pub use config::Config;
pub use state::{build_state, init_tracing, state_with_provider, AppState};
