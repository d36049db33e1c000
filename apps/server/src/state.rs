use std::sync::Arc;

use bulkquote_market_data::{BatchOrchestrator, MarketDataProvider, YahooProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

/// Shared application state handed to every handler.
pub struct AppState {
    pub orchestrator: BatchOrchestrator,
}

/// Initialize the global tracing subscriber.
///
/// `BQ_LOG_FORMAT=json` switches to JSON output; the filter comes from
/// `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let log_format = std::env::var("BQ_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true))
            .init();
    }
}

/// Build state backed by the real Yahoo provider.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = Arc::new(YahooProvider::new()?);
    Ok(state_with_provider(provider, config))
}

/// Build state with an injected provider. Tests use this to run the full
/// HTTP surface against a stub.
pub fn state_with_provider(
    provider: Arc<dyn MarketDataProvider>,
    config: &Config,
) -> Arc<AppState> {
    let orchestrator = BatchOrchestrator::new(provider, config.batch.clone());
    Arc::new(AppState { orchestrator })
}
