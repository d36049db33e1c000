use std::env;
use std::str::FromStr;
use std::time::Duration;

use bulkquote_market_data::BatchConfig;

/// Server configuration, read once at startup from the environment.
///
/// The batch knobs (concurrency, pacing, timeout, rounding precision)
/// depend on the upstream provider's behavior and are deliberately
/// field-tunable rather than compiled in.
#[derive(Clone, Debug)]
pub struct Config {
    /// Address to bind, e.g. "0.0.0.0:8000".
    pub listen_addr: String,
    /// Batch orchestration policy.
    pub batch: BatchConfig,
}

impl Config {
    /// Build configuration from `BQ_*` environment variables, falling
    /// back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = BatchConfig::default();
        let batch = BatchConfig {
            concurrency: env_parse("BQ_CONCURRENCY", defaults.concurrency),
            wave_delay: Duration::from_millis(env_parse(
                "BQ_WAVE_DELAY_MS",
                defaults.wave_delay.as_millis() as u64,
            )),
            fetch_timeout: Duration::from_secs(env_parse(
                "BQ_FETCH_TIMEOUT_SECS",
                defaults.fetch_timeout.as_secs(),
            )),
            change_precision: env_parse("BQ_CHANGE_PRECISION", defaults.change_precision),
        };

        Self {
            listen_addr: env::var("BQ_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            batch,
        }
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
