use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use bulkquote_market_data::FetchOutcome;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Deserialize)]
struct QuoteQuery {
    symbols: Option<String>,
}

#[derive(Deserialize)]
struct QuoteBody {
    /// Raw JSON entries; non-string and blank values are filtered out
    /// rather than rejected wholesale.
    symbols: Option<Vec<serde_json::Value>>,
}

#[derive(Serialize)]
struct QuoteResponse {
    success: bool,
    /// Number of successful outcomes (failures inside `data` excluded).
    count: usize,
    /// One entry per input symbol, in input order.
    data: Vec<FetchOutcome>,
    timestamp: String,
}

/// `GET /quote?symbols=AAPL,MSFT,TSLA`
async fn quotes_get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<QuoteQuery>,
) -> ApiResult<Json<QuoteResponse>> {
    let raw = query
        .symbols
        .ok_or_else(|| ApiError::bad_request("No symbols provided"))?;

    run_batch(&state, normalize_symbols(raw.split(','))).await
}

/// `POST /quote` with body `{"symbols": ["AAPL", "MSFT"]}`
async fn quotes_post(
    State(state): State<Arc<AppState>>,
    Json(body): Json<QuoteBody>,
) -> ApiResult<Json<QuoteResponse>> {
    let entries = body
        .symbols
        .ok_or_else(|| ApiError::bad_request("No symbols provided"))?;

    let symbols = normalize_symbols(entries.iter().filter_map(|value| value.as_str()));
    run_batch(&state, symbols).await
}

/// Uppercase and trim candidate symbols, dropping blanks. Duplicates are
/// kept: repeated symbols are legitimate requests for independent
/// freshness and yield one outcome each.
fn normalize_symbols<'a>(raw: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    raw.into_iter()
        .map(str::trim)
        .filter(|symbol| !symbol.is_empty())
        .map(str::to_uppercase)
        .collect()
}

async fn run_batch(state: &AppState, symbols: Vec<String>) -> ApiResult<Json<QuoteResponse>> {
    if symbols.is_empty() {
        return Err(ApiError::bad_request("No resolvable symbols"));
    }

    let result = state.orchestrator.process_symbols(&symbols).await?;

    Ok(Json(QuoteResponse {
        success: true,
        count: result.succeeded,
        data: result.outcomes,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quote", get(quotes_get).post(quotes_post))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases_and_trims() {
        let symbols = normalize_symbols(" aapl , msft ,tsla".split(','));
        assert_eq!(symbols, vec!["AAPL", "MSFT", "TSLA"]);
    }

    #[test]
    fn test_normalize_drops_blanks_keeps_duplicates() {
        let symbols = normalize_symbols("AAPL,,  ,aapl".split(','));
        assert_eq!(symbols, vec!["AAPL", "AAPL"]);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize_symbols("".split(',')).is_empty());
    }
}
