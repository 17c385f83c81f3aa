//! HTTP route handlers.
//!
//! The bot itself speaks to Telegram by polling; these routes exist so a
//! hosting platform can health-check the process and an operator can see
//! how much the cache is saving.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use super::state::AppState;

/// Response body for `/stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub source: &'static str,
    pub uptime_secs: u64,
    pub cached_zips: u64,
    pub messages_handled: u64,
    pub api_lookups: u64,
    pub cache_hits: u64,
    pub failed_lookups: u64,
}

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/stats", get(stats))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Bot and cache counters.
async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let snapshot = state.stats.snapshot();

    Json(StatsResponse {
        source: state.source,
        uptime_secs: snapshot.uptime_secs,
        cached_zips: state.cache.entry_count(),
        messages_handled: snapshot.messages_handled,
        api_lookups: snapshot.api_lookups,
        cache_hits: snapshot.cache_hits,
        failed_lookups: snapshot.failed_lookups,
    })
}
