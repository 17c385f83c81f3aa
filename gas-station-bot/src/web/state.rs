//! Application state for the web layer.

use std::sync::Arc;

use crate::bot::BotStats;
use crate::cache::StationCache;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Station cache shared with the bot
    pub cache: StationCache,

    /// Counters updated by the bot
    pub stats: Arc<BotStats>,

    /// Which station source is in use ("google-places" or "mock")
    pub source: &'static str,
}

impl AppState {
    /// Create a new app state.
    pub fn new(cache: StationCache, stats: Arc<BotStats>, source: &'static str) -> Self {
        Self {
            cache,
            stats,
            source,
        }
    }
}
