//! Counters exposed on the `/stats` endpoint.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use serde::Serialize;

/// Running totals since process start.
#[derive(Debug)]
pub struct BotStats {
    started: Instant,
    messages_handled: AtomicU64,
    api_lookups: AtomicU64,
    cache_hits: AtomicU64,
    failed_lookups: AtomicU64,
}

/// Point-in-time copy of [`BotStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub uptime_secs: u64,
    pub messages_handled: u64,
    pub api_lookups: u64,
    pub cache_hits: u64,
    pub failed_lookups: u64,
}

impl BotStats {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            messages_handled: AtomicU64::new(0),
            api_lookups: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
            failed_lookups: AtomicU64::new(0),
        }
    }

    pub fn record_message(&self) {
        self.messages_handled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup(&self, from_cache: bool) {
        let counter = if from_cache {
            &self.cache_hits
        } else {
            &self.api_lookups
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            uptime_secs: self.started.elapsed().as_secs(),
            messages_handled: self.messages_handled.load(Ordering::Relaxed),
            api_lookups: self.api_lookups.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            failed_lookups: self.failed_lookups.load(Ordering::Relaxed),
        }
    }
}

impl Default for BotStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let stats = BotStats::new();
        stats.record_message();
        stats.record_message();
        stats.record_lookup(false);
        stats.record_lookup(true);
        stats.record_lookup(true);
        stats.record_failure();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.messages_handled, 2);
        assert_eq!(snapshot.api_lookups, 1);
        assert_eq!(snapshot.cache_hits, 2);
        assert_eq!(snapshot.failed_lookups, 1);
    }
}
