//! Caching layer for station lookups.
//!
//! Every uncached ZIP costs several billed API calls, so results are kept
//! in memory per ZIP for a fixed time-to-live. Expired entries are treated
//! as absent and looked up again. Only successful lookups are stored; a
//! failed ZIP is retried on the next message that mentions it.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{GasStation, MAX_STATIONS_PER_ZIP, ZipCode};
use crate::places::{PlacesError, StationLookup};

/// Cached station list entry.
type StationEntry = Arc<Vec<GasStation>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(30 * 60),
            max_capacity: 1000,
        }
    }
}

/// In-memory cache of station lists keyed by ZIP.
///
/// Cloning is cheap; clones share the same entries.
#[derive(Clone)]
pub struct StationCache {
    entries: MokaCache<ZipCode, StationEntry>,
}

impl StationCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { entries }
    }

    /// Get a cached entry, if present and not expired.
    pub async fn get(&self, zip: &ZipCode) -> Option<StationEntry> {
        self.entries.get(zip).await
    }

    /// Insert an entry into the cache.
    pub async fn insert(&self, zip: ZipCode, entry: StationEntry) {
        self.entries.insert(zip, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.entries.invalidate_all();
    }
}

/// Stations found for one ZIP.
#[derive(Debug, Clone)]
pub struct FoundStations {
    pub stations: StationEntry,

    /// True if served without calling the lookup.
    pub from_cache: bool,
}

/// Station lookup with caching.
///
/// Wraps a [`StationLookup`] and caches its successful results.
pub struct CachedStationFinder<L> {
    lookup: L,
    cache: StationCache,
}

impl<L: StationLookup> CachedStationFinder<L> {
    /// Create a new cached finder.
    pub fn new(lookup: L, cache: StationCache) -> Self {
        Self { lookup, cache }
    }

    /// Find stations near `zip`, using the cache if available.
    pub async fn find(&self, zip: ZipCode) -> Result<FoundStations, PlacesError> {
        if let Some(cached) = self.cache.get(&zip).await {
            debug!(%zip, "station cache hit");
            return Ok(FoundStations {
                stations: cached,
                from_cache: true,
            });
        }

        let mut stations = self.lookup.lookup(zip).await?;
        if stations.len() > MAX_STATIONS_PER_ZIP {
            debug!(%zip, found = stations.len(), "trimming station list");
            stations.truncate(MAX_STATIONS_PER_ZIP);
        }

        let stations = Arc::new(stations);
        self.cache.insert(zip, stations.clone()).await;

        Ok(FoundStations {
            stations,
            from_cache: false,
        })
    }

    /// Access the underlying lookup.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// The cache shared with this finder.
    pub fn cache(&self) -> &StationCache {
        &self.cache
    }
}
