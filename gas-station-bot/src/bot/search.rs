//! Looking up the stations for a message's ZIP codes.

use tracing::{info, warn};

use crate::cache::CachedStationFinder;
use crate::domain::{SearchOutcome, ZipCode, ZipOutcome, ZipResult};
use crate::places::StationLookup;

use super::stats::BotStats;

/// Look up a single ZIP. A failed lookup becomes a [`ZipOutcome::Failed`]
/// so the rest of the message can still be answered.
pub async fn search_zip<L: StationLookup>(
    finder: &CachedStationFinder<L>,
    stats: &BotStats,
    zip: ZipCode,
) -> ZipResult {
    let outcome = match finder.find(zip).await {
        Ok(found) => {
            stats.record_lookup(found.from_cache);
            info!(
                %zip,
                stations = found.stations.len(),
                cached = found.from_cache,
                "ZIP lookup complete"
            );
            ZipOutcome::Found(found.stations)
        }
        Err(e) => {
            stats.record_failure();
            warn!(%zip, error = %e, "ZIP lookup failed, skipping");
            ZipOutcome::Failed(e.user_notice())
        }
    };

    ZipResult { zip, outcome }
}

/// Look up every ZIP in order, one at a time.
pub async fn search_zip_codes<L: StationLookup>(
    finder: &CachedStationFinder<L>,
    stats: &BotStats,
    zips: &[ZipCode],
) -> SearchOutcome {
    let mut results = Vec::with_capacity(zips.len());
    for &zip in zips {
        results.push(search_zip(finder, stats, zip).await);
    }
    SearchOutcome { results }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::cache::{CacheConfig, StationCache};
    use crate::domain::{GasStation, extract_zip_codes};
    use crate::places::{MockPlacesClient, PlacesClient, PlacesConfig};
    use crate::report::horizontal_csv;

    fn zip(s: &str) -> ZipCode {
        ZipCode::parse(s).unwrap()
    }

    fn stations(prefix: &str, n: usize, zip: &str) -> Vec<GasStation> {
        (1..=n)
            .map(|i| GasStation {
                name: format!("{prefix} {i}"),
                address: format!("{i} Main St"),
                city: "Town".to_string(),
                state: "TX".to_string(),
                zip: zip.to_string(),
            })
            .collect()
    }

    fn finder() -> CachedStationFinder<MockPlacesClient> {
        let mock = MockPlacesClient::from_map(HashMap::from([
            (zip("77001"), stations("Houston", 5, "77001")),
            (zip("75201"), stations("Dallas", 3, "75201")),
        ]));
        CachedStationFinder::new(mock, StationCache::new(&CacheConfig::default()))
    }

    #[tokio::test]
    async fn results_follow_input_order() {
        let finder = finder();
        let stats = BotStats::new();

        let outcome = search_zip_codes(&finder, &stats, &[zip("75201"), zip("77001")]).await;

        assert_eq!(outcome.zips(), vec![zip("75201"), zip("77001")]);
        assert_eq!(outcome.total_stations(), 8);
        assert_eq!(outcome.stations().next().unwrap().name, "Dallas 1");
    }

    #[tokio::test]
    async fn failed_zip_is_skipped_not_fatal() {
        let finder = finder();
        let stats = BotStats::new();

        let outcome = search_zip_codes(&finder, &stats, &[zip("00000"), zip("77001")]).await;

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.results[0].failure(), Some("ZIP code not found"));
        assert_eq!(outcome.total_stations(), 5);
        assert_eq!(stats.snapshot().failed_lookups, 1);
    }

    #[tokio::test]
    async fn failure_text_is_a_short_notice() {
        let client = PlacesClient::new(
            PlacesConfig::new("SECRET-KEY-123")
                .with_base_url("http://127.0.0.1:9")
                .with_timeout(2),
        )
        .unwrap();
        let finder =
            CachedStationFinder::new(client, StationCache::new(&CacheConfig::default()));
        let stats = BotStats::new();

        let result = search_zip(&finder, &stats, zip("90210")).await;

        assert_eq!(result.failure(), Some("lookup failed"));
        assert_eq!(stats.snapshot().failed_lookups, 1);
    }

    #[tokio::test]
    async fn duplicate_zips_in_a_message_are_looked_up_once() {
        let finder = finder();
        let stats = BotStats::new();

        let extraction = extract_zip_codes("77001 77001 75201 77001");
        let outcome = search_zip_codes(&finder, &stats, &extraction.zips).await;

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(finder.lookup().call_count(), 2);
        assert_eq!(outcome.total_stations(), 8);
    }

    #[tokio::test]
    async fn csv_has_five_columns_per_station() {
        let finder = finder();
        let stats = BotStats::new();

        let outcome = search_zip_codes(&finder, &stats, &[zip("77001"), zip("75201")]).await;
        let csv = horizontal_csv(&outcome);
        let header = csv.lines().next().unwrap();

        assert_eq!(header.split(',').count(), 5 * outcome.total_stations());
    }

    #[tokio::test]
    async fn repeated_message_is_served_from_cache() {
        let finder = finder();
        let stats = BotStats::new();

        search_zip_codes(&finder, &stats, &[zip("77001")]).await;
        search_zip_codes(&finder, &stats, &[zip("77001")]).await;

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.api_lookups, 1);
        assert_eq!(snapshot.cache_hits, 1);
        assert_eq!(finder.lookup().call_count(), 1);
    }
}
