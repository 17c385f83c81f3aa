//! Mock places client for running without API access.
//!
//! Loads canned station lists from JSON files and serves them as if they
//! were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::{GasStation, ZipCode};

use super::error::PlacesError;
use super::lookup::StationLookup;

/// Mock places client that serves station lists from fixtures.
///
/// ZIP codes without a fixture geocode to nothing, like an unknown ZIP
/// against the real API.
#[derive(Debug, Clone)]
pub struct MockPlacesClient {
    stations: Arc<HashMap<ZipCode, Vec<GasStation>>>,
    calls: Arc<AtomicUsize>,
}

impl MockPlacesClient {
    /// Create a mock client by loading JSON files from a directory.
    ///
    /// Expects files named `{ZIP}.json` (e.g., `90210.json`), each holding a
    /// JSON array of stations.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, PlacesError> {
        let data_dir = data_dir.as_ref();
        let mut stations = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| PlacesError::Fixture {
            message: format!("failed to read mock data directory {:?}: {}", data_dir, e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| PlacesError::Fixture {
                message: format!("failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let zip_str = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| PlacesError::Fixture {
                    message: format!("invalid filename: {:?}", path),
                })?;

            let zip = ZipCode::parse(zip_str).map_err(|_| PlacesError::Fixture {
                message: format!("invalid ZIP in filename: {}", zip_str),
            })?;

            let json = std::fs::read_to_string(&path).map_err(|e| PlacesError::Fixture {
                message: format!("failed to read {:?}: {}", path, e),
            })?;

            let list: Vec<GasStation> =
                serde_json::from_str(&json).map_err(|e| PlacesError::Fixture {
                    message: format!("failed to parse {:?}: {}", path, e),
                })?;

            stations.insert(zip, list);
        }

        if stations.is_empty() {
            return Err(PlacesError::Fixture {
                message: format!("no mock station files found in {:?}", data_dir),
            });
        }

        Ok(Self::from_map(stations))
    }

    /// Create a mock client from an in-memory map.
    pub fn from_map(stations: HashMap<ZipCode, Vec<GasStation>>) -> Self {
        Self {
            stations: Arc::new(stations),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// ZIP codes with fixture data.
    pub fn available_zips(&self) -> Vec<ZipCode> {
        let mut zips: Vec<ZipCode> = self.stations.keys().copied().collect();
        zips.sort();
        zips
    }

    /// Number of lookups served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl StationLookup for MockPlacesClient {
    async fn lookup(&self, zip: ZipCode) -> Result<Vec<GasStation>, PlacesError> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        self.stations
            .get(&zip)
            .cloned()
            .ok_or(PlacesError::NoResults(zip))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn station(name: &str) -> GasStation {
        GasStation {
            name: name.to_string(),
            address: "1 Main St".to_string(),
            city: "Beverly Hills".to_string(),
            state: "CA".to_string(),
            zip: "90210".to_string(),
        }
    }

    fn zip(s: &str) -> ZipCode {
        ZipCode::parse(s).unwrap()
    }

    #[tokio::test]
    async fn load_fixture_directory() {
        let dir = tempdir().unwrap();
        let json = serde_json::to_string(&vec![station("Shell"), station("Chevron")]).unwrap();
        std::fs::write(dir.path().join("90210.json"), json).unwrap();
        std::fs::write(dir.path().join("README.txt"), "not a fixture").unwrap();

        let client = MockPlacesClient::new(dir.path()).unwrap();
        assert_eq!(client.available_zips(), vec![zip("90210")]);

        let stations = client.lookup(zip("90210")).await.unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].name, "Shell");
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn bundled_fixtures_load() {
        let client = MockPlacesClient::new("fixtures").unwrap();
        assert!(client.available_zips().contains(&zip("90210")));

        let stations = client.lookup(zip("90210")).await.unwrap();
        assert_eq!(stations.len(), 3);
        assert!(client.lookup(zip("99999")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_zip_returns_error() {
        let client = MockPlacesClient::from_map(HashMap::from([(zip("90210"), vec![])]));

        let result = client.lookup(zip("10001")).await;
        assert!(matches!(result, Err(PlacesError::NoResults(z)) if z == zip("10001")));
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(MockPlacesClient::new(dir.path()).is_err());
    }

    #[test]
    fn invalid_fixture_name_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("beverly.json"), "[]").unwrap();
        assert!(MockPlacesClient::new(dir.path()).is_err());
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(MockPlacesClient::new("/nonexistent/mock/places").is_err());
    }
}
