//! The seam between the bot and wherever station data comes from.

use std::future::Future;

use crate::domain::{GasStation, ZipCode};

use super::client::PlacesClient;
use super::error::PlacesError;
use super::mock::MockPlacesClient;

/// Something that can find the gas stations near a ZIP code.
pub trait StationLookup: Send + Sync {
    /// Find stations near `zip`, in the order the source ranks them.
    fn lookup(
        &self,
        zip: ZipCode,
    ) -> impl Future<Output = Result<Vec<GasStation>, PlacesError>> + Send;
}

/// The station source selected at startup.
#[derive(Debug, Clone)]
pub enum StationSource {
    /// Live Google Maps API (billed).
    Live(PlacesClient),
    /// Fixture files on disk, for development without an API key.
    Mock(MockPlacesClient),
}

impl StationSource {
    /// Short label for logs and stats.
    pub fn kind(&self) -> &'static str {
        match self {
            StationSource::Live(_) => "google-places",
            StationSource::Mock(_) => "mock",
        }
    }
}

impl StationLookup for StationSource {
    async fn lookup(&self, zip: ZipCode) -> Result<Vec<GasStation>, PlacesError> {
        match self {
            StationSource::Live(client) => client.lookup(zip).await,
            StationSource::Mock(client) => client.lookup(zip).await,
        }
    }
}
