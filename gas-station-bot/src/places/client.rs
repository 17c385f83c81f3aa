//! Google Maps HTTP client.
//!
//! Provides async methods for the three calls a ZIP lookup needs:
//! geocode the ZIP, search for gas stations near it, and fetch the full
//! address of each station.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::{GasStation, MAX_STATIONS_PER_ZIP, ZipCode, parse_address};

use super::error::PlacesError;
use super::lookup::StationLookup;
use super::types::{
    GeocodeResponse, LatLng, NearbyPlace, NearbySearchResponse, PlaceDetailsResponse, status,
};

/// Default base URL for the Google Maps web services.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Default search radius around the ZIP centroid, in metres.
const DEFAULT_RADIUS_M: u32 = 8000;


/// Default pause between consecutive place details calls.
const DEFAULT_DETAIL_DELAY: Duration = Duration::from_millis(100);

/// Name used when a place has none.
const UNNAMED_STATION: &str = "Unknown Station";

/// Configuration for the places client.
#[derive(Debug, Clone)]
pub struct PlacesConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production Google Maps)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Nearby search radius in metres
    pub search_radius_m: u32,
    /// Maximum stations kept per ZIP
    pub max_stations: usize,
    /// Pause between place details calls
    pub detail_delay: Duration,
}

impl PlacesConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            search_radius_m: DEFAULT_RADIUS_M,
            max_stations: MAX_STATIONS_PER_ZIP,
            detail_delay: DEFAULT_DETAIL_DELAY,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the nearby search radius.
    pub fn with_radius(mut self, metres: u32) -> Self {
        self.search_radius_m = metres;
        self
    }

    /// Set the pause between place details calls.
    pub fn with_detail_delay(mut self, delay: Duration) -> Self {
        self.detail_delay = delay;
        self
    }
}

/// A geocoded ZIP code.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub coords: LatLng,
    pub formatted_address: String,
}

/// Google Maps API client.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    http: reqwest::Client,
    config: PlacesConfig,
}

impl PlacesClient {
    /// Create a new places client with the given configuration.
    pub fn new(config: PlacesConfig) -> Result<Self, PlacesError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &PlacesConfig {
        &self.config
    }

    /// Convert a ZIP code to coordinates, restricted to the US.
    pub async fn geocode(&self, zip: ZipCode) -> Result<Location, PlacesError> {
        let response: GeocodeResponse = self
            .get_json(
                "geocode/json",
                &[
                    ("address", zip.to_string()),
                    ("components", "country:US".to_string()),
                ],
            )
            .await?;

        match response.status.as_str() {
            status::OK => {}
            status::ZERO_RESULTS => return Err(PlacesError::NoResults(zip)),
            other => return Err(PlacesError::from_status(other, response.error_message)),
        }

        let first = response
            .results
            .into_iter()
            .next()
            .ok_or(PlacesError::NoResults(zip))?;

        Ok(Location {
            coords: first.geometry.location,
            formatted_address: first.formatted_address,
        })
    }

    /// Search for gas stations around a location.
    ///
    /// Places are returned in the order the API ranks them.
    pub async fn nearby_gas_stations(
        &self,
        location: &Location,
    ) -> Result<Vec<NearbyPlace>, PlacesError> {
        let response: NearbySearchResponse = self
            .get_json(
                "place/nearbysearch/json",
                &[
                    (
                        "location",
                        format!("{},{}", location.coords.lat, location.coords.lng),
                    ),
                    ("radius", self.config.search_radius_m.to_string()),
                    ("type", "gas_station".to_string()),
                ],
            )
            .await?;

        match response.status.as_str() {
            status::OK => Ok(response.results),
            status::ZERO_RESULTS => Ok(Vec::new()),
            other => Err(PlacesError::from_status(other, response.error_message)),
        }
    }

    /// Fetch the formatted address of a place.
    ///
    /// Returns `None` if the place has no formatted address.
    pub async fn place_details(&self, place_id: &str) -> Result<Option<String>, PlacesError> {
        let response: PlaceDetailsResponse = self
            .get_json(
                "place/details/json",
                &[
                    ("place_id", place_id.to_string()),
                    ("fields", "formatted_address".to_string()),
                ],
            )
            .await?;

        if response.status != status::OK {
            return Err(PlacesError::from_status(
                &response.status,
                response.error_message,
            ));
        }

        Ok(response.result.and_then(|r| r.formatted_address))
    }

    /// Issue a GET against `{base_url}/{path}` with the API key attached.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, PlacesError> {
        let url = format!("{}/{}", self.config.base_url, path);

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.config.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlacesError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| PlacesError::Json {
            message: e.to_string(),
        })
    }
}

impl StationLookup for PlacesClient {
    async fn lookup(&self, zip: ZipCode) -> Result<Vec<GasStation>, PlacesError> {
        let location = self.geocode(zip).await?;
        debug!(%zip, address = %location.formatted_address, "geocoded ZIP");

        let places = self.nearby_gas_stations(&location).await?;
        debug!(%zip, found = places.len(), "nearby search complete");

        let mut stations = Vec::with_capacity(places.len().min(self.config.max_stations));

        for (i, place) in places
            .into_iter()
            .take(self.config.max_stations)
            .enumerate()
        {
            if i > 0 && !self.config.detail_delay.is_zero() {
                tokio::time::sleep(self.config.detail_delay).await;
            }

            let address = match self.place_details(&place.place_id).await {
                Ok(Some(address)) => address,
                Ok(None) => place.vicinity.clone().unwrap_or_default(),
                Err(e) => {
                    warn!(
                        %zip,
                        place_id = %place.place_id,
                        error = %e,
                        "place details failed, using vicinity"
                    );
                    place.vicinity.clone().unwrap_or_default()
                }
            };

            let name = place
                .name
                .unwrap_or_else(|| UNNAMED_STATION.to_string());

            stations.push(GasStation::new(name, parse_address(&address, zip)));
        }

        Ok(stations)
    }
}
