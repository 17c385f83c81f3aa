//! Google Maps API response DTOs.
//!
//! These types map directly to the JSON returned by the Geocoding,
//! Nearby Search and Place Details endpoints. Only the fields the bot
//! reads are modelled; everything else is ignored by serde.

use serde::Deserialize;

/// Top-level status strings shared by all Google Maps web services.
pub mod status {
    pub const OK: &str = "OK";
    pub const ZERO_RESULTS: &str = "ZERO_RESULTS";
    pub const OVER_QUERY_LIMIT: &str = "OVER_QUERY_LIMIT";
    pub const REQUEST_DENIED: &str = "REQUEST_DENIED";
}

/// Response from the Geocoding API.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,

    #[serde(default)]
    pub results: Vec<GeocodeResult>,

    /// Present when `status` is not `OK`.
    pub error_message: Option<String>,
}

/// A single geocoding match.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Response from the Nearby Search API.
#[derive(Debug, Clone, Deserialize)]
pub struct NearbySearchResponse {
    pub status: String,

    #[serde(default)]
    pub results: Vec<NearbyPlace>,

    pub error_message: Option<String>,
}

/// A place returned by Nearby Search.
#[derive(Debug, Clone, Deserialize)]
pub struct NearbyPlace {
    pub place_id: String,

    pub name: Option<String>,

    /// Short street-level address, e.g. "9988 Wilshire Blvd, Beverly Hills".
    pub vicinity: Option<String>,
}

/// Response from the Place Details API.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetailsResponse {
    pub status: String,

    pub result: Option<PlaceDetails>,

    pub error_message: Option<String>,
}

/// The subset of place details requested via `fields=formatted_address`.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetails {
    pub formatted_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_geocode_response() {
        let json = r#"{
            "results": [
                {
                    "address_components": [],
                    "formatted_address": "Beverly Hills, CA 90210, USA",
                    "geometry": {
                        "location": { "lat": 34.1030032, "lng": -118.4104684 },
                        "location_type": "APPROXIMATE"
                    },
                    "place_id": "ChIJ"
                }
            ],
            "status": "OK"
        }"#;

        let response: GeocodeResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, status::OK);
        assert_eq!(response.results.len(), 1);
        assert_eq!(
            response.results[0].formatted_address,
            "Beverly Hills, CA 90210, USA"
        );
        assert_eq!(response.results[0].geometry.location.lat, 34.1030032);
        assert!(response.error_message.is_none());
    }

    #[test]
    fn deserialize_denied_geocode_response() {
        let json = r#"{
            "error_message": "The provided API key is invalid.",
            "results": [],
            "status": "REQUEST_DENIED"
        }"#;

        let response: GeocodeResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, status::REQUEST_DENIED);
        assert!(response.results.is_empty());
        assert_eq!(
            response.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
    }

    #[test]
    fn deserialize_nearby_search_response() {
        let json = r#"{
            "html_attributions": [],
            "results": [
                {
                    "name": "Chevron",
                    "place_id": "abc",
                    "vicinity": "9988 Wilshire Blvd, Beverly Hills",
                    "types": ["gas_station", "point_of_interest"]
                },
                { "place_id": "def" }
            ],
            "status": "OK"
        }"#;

        let response: NearbySearchResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].name.as_deref(), Some("Chevron"));
        assert_eq!(response.results[1].place_id, "def");
        assert!(response.results[1].name.is_none());
    }

    #[test]
    fn deserialize_place_details_missing_results() {
        let json = r#"{ "status": "NOT_FOUND" }"#;

        let response: PlaceDetailsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.status, "NOT_FOUND");
        assert!(response.result.is_none());
    }
}
