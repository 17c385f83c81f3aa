//! Google Maps places client.
//!
//! A ZIP lookup is three kinds of billed call, made one after another:
//! - Geocoding turns the ZIP into a coordinate (restricted to the US)
//! - Nearby Search finds `gas_station` places within a radius
//! - Place Details fetches the full formatted address of each station
//!
//! The [`StationLookup`] trait hides which source is in use, so the cache
//! and the bot work the same against the live API and the fixture mock.

mod client;
mod error;
mod lookup;
mod mock;
mod types;

pub use client::{Location, PlacesClient, PlacesConfig};
pub use error::PlacesError;
pub use lookup::{StationLookup, StationSource};
pub use mock::MockPlacesClient;
pub use types::{
    GeocodeResponse, GeocodeResult, Geometry, LatLng, NearbyPlace, NearbySearchResponse,
    PlaceDetails, PlaceDetailsResponse,
};
