//! Gas station records and address parsing.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ZipCode;

/// Placeholder for fields the API response did not provide.
pub const UNKNOWN: &str = "Unknown";

/// Street address used when a place has no formatted address at all.
pub const ADDRESS_NOT_AVAILABLE: &str = "Address not available";

/// Most stations reported for a single ZIP, whatever the source.
pub const MAX_STATIONS_PER_ZIP: usize = 5;

/// Two-letter state followed by a 5-digit ZIP, with an optional +4 suffix.
static STATE_ZIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z]{2})\s+([0-9]{5})(?:-[0-9]{4})?\b").expect("state/zip pattern is valid")
});

/// A single gas station as reported by the places API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasStation {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl GasStation {
    /// Build a station from its name and the parsed parts of its address.
    pub fn new(name: impl Into<String>, parts: AddressParts) -> Self {
        Self {
            name: name.into(),
            address: parts.street,
            city: parts.city,
            state: parts.state,
            zip: parts.zip,
        }
    }

    /// The five CSV fields of this station, in column order.
    pub fn fields(&self) -> [&str; 5] {
        [&self.name, &self.address, &self.city, &self.state, &self.zip]
    }
}

/// Components of a US street address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressParts {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Split a formatted address such as
/// `"9988 Wilshire Blvd, Beverly Hills, CA 90212, USA"` into its parts.
///
/// `fallback_zip` is used when the address carries no recognisable ZIP.
pub fn parse_address(full_address: &str, fallback_zip: ZipCode) -> AddressParts {
    let full_address = full_address.trim();

    if full_address.is_empty() {
        return AddressParts {
            street: ADDRESS_NOT_AVAILABLE.to_string(),
            city: UNKNOWN.to_string(),
            state: UNKNOWN.to_string(),
            zip: fallback_zip.to_string(),
        };
    }

    let parts: Vec<&str> = full_address.split(',').map(str::trim).collect();

    if parts.len() < 3 {
        return AddressParts {
            street: parts[0].to_string(),
            city: UNKNOWN.to_string(),
            state: UNKNOWN.to_string(),
            zip: fallback_zip.to_string(),
        };
    }

    let state_zip = parts[2..].iter().find_map(|part| STATE_ZIP.captures(part));

    let (state, zip) = match state_zip {
        Some(caps) => (caps[1].to_string(), caps[2].to_string()),
        None => {
            let state = parts[2]
                .split_whitespace()
                .next()
                .unwrap_or(UNKNOWN)
                .to_string();
            (state, fallback_zip.to_string())
        }
    };

    AddressParts {
        street: parts[0].to_string(),
        city: parts[1].to_string(),
        state,
        zip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zip(s: &str) -> ZipCode {
        ZipCode::parse(s).unwrap()
    }

    #[test]
    fn parse_full_us_address() {
        let parts = parse_address(
            "9988 Wilshire Blvd, Beverly Hills, CA 90212, USA",
            zip("90210"),
        );
        assert_eq!(parts.street, "9988 Wilshire Blvd");
        assert_eq!(parts.city, "Beverly Hills");
        assert_eq!(parts.state, "CA");
        assert_eq!(parts.zip, "90212");
    }

    #[test]
    fn parse_address_with_zip_plus_four() {
        let parts = parse_address("1 Main St, Houston, TX 77002-1234, USA", zip("77001"));
        assert_eq!(parts.state, "TX");
        assert_eq!(parts.zip, "77002");
    }

    #[test]
    fn parse_address_without_zip_uses_fallback() {
        let parts = parse_address("1 Main St, Springfield, IL, USA", zip("62701"));
        assert_eq!(parts.street, "1 Main St");
        assert_eq!(parts.city, "Springfield");
        assert_eq!(parts.state, "IL");
        assert_eq!(parts.zip, "62701");
    }

    #[test]
    fn parse_empty_address() {
        let parts = parse_address("  ", zip("10001"));
        assert_eq!(parts.street, ADDRESS_NOT_AVAILABLE);
        assert_eq!(parts.city, UNKNOWN);
        assert_eq!(parts.state, UNKNOWN);
        assert_eq!(parts.zip, "10001");
    }

    #[test]
    fn parse_short_address() {
        let parts = parse_address("123 Route 66, Flagstaff", zip("86001"));
        assert_eq!(parts.street, "123 Route 66");
        assert_eq!(parts.city, UNKNOWN);
        assert_eq!(parts.state, UNKNOWN);
        assert_eq!(parts.zip, "86001");
    }

    #[test]
    fn station_fields_in_column_order() {
        let station = GasStation::new(
            "Shell",
            parse_address("1 Main St, Chicago, IL 60601, USA", zip("60601")),
        );
        assert_eq!(
            station.fields(),
            ["Shell", "1 Main St", "Chicago", "IL", "60601"]
        );
    }
}
