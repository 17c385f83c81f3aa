//! Domain types for the gas station finder.
//!
//! ZIP codes are validated at construction time, so code that receives a
//! `ZipCode` can trust it is exactly five digits.

mod search;
mod station;
mod zip;

pub use search::{SearchOutcome, ZipOutcome, ZipResult};
pub use station::{
    ADDRESS_NOT_AVAILABLE, AddressParts, GasStation, MAX_STATIONS_PER_ZIP, UNKNOWN, parse_address,
};
pub use zip::{InvalidZip, MAX_ZIPS_PER_MESSAGE, ZipCode, ZipExtraction, extract_zip_codes};
