//! Horizontal CSV output.
//!
//! All stations go on a single data row, five columns per station:
//!
//! ```text
//! Seller Name1,Seller Address1,Seller City1,Seller State1,Seller Zip1,Seller Name2,...
//! Shell,1 Main St,Houston,TX,77001,Exxon,...
//! ```

use std::fmt::Write;

use crate::domain::{SearchOutcome, ZipCode};

/// Column labels repeated for every station.
const COLUMN_LABELS: [&str; 5] = [
    "Seller Name",
    "Seller Address",
    "Seller City",
    "Seller State",
    "Seller Zip",
];

/// Number of ZIPs that make it into a multi-ZIP file name.
const FILE_NAME_ZIPS: usize = 3;

/// Build the horizontal CSV for a search.
///
/// Stations are numbered across all ZIPs, in input order. The header has
/// exactly five columns per station found.
pub fn horizontal_csv(outcome: &SearchOutcome) -> String {
    let mut header = Vec::new();
    let mut row = Vec::new();

    for (i, station) in outcome.stations().enumerate() {
        for label in COLUMN_LABELS {
            header.push(format!("{}{}", label, i + 1));
        }
        row.extend(station.fields().into_iter().map(escape_csv));
    }

    let mut output = String::new();
    let _ = writeln!(output, "{}", header.join(","));
    let _ = writeln!(output, "{}", row.join(","));
    output
}

/// File name for the CSV attachment.
///
/// `gas_stations_90210.csv` for one ZIP; otherwise the first three ZIPs
/// joined with underscores.
pub fn csv_file_name(zips: &[ZipCode]) -> String {
    let joined = zips
        .iter()
        .take(FILE_NAME_ZIPS)
        .map(ZipCode::as_str)
        .collect::<Vec<_>>()
        .join("_");
    format!("gas_stations_{}.csv", joined)
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
