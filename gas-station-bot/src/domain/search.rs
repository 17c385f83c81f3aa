//! Results of searching a batch of ZIP codes.

use std::sync::Arc;

use super::{GasStation, ZipCode};

/// What happened for one ZIP.
#[derive(Debug, Clone, PartialEq)]
pub enum ZipOutcome {
    /// Stations in API order (possibly none).
    Found(Arc<Vec<GasStation>>),
    /// The lookup failed; the ZIP is skipped.
    Failed(String),
}

/// The outcome for a single ZIP.
#[derive(Debug, Clone, PartialEq)]
pub struct ZipResult {
    pub zip: ZipCode,
    pub outcome: ZipOutcome,
}

impl ZipResult {
    /// Stations found for this ZIP; empty if the lookup failed.
    pub fn stations(&self) -> &[GasStation] {
        match &self.outcome {
            ZipOutcome::Found(stations) => stations.as_slice(),
            ZipOutcome::Failed(_) => &[],
        }
    }

    /// The failure reason, if the lookup failed.
    pub fn failure(&self) -> Option<&str> {
        match &self.outcome {
            ZipOutcome::Found(_) => None,
            ZipOutcome::Failed(reason) => Some(reason),
        }
    }
}

/// Results for every ZIP of a message, in user-input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub results: Vec<ZipResult>,
}

impl SearchOutcome {
    /// All stations across all ZIPs, ZIPs in input order.
    pub fn stations(&self) -> impl Iterator<Item = &GasStation> {
        self.results.iter().flat_map(|r| r.stations())
    }

    /// Total number of stations found.
    pub fn total_stations(&self) -> usize {
        self.results.iter().map(|r| r.stations().len()).sum()
    }

    /// ZIPs whose lookup failed, with the reason.
    pub fn failures(&self) -> impl Iterator<Item = (ZipCode, &str)> {
        self.results
            .iter()
            .filter_map(|r| r.failure().map(|reason| (r.zip, reason)))
    }

    /// The searched ZIPs, in input order.
    pub fn zips(&self) -> Vec<ZipCode> {
        self.results.iter().map(|r| r.zip).collect()
    }
}
