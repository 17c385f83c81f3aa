//! US ZIP code types and extraction from free text.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of ZIP codes processed from a single message.
pub const MAX_ZIPS_PER_MESSAGE: usize = 10;

/// Digit runs on word boundaries, with an optional ZIP+4 suffix.
static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([0-9]+)(?:-[0-9]{4})?\b").expect("digit run pattern is valid")
});

/// Error returned when parsing an invalid ZIP code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ZIP code: {reason}")]
pub struct InvalidZip {
    reason: &'static str,
}

/// A valid 5-digit US ZIP code.
///
/// ZIP codes are always 5 ASCII digits. This type guarantees that any
/// `ZipCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use gas_station_bot::domain::ZipCode;
///
/// let zip = ZipCode::parse("90210").unwrap();
/// assert_eq!(zip.as_str(), "90210");
///
/// // Wrong length is rejected
/// assert!(ZipCode::parse("9021").is_err());
/// assert!(ZipCode::parse("902101").is_err());
///
/// // Non-digits are rejected
/// assert!(ZipCode::parse("9021O").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZipCode([u8; 5]);

impl ZipCode {
    /// Parse a ZIP code from a string.
    ///
    /// The input must be exactly 5 ASCII digits (0-9).
    pub fn parse(s: &str) -> Result<Self, InvalidZip> {
        let bytes = s.as_bytes();

        if bytes.len() != 5 {
            return Err(InvalidZip {
                reason: "must be exactly 5 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(InvalidZip {
                reason: "must be ASCII digits 0-9",
            });
        }

        Ok(ZipCode([bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]]))
    }

    /// Returns the ZIP code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ZipCode({})", self.as_str())
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ZIP codes found in a user message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZipExtraction {
    /// Valid, unique ZIP codes in first-occurrence order, capped at
    /// [`MAX_ZIPS_PER_MESSAGE`].
    pub zips: Vec<ZipCode>,

    /// Numeric tokens that look like an attempt at a ZIP but have the
    /// wrong length.
    pub rejected: Vec<String>,

    /// Number of valid unique ZIPs left out because of the cap.
    pub dropped: usize,
}

impl ZipExtraction {
    /// True if no valid ZIP code was found.
    pub fn is_empty(&self) -> bool {
        self.zips.is_empty()
    }
}

/// Extract US ZIP codes from free text.
///
/// Duplicates are removed while preserving the order in which they first
/// appear. Only the first [`MAX_ZIPS_PER_MESSAGE`] unique codes are kept.
pub fn extract_zip_codes(text: &str) -> ZipExtraction {
    let mut seen = HashSet::new();
    let mut extraction = ZipExtraction::default();

    for caps in DIGIT_RUN.captures_iter(text.trim()) {
        let Some(run) = caps.get(1) else {
            continue;
        };

        match ZipCode::parse(run.as_str()) {
            Ok(zip) => {
                if !seen.insert(zip) {
                    continue;
                }
                if extraction.zips.len() < MAX_ZIPS_PER_MESSAGE {
                    extraction.zips.push(zip);
                } else {
                    extraction.dropped += 1;
                }
            }
            Err(_) => extraction.rejected.push(run.as_str().to_string()),
        }
    }

    extraction
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[0-9]{5}") {
            let zip = ZipCode::parse(&s).unwrap();
            prop_assert_eq!(zip.as_str(), s.as_str());
        }

        /// Wrong-length digit strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[0-9]{0,4}|[0-9]{6,12}") {
            prop_assert!(ZipCode::parse(&s).is_err());
        }

        /// Strings with a letter are rejected
        #[test]
        fn letters_rejected(
            s in "[0-9A-Za-z]{5}"
                .prop_filter("has letter", |s| s.chars().any(|c| c.is_ascii_alphabetic()))
        ) {
            prop_assert!(ZipCode::parse(&s).is_err());
        }

        /// Extraction never yields duplicates or more than the cap
        #[test]
        fn extraction_unique_and_bounded(codes in proptest::collection::vec("[0-9]{5}", 0..30)) {
            let extraction = extract_zip_codes(&codes.join(" "));
            let unique: HashSet<_> = extraction.zips.iter().collect();
            prop_assert_eq!(unique.len(), extraction.zips.len());
            prop_assert!(extraction.zips.len() <= MAX_ZIPS_PER_MESSAGE);
        }
    }
}
