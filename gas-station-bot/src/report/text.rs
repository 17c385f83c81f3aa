//! User-facing message texts for a search.
//!
//! Everything here is legacy Markdown. Values that come from users or from
//! the API go through [`escape_markdown`] and are kept outside `*bold*`
//! entities, where Telegram does not honour backslash escapes.

use std::fmt::Write;

use crate::domain::{MAX_ZIPS_PER_MESSAGE, SearchOutcome, ZipCode, ZipExtraction};

use super::markdown::escape_markdown;

/// ZIPs listed by name in the document caption before "+N more".
const CAPTION_ZIPS: usize = 5;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━";

fn join_zips(zips: &[ZipCode]) -> String {
    zips.iter()
        .map(ZipCode::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reply for a message that contains no valid ZIP code.
pub fn no_zip_codes_text(extraction: &ZipExtraction) -> String {
    let mut text = String::from("❌ *No valid ZIP codes found*\n\n");

    if !extraction.rejected.is_empty() {
        let rejected = extraction
            .rejected
            .iter()
            .map(|t| escape_markdown(t))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(text, "Not a 5-digit ZIP: {}\n", rejected);
    }

    let _ = write!(
        text,
        "🎯 *Examples:*\n\
         • `90210`\n\
         • `90210 10001 77001`\n\n\
         📝 *Tips:*\n\
         • Use 5-digit US ZIP codes\n\
         • Separate multiple ZIPs with spaces\n\
         • Maximum {} ZIP codes per request",
        MAX_ZIPS_PER_MESSAGE
    );
    text
}

/// Initial status message while a search starts.
pub fn searching_text(zips: &[ZipCode]) -> String {
    match zips {
        [zip] => format!("🔍 *Searching ZIP {}...*\n\n⚡ Finding gas stations...", zip),
        _ => format!(
            "🔍 *Searching {} ZIP codes...*\n\n📍 ZIPs: {}\n⚡ Finding gas stations...",
            zips.len(),
            join_zips(zips)
        ),
    }
}

/// Status update before each ZIP is looked up (`index` is 1-based).
pub fn processing_text(index: usize, total: usize, zip: ZipCode) -> String {
    format!(
        "🔍 *Processing... ({}/{})*\n\n📍 Current: ZIP {}\n⚡ Looking up gas stations...",
        index, total, zip
    )
}

/// Status update once lookups are done and the CSV is being built.
pub fn generating_text(total_stations: usize) -> String {
    format!(
        "📊 *Generating CSV file...*\n\n\
         ⛽ Found {} gas stations\n\
         💾 Creating horizontal CSV...",
        total_stations
    )
}

/// Status text when nothing was found for any ZIP.
pub fn no_stations_text(outcome: &SearchOutcome) -> String {
    let mut text = format!(
        "❌ *No gas stations found*\n\n📍 Searched: {}\n",
        join_zips(&outcome.zips())
    );
    push_failures(&mut text, outcome);
    text.push_str("\n💡 Try different ZIP codes");
    text
}

/// Status text when the CSV could not be delivered.
pub fn send_failed_text() -> String {
    "❌ *Sending the CSV file failed*\n\nPlease try again.".to_string()
}

/// Caption attached to the CSV document.
pub fn document_caption(outcome: &SearchOutcome) -> String {
    let zips = outcome.zips();
    let mut zip_list = join_zips(&zips[..zips.len().min(CAPTION_ZIPS)]);
    if zips.len() > CAPTION_ZIPS {
        let _ = write!(zip_list, " (+{} more)", zips.len() - CAPTION_ZIPS);
    }

    format!(
        "⛽ *Gas stations CSV*\n\n\
         📍 *ZIP codes:* {}\n\
         📊 *Total stations:* {}\n\
         💾 *Layout:* Seller Name1, Address1, City1, State1, Zip1, ...",
        zip_list,
        outcome.total_stations()
    )
}

/// Human-readable summary of every station found.
///
/// `dropped` is the number of ZIPs left out because of the per-message cap.
pub fn preview_text(outcome: &SearchOutcome, dropped: usize) -> String {
    let mut text = String::from("🎉 *Gas stations found!*\n\n");

    let _ = write!(
        text,
        "📊 *Summary:*\n🎯 ZIP codes: {}\n⛽ Total stations: {}\n\n{}\n\n",
        outcome.results.len(),
        outcome.total_stations(),
        RULE
    );

    let mut counter = 1;
    for result in &outcome.results {
        let stations = result.stations();
        let Some(first) = stations.first() else {
            continue;
        };

        let _ = writeln!(
            text,
            "📍 *ZIP {}* - {}, {}",
            result.zip,
            escape_markdown(&first.city),
            escape_markdown(&first.state)
        );

        for station in stations {
            let _ = write!(
                text,
                "  *{}.* {}\n     📌 {}\n     🏙️ {}, {} {}\n\n",
                counter,
                escape_markdown(&station.name),
                escape_markdown(&station.address),
                escape_markdown(&station.city),
                escape_markdown(&station.state),
                escape_markdown(&station.zip)
            );
            counter += 1;
        }
    }

    for result in &outcome.results {
        if result.failure().is_none() && result.stations().is_empty() {
            let _ = writeln!(text, "📭 ZIP {}: no gas stations nearby", result.zip);
        }
    }
    push_failures(&mut text, outcome);

    if dropped > 0 {
        let _ = writeln!(
            text,
            "✂️ {} more ZIP code(s) skipped (limit is {} per message)",
            dropped, MAX_ZIPS_PER_MESSAGE
        );
    }

    let _ = write!(
        text,
        "\n{}\n\n\
         💾 Download the CSV file above for the horizontal layout.\n\
         🔄 Send more ZIP codes to search again!",
        RULE
    );
    text
}

/// Append one notice line per failed ZIP.
fn push_failures(text: &mut String, outcome: &SearchOutcome) {
    for (zip, reason) in outcome.failures() {
        let _ = writeln!(text, "⚠️ ZIP {} skipped: {}", zip, escape_markdown(reason));
    }
}
