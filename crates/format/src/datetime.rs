//! Timestamp rendering for the dashboard.
//!
//! The original platform renders in the id-ID locale from Western Indonesian
//! Time; the same rendering is reproduced here with a fixed UTC+7 offset so
//! output never depends on the host timezone.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};

/// Indonesian month abbreviations, January first.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

const WIB_UTC_OFFSET_HOURS: i64 = 7;

/// Render an instant as `DD Mon YYYY, HH.MM` (24-hour, WIB).
///
/// This is the `updatedAt` display format; id-ID separates hour and minute
/// with a period.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    let wib = instant + Duration::hours(WIB_UTC_OFFSET_HOURS);
    format!(
        "{:02} {} {}, {:02}.{:02}",
        wib.day(),
        MONTHS[wib.month0() as usize],
        wib.year(),
        wib.hour(),
        wib.minute(),
    )
}

/// Render the current instant as `DD Mon YYYY, HH.MM`.
///
/// Callers that need determinism pass their own instant to
/// [`format_timestamp`] instead.
pub fn format_now() -> String {
    format_timestamp(Utc::now())
}
