//! Timestamp formatting for receipts, catalog cards and verification details.

#[cfg(test)]
#[path = "timefmt_test.rs"]
mod timefmt_test;

use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// `15/03/2025 10:12:49`
#[must_use]
pub fn format_timestamp(at: OffsetDateTime) -> String {
    at.format(format_description!("[day]/[month]/[year] [hour]:[minute]:[second]"))
        .unwrap_or_default()
}

/// `15/03/2025`
#[must_use]
pub fn format_date(date: Date) -> String {
    date.format(format_description!("[day]/[month]/[year]"))
        .unwrap_or_default()
}

/// Current wall-clock time. In the browser this reads `Date.now()`.
#[must_use]
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
