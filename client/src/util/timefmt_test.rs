use super::*;
use time::macros::{date, datetime};

#[test]
fn format_timestamp_uses_day_first_layout() {
    assert_eq!(format_timestamp(datetime!(2025-03-15 10:12:49 UTC)), "15/03/2025 10:12:49");
}

#[test]
fn format_timestamp_zero_pads() {
    assert_eq!(format_timestamp(datetime!(2025-01-02 03:04:05 UTC)), "02/01/2025 03:04:05");
}

#[test]
fn format_date_drops_time() {
    assert_eq!(format_date(date!(2025-04-01)), "01/04/2025");
}
