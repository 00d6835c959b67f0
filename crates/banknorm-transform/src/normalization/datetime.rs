//! Date parsing against ordered chrono format candidates.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::trace;

/// Parses `value` with each format in order; the first success wins.
///
/// Every format is tried as a plain date first and then as a date-time, in
/// which case the time of day is discarded. Returns `None` when no format
/// matches or `formats` is empty.
pub fn parse_date_with_formats<S: AsRef<str>>(value: &str, formats: &[S]) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    formats.iter().find_map(|format| {
        let parsed = parse_with_format(value, format.as_ref());
        if parsed.is_some() {
            trace!(value, format = format.as_ref(), "date format matched");
        }
        parsed
    })
}

fn parse_with_format(value: &str, format: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, format).ok().or_else(|| {
        NaiveDateTime::parse_from_str(value, format)
            .ok()
            .map(|datetime| datetime.date())
    })
}
