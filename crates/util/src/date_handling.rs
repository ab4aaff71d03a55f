//! # Date Handling Utilities
//!
//! Formatting of comment timestamps for display. Timestamps are stored in
//! UTC and shown as `YYYY-MM-DD HH:MM` in the reader's local zone.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Display pattern shared by every timestamp in the portal.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Formats a UTC timestamp in the given zone.
///
/// # Example
/// ```rust
/// use chrono::{FixedOffset, TimeZone, Utc};
/// use opn_docs_util::date_handling::format_timestamp;
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
/// assert_eq!(format_timestamp(&at, &Utc), "2024-03-01 23:30");
///
/// let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
/// assert_eq!(format_timestamp(&at, &tokyo), "2024-03-02 08:30");
/// ```
pub fn format_timestamp<Tz>(timestamp: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    timestamp.with_timezone(zone).format(TIMESTAMP_FORMAT).to_string()
}

/// Formats a UTC timestamp in the machine's local zone.
pub fn format_local_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_timestamp(timestamp, &Local)
}
