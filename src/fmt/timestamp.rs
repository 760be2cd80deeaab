//! Line timestamps: UTC, RFC 3339, whole seconds.

use chrono::{DateTime, SecondsFormat, Utc};

/// The current instant, formatted for the `[<timestamp>]` column.
#[must_use]
pub fn now() -> String {
    format_timestamp(Utc::now())
}

/// `2024-01-02T15:04:05Z`: no fractional seconds, `Z` rather than `+00:00`.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
