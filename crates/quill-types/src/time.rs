use chrono::{SecondsFormat, Utc};

/// Current UTC time as an ISO 8601 string with millisecond precision,
/// e.g. `2024-05-01T12:30:45.123Z`. Timestamps are stored and compared
/// as opaque strings, so every writer must go through this one format.
pub fn iso_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
