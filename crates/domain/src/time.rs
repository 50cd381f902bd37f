//! Time and timestamp helpers.

use chrono::{Local, NaiveDateTime, NaiveTime};

use crate::error::ConfigurationError;

/// Local wall-clock timestamp. Seasons and windows are defined in local
/// time, so no offset is carried.
pub type Timestamp = NaiveDateTime;

/// Return the current local time.
#[must_use]
pub fn now() -> Timestamp {
    Local::now().naive_local()
}

/// Parse a `HH:MM` time of day, naming `field` in the error.
///
/// # Errors
///
/// Returns [`ConfigurationError::InvalidTime`] when `value` is not a valid
/// 24-hour `HH:MM` time.
pub fn parse_time_of_day(field: &'static str, value: &str) -> Result<NaiveTime, ConfigurationError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|source| {
        ConfigurationError::InvalidTime {
            field,
            value: value.to_string(),
            source,
        }
    })
}
