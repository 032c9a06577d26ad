//! Argument validators
//!
//! Value parsers shared by the subcommands. Each maps a raw string to a typed
//! value or a [`ValidationError`], which clap reports as an invalid argument
//! before any request is made.

use crate::error::ValidationError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::path::PathBuf;

/// Accept a path only if it exists
pub fn path(value: &str) -> Result<PathBuf, ValidationError> {
    let path = PathBuf::from(value);
    if path.exists() {
        Ok(path)
    } else {
        Err(ValidationError::PathNotFound(value.to_string()))
    }
}

/// Normalize a two-letter country code to uppercase
pub fn country_code(value: &str) -> Result<String, ValidationError> {
    let code = value.trim();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(ValidationError::InvalidCountryCode(value.to_string()))
    }
}

/// Parse `"1, 2,3"` into `[1, 2, 3]`
pub fn comma_separated_integers(value: &str) -> Result<Vec<i64>, ValidationError> {
    value
        .split(',')
        .map(|token| token.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ValidationError::InvalidIntegerList(value.to_string()))
}

/// Parse a date with an optional time of day
///
/// Accepts `YYYY-M-D` followed optionally by `T` or a space and `H`, `H:M`
/// or `H:M:S`. RFC 3339 strings are also accepted and converted to UTC.
pub fn datetime(value: &str) -> Result<NaiveDateTime, ValidationError> {
    let invalid = || ValidationError::InvalidDateTime(value.to_string());
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_utc());
    }

    let (date_part, time_part) = match trimmed.find(|c: char| c == 'T' || c == ' ') {
        Some(i) => (&trimmed[..i], Some(&trimmed[i + 1..])),
        None => (trimmed, None),
    };

    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| invalid())?;

    let [hour, minute, second] = match time_part {
        Some(time) => parse_clock(time).ok_or_else(invalid)?,
        None => [0, 0, 0],
    };

    date.and_hms_opt(hour, minute, second).ok_or_else(invalid)
}

/// `H`, `H:M` or `H:M:S`, digits only
fn parse_clock(time: &str) -> Option<[u32; 3]> {
    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() > 3 {
        return None;
    }

    let mut clock = [0u32; 3];
    for (slot, part) in clock.iter_mut().zip(&parts) {
        if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = part.parse().ok()?;
    }
    Some(clock)
}

/// Build a parser accepting integers in `[min, max]`
pub fn integer_range(
    min: i64,
    max: i64,
) -> impl Fn(&str) -> Result<i64, ValidationError> + Clone + Send + Sync + 'static {
    move |value: &str| {
        let parsed: i64 = value
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidInteger(value.to_string()))?;

        if (min..=max).contains(&parsed) {
            Ok(parsed)
        } else {
            Err(ValidationError::OutOfRange {
                value: parsed,
                min,
                max,
            })
        }
    }
}
