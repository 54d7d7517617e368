//! Release-date parsing for the `"<day> <Mon>, <year>"` page format.

use chrono::{TimeZone, Utc};
use thiserror::Error;

/// Month abbreviations as they appear on store pages, 1-indexed.
/// Matching is case-sensitive on the first three bytes of the token, so
/// `"March,"` matches but `"march,"` does not.
const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("expected '<day> <Mon>, <year>', got {0:?}")]
    TooFewTokens(String),
    #[error("unknown month abbreviation: {0:?}")]
    UnknownMonth(String),
    #[error("invalid number in date token: {0:?}")]
    InvalidNumber(String),
    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Parse a human-formatted release date into a Unix epoch at UTC midnight.
///
/// Failures are reported as errors rather than a 0 sentinel, so a genuine
/// `"1 Jan, 1970"` (epoch 0) stays distinguishable from "could not parse".
pub fn parse_release_date(text: &str) -> Result<i64, DateError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(DateError::TooFewTokens(text.to_string()));
    }

    let day: u32 = tokens[0]
        .parse()
        .map_err(|_| DateError::InvalidNumber(tokens[0].to_string()))?;
    let month = month_number(tokens[1])?;
    let year: i32 = tokens[2]
        .parse()
        .map_err(|_| DateError::InvalidNumber(tokens[2].to_string()))?;

    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .map(|dt| dt.timestamp())
        .ok_or(DateError::InvalidDate { year, month, day })
}

/// Match the first three bytes of a month token against the fixed table.
fn month_number(token: &str) -> Result<u32, DateError> {
    let prefix = token
        .get(..3)
        .ok_or_else(|| DateError::UnknownMonth(token.to_string()))?;
    MONTH_ABBREVS
        .iter()
        .position(|m| *m == prefix)
        .map(|i| i as u32 + 1)
        .ok_or_else(|| DateError::UnknownMonth(token.to_string()))
}
