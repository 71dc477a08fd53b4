//! Text boundary for date inputs.
//!
//! Inputs hold dates as `MM/DD/YYYY`. A value only becomes a date once the
//! whole string has that exact shape and names a real day; anything else is
//! rejected so callers can leave their state untouched.

use chrono::NaiveDate;

use crate::{DATE_SEPARATOR, INPUT_DATE_FORMAT, MONTH_FIRST_SEPARATOR, ParseError};

const MONTH_DIGITS: usize = 2;
const DAY_DIGITS: usize = 2;
const YEAR_DIGITS: usize = 4;

/// Parses a date typed into a text input.
///
/// Accepts month-first `MM/DD/YYYY` and ISO `YYYY-MM-DD`. Every component must
/// have its full digit count, so partially typed values such as `6/1/2015`
/// are rejected rather than guessed at.
///
/// # Errors
/// Returns `ParseError::EmptyInput` for blank text, `ParseError::InvalidFormat`
/// for the wrong shape and `ParseError::InvalidMonth` / `ParseError::InvalidDay`
/// for well-formed text naming a date that does not exist.
pub fn parse_input_date(s: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let has_hyphen = trimmed.contains(DATE_SEPARATOR);
    let has_slash = trimmed.contains(MONTH_FIRST_SEPARATOR);

    match (has_hyphen, has_slash) {
        (true, true) => Err(ParseError::InvalidFormat(format!(
            "Mixed delimiters ({DATE_SEPARATOR} and {MONTH_FIRST_SEPARATOR})"
        ))),
        (true, false) => parse_iso_date(trimmed),
        (false, true) => parse_month_first(trimmed),
        (false, false) => Err(ParseError::InvalidFormat(trimmed.to_owned())),
    }
}

/// Renders a date the way text inputs display it
pub fn format_input_date(date: NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

/// Parses `YYYY-MM-DD`
pub(crate) fn parse_iso_date(s: &str) -> Result<NaiveDate, ParseError> {
    let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    };

    let year = parse_component(year, YEAR_DIGITS)?;
    let month = parse_component(month, MONTH_DIGITS)?;
    let day = parse_component(day, DAY_DIGITS)?;

    build_date(year, month, day)
}

fn parse_month_first(s: &str) -> Result<NaiveDate, ParseError> {
    let parts: Vec<&str> = s.split(MONTH_FIRST_SEPARATOR).collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(ParseError::InvalidFormat(format!(
            "Expected MM{MONTH_FIRST_SEPARATOR}DD{MONTH_FIRST_SEPARATOR}YYYY, found {s}"
        )));
    };

    let month = parse_component(month, MONTH_DIGITS)?;
    let day = parse_component(day, DAY_DIGITS)?;
    let year = parse_component(year, YEAR_DIGITS)?;

    build_date(year, month, day)
}

/// Parses a fixed-width, all-digit component
fn parse_component(s: &str, digits: usize) -> Result<u32, ParseError> {
    if s.len() != digits || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<u32>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

fn build_date(year: u32, month: u32, day: u32) -> Result<NaiveDate, ParseError> {
    // Four digits always fit in an i32.
    let year = i32::try_from(year).map_err(|_| ParseError::InvalidFormat(year.to_string()))?;
    if !(1..=12).contains(&month) {
        return Err(ParseError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::InvalidDay { year, month, day })
}
