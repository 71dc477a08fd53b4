use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    FIRST_DAY, ParseError, RANGE_SEPARATOR, input::parse_iso_date, period::Period, prelude::*,
};

/// An inclusive range of calendar days.
/// The start date is always less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: NaiveDate,
    end:   NaiveDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// Minimum date is after maximum date.
    #[error("Invalid bounds: min ({min}) is after max ({max})")]
    InvalidBounds { min: NaiveDate, max: NaiveDate },

    /// Error parsing date component.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range from two dates given in any order
    pub fn from_unordered(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            start: a.min(b),
            end:   a.max(b),
        }
    }

    /// A range covering exactly one day
    pub const fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end:   date,
        }
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// Whether start and end fall on the same day
    pub fn is_single_day(&self) -> bool {
        self.start == self.end
    }

    /// Number of days covered, counting both ends
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether `date` lies strictly between start and end
    pub fn strictly_contains(&self, date: NaiveDate) -> bool {
        self.start < date && date < self.end
    }

    /// Whether the range starts on the first of a month and ends on the
    /// last day of a month.
    pub fn is_month_aligned(&self) -> bool {
        self.start.day() == FIRST_DAY && self.end.succ_opt().is_none_or(|next| next.day() == FIRST_DAY)
    }

    /// The span of this range, in months when month-aligned and days otherwise
    pub fn period(&self) -> Period {
        Period::of(self)
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    /// Parses `YYYY-MM-DD/YYYY-MM-DD`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = parse_endpoint(start_str.trim())?;
                let end = parse_endpoint(end_str.trim())?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

/// Reads one end of a range. Years outside 0000-9999 are written by chrono
/// with a sign (`+10000-01-05`) and are read back the same way.
fn parse_endpoint(s: &str) -> Result<NaiveDate, ParseError> {
    parse_iso_date(s).or_else(|err| s.parse::<NaiveDate>().map_err(|_| err))
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
