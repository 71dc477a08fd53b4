//! Shared constructors for unit tests.

use chrono::NaiveDate;

use crate::{AnchorMonth, DateRange};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid test date {year}-{month:02}-{day:02}"))
}

pub fn anchor(year: i32, month: u32) -> AnchorMonth {
    AnchorMonth::new(year, month).unwrap_or_else(|err| panic!("invalid test month: {err}"))
}

pub fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
    DateRange::new(start, end).unwrap_or_else(|err| panic!("invalid test range: {err}"))
}
