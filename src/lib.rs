//! Framework-independent core for date pickers, date calendars and date
//! range calendars.
//!
//! The host UI owns rendering and event dispatch. This crate owns the state
//! behind it: which month is displayed, what is selected, which days are
//! disabled, and which quick-select preset (if any) matches the selection.
//!
//! ```
//! use chrono::NaiveDate;
//! use range_calendar::{Calendar, CalendarConfig, FixedClock, Selection};
//!
//! let today = NaiveDate::from_ymd_opt(2015, 6, 10).unwrap_or_default();
//! let mut calendar =
//!     Calendar::with_clock(CalendarConfig::default().range_mode(true), FixedClock(today))
//!         .unwrap_or_else(|err| panic!("{err}"));
//!
//! let fifteenth = NaiveDate::from_ymd_opt(2015, 6, 15).unwrap_or_default();
//! let twenty_first = NaiveDate::from_ymd_opt(2015, 6, 21).unwrap_or_default();
//! calendar.pick(fifteenth);
//! calendar.pick(twenty_first);
//!
//! assert_eq!(calendar.selection().bounds(), Some((fifteenth, twenty_first)));
//! assert_eq!(calendar.grid().title(), "June 2015");
//! ```

mod calendar;
mod clock;
mod config;
mod consts;
mod grid;
mod input;
mod period;
mod prelude;
mod preset;
mod range;
mod selection;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::{Calendar, ListenerId};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::CalendarConfig;
pub use consts::*;
pub use grid::{CalendarDay, MonthGrid, Week, weekday_initials};
pub use input::{format_input_date, parse_input_date};
pub use period::{Direction, Period, PeriodUnit};
pub use preset::{Preset, active_preset};
pub use range::{DateRange, RangeError};
pub use selection::{Selection, SelectionMode};
pub use types::{AnchorMonth, Bounds};

use crate::prelude::*;

/// Errors produced while turning text or raw numbers into calendar values.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u32),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
