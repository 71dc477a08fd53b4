//! Quick-select ranges such as "Last Quarter", resolved against today.

use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{
    DAYS_PER_WEEK, DateRange, FIRST_DAY, JANUARY, MONTHS_PER_QUARTER, ParseError, Selection,
    grid::days_from_week_start, period::last_day_of_month, prelude::*,
};

/// A named range relative to the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[display(fmt = "Today")]
    Today,
    #[display(fmt = "Yesterday")]
    Yesterday,
    #[display(fmt = "This Week")]
    ThisWeek,
    #[display(fmt = "Last Week")]
    LastWeek,
    #[display(fmt = "This Month")]
    ThisMonth,
    #[display(fmt = "Last Month")]
    LastMonth,
    #[display(fmt = "This Quarter")]
    ThisQuarter,
    #[display(fmt = "Last Quarter")]
    LastQuarter,
    #[display(fmt = "This Year")]
    ThisYear,
    #[display(fmt = "Last Year")]
    LastYear,
}

impl Preset {
    /// Every preset, in the order quick-select buttons list them
    pub const ALL: [Self; 10] = [
        Self::Today,
        Self::Yesterday,
        Self::ThisWeek,
        Self::LastWeek,
        Self::ThisMonth,
        Self::LastMonth,
        Self::ThisQuarter,
        Self::LastQuarter,
        Self::ThisYear,
        Self::LastYear,
    ];

    /// Machine name, as used by serde
    pub const fn name(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Yesterday => "yesterday",
            Self::ThisWeek => "this-week",
            Self::LastWeek => "last-week",
            Self::ThisMonth => "this-month",
            Self::LastMonth => "last-month",
            Self::ThisQuarter => "this-quarter",
            Self::LastQuarter => "last-quarter",
            Self::ThisYear => "this-year",
            Self::LastYear => "last-year",
        }
    }

    /// Whether the preset always resolves to a single day
    pub const fn is_single_day(self) -> bool {
        matches!(self, Self::Today | Self::Yesterday)
    }

    /// The concrete range for this preset when the current day is `today`.
    ///
    /// Returns `None` only at the edges of chrono's supported dates.
    pub fn resolve(self, today: NaiveDate, week_start: Weekday) -> Option<DateRange> {
        match self {
            Self::Today => Some(DateRange::single_day(today)),
            Self::Yesterday => today.pred_opt().map(DateRange::single_day),
            Self::ThisWeek => week_of(today, week_start),
            Self::LastWeek => week_of(today.checked_sub_days(Days::new(DAYS_PER_WEEK as u64))?, week_start),
            Self::ThisMonth => month_of(today),
            Self::LastMonth => month_of(today.with_day(FIRST_DAY)?.checked_sub_months(Months::new(1))?),
            Self::ThisQuarter => quarter_of(today),
            Self::LastQuarter => quarter_of(
                today
                    .with_day(FIRST_DAY)?
                    .checked_sub_months(Months::new(MONTHS_PER_QUARTER))?,
            ),
            Self::ThisYear => year_of(today.year()),
            Self::LastYear => year_of(today.year().checked_sub(1)?),
        }
    }

    /// Whether `selection` covers exactly this preset's range today
    pub fn matches(self, selection: &Selection, today: NaiveDate, week_start: Weekday) -> bool {
        match (selection.bounds(), self.resolve(today, week_start)) {
            (Some(bounds), Some(range)) => bounds == range.dates(),
            _ => false,
        }
    }
}

impl FromStr for Preset {
    type Err = ParseError;

    /// Accepts `this-week`, `this_week`, `thisWeek` or `This Week`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if normalized.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        Self::ALL
            .into_iter()
            .find(|preset| preset.name().replace('-', "") == normalized)
            .ok_or_else(|| ParseError::InvalidFormat(format!("Unknown preset: {}", s.trim())))
    }
}

/// The preset matching `selection` today, if any
pub fn active_preset(selection: &Selection, today: NaiveDate, week_start: Weekday) -> Option<Preset> {
    Preset::ALL
        .into_iter()
        .find(|preset| preset.matches(selection, today, week_start))
}

fn week_of(date: NaiveDate, week_start: Weekday) -> Option<DateRange> {
    let offset = days_from_week_start(date.weekday(), week_start) as u64;
    let start = date.checked_sub_days(Days::new(offset))?;
    let end = start.checked_add_days(Days::new(DAYS_PER_WEEK as u64 - 1))?;
    DateRange::new(start, end).ok()
}

fn month_of(date: NaiveDate) -> Option<DateRange> {
    let start = date.with_day(FIRST_DAY)?;
    DateRange::new(start, last_day_of_month(start)?).ok()
}

fn quarter_of(date: NaiveDate) -> Option<DateRange> {
    let first_month = date.month0() / MONTHS_PER_QUARTER * MONTHS_PER_QUARTER + 1;
    let start = NaiveDate::from_ymd_opt(date.year(), first_month, FIRST_DAY)?;
    let last_month = start.checked_add_months(Months::new(MONTHS_PER_QUARTER - 1))?;
    DateRange::new(start, last_day_of_month(last_month)?).ok()
}

fn year_of(year: i32) -> Option<DateRange> {
    let start = NaiveDate::from_ymd_opt(year, JANUARY, FIRST_DAY)?;
    let end = NaiveDate::from_ymd_opt(year.checked_add(1)?, JANUARY, FIRST_DAY)?.pred_opt()?;
    DateRange::new(start, end).ok()
}
