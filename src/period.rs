use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{DateRange, FIRST_DAY, prelude::*};

/// Unit a period is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodUnit {
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "months")]
    Months,
}

/// Which way to move a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// The inclusive length of a range, used to step the whole range by its own size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{count} {unit}")]
pub struct Period {
    count: u32,
    unit:  PeriodUnit,
}

impl Period {
    pub const fn days(count: u32) -> Self {
        Self {
            count,
            unit: PeriodUnit::Days,
        }
    }

    pub const fn months(count: u32) -> Self {
        Self {
            count,
            unit: PeriodUnit::Months,
        }
    }

    /// Measures `range`: whole months when it is month-aligned, days otherwise.
    /// Both ends are counted.
    pub fn of(range: &DateRange) -> Self {
        if range.is_month_aligned() {
            let (start, end) = range.dates();
            let months = month_index(end) - month_index(start) + 1;
            Self::months(u32::try_from(months).unwrap_or(u32::MAX))
        } else {
            Self::days(u32::try_from(range.num_days()).unwrap_or(u32::MAX))
        }
    }

    pub const fn count(&self) -> u32 {
        self.count
    }

    pub const fn unit(&self) -> PeriodUnit {
        self.unit
    }

    /// Moves both ends of `range` by this period.
    ///
    /// Month periods snap the new end to the last day of its month, so a
    /// quarter stays a quarter even when the months differ in length.
    /// Returns `None` if the result would leave chrono's supported range.
    pub fn shift(&self, range: &DateRange, direction: Direction) -> Option<DateRange> {
        let (start, end) = range.dates();
        let (start, end) = match self.unit {
            PeriodUnit::Days => {
                let step = Days::new(u64::from(self.count));
                match direction {
                    Direction::Forward => (start.checked_add_days(step)?, end.checked_add_days(step)?),
                    Direction::Backward => (start.checked_sub_days(step)?, end.checked_sub_days(step)?),
                }
            },
            PeriodUnit::Months => {
                let step = Months::new(self.count);
                let end_month = end.with_day(FIRST_DAY)?;
                let (start, end_month) = match direction {
                    Direction::Forward => (start.checked_add_months(step)?, end_month.checked_add_months(step)?),
                    Direction::Backward => (start.checked_sub_months(step)?, end_month.checked_sub_months(step)?),
                };
                (start, last_day_of_month(end_month)?)
            },
        };

        DateRange::new(start, end).ok()
    }
}

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

pub(crate) fn last_day_of_month(first: NaiveDate) -> Option<NaiveDate> {
    first.checked_add_months(Months::new(1))?.pred_opt()
}
