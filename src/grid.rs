//! Month grids: the weeks a calendar renders for its anchor month.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;

use crate::{AnchorMonth, Bounds, DAYS_PER_WEEK, Selection};

/// One rendered day and everything the UI needs to style it.
///
/// Plain data: the flags are computed when the grid is built and the day
/// holds no reference back to the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDay {
    pub date:            NaiveDate,
    pub is_today:        bool,
    pub is_selected:     bool,
    pub is_start_date:   bool,
    pub is_end_date:     bool,
    pub is_in_range:     bool,
    pub is_disabled:     bool,
    pub is_not_in_month: bool,
}

impl CalendarDay {
    /// Computes the flags for `date` against the given calendar state
    pub fn new(
        date: NaiveDate,
        month: AnchorMonth,
        selection: &Selection,
        bounds: &Bounds,
        today: NaiveDate,
    ) -> Self {
        Self {
            date,
            is_today: date == today,
            is_selected: selection.is_selected(date),
            is_start_date: selection.is_start_date(date),
            is_end_date: selection.is_end_date(date),
            is_in_range: selection.is_in_range(date),
            is_disabled: bounds.is_disabled(date),
            is_not_in_month: !month.contains(date),
        }
    }

    /// Label shown in the cell
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }
}

pub type Week = [CalendarDay; DAYS_PER_WEEK];

/// Whole weeks covering an anchor month, padded with days of the
/// neighbouring months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    month: AnchorMonth,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// Lays out `month` starting each row on `week_start`.
    ///
    /// The first row holds the 1st of the month and the last row holds its
    /// last day.
    pub fn build(
        month: AnchorMonth,
        selection: &Selection,
        bounds: &Bounds,
        today: NaiveDate,
        week_start: Weekday,
    ) -> Self {
        let first = month.first_day();
        let lead = days_from_week_start(first.weekday(), week_start);
        let total = lead + month.len() as usize;
        let week_count = total.div_ceil(DAYS_PER_WEEK);

        // The anchor year is bounded, so a few days either side stays in range.
        let grid_start = first - Days::new(lead as u64);

        let weeks = (0..week_count)
            .map(|week| {
                std::array::from_fn(|weekday| {
                    let offset = (week * DAYS_PER_WEEK + weekday) as u64;
                    CalendarDay::new(grid_start + Days::new(offset), month, selection, bounds, today)
                })
            })
            .collect();

        Self { month, weeks }
    }

    pub const fn month(&self) -> AnchorMonth {
        self.month
    }

    /// Header text such as "June 2015"
    pub fn title(&self) -> String {
        self.month.title()
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Every day in display order
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten()
    }

    /// The cell for `date`, if the grid shows it
    pub fn day(&self, date: NaiveDate) -> Option<&CalendarDay> {
        self.days().find(|day| day.date == date)
    }
}

/// Single-letter weekday names in grid column order, e.g. `S M T W T F S`
pub fn weekday_initials(week_start: Weekday) -> [char; DAYS_PER_WEEK] {
    let mut weekday = week_start;
    std::array::from_fn(|_| {
        let initial = weekday_initial(weekday);
        weekday = weekday.succ();
        initial
    })
}

const fn weekday_initial(weekday: Weekday) -> char {
    match weekday {
        Weekday::Mon => 'M',
        Weekday::Tue | Weekday::Thu => 'T',
        Weekday::Wed => 'W',
        Weekday::Fri => 'F',
        Weekday::Sat | Weekday::Sun => 'S',
    }
}

/// How many days `weekday` lies after `week_start` (0..7)
pub(crate) fn days_from_week_start(weekday: Weekday, week_start: Weekday) -> usize {
    let from = weekday.num_days_from_monday() as usize;
    let start = week_start.num_days_from_monday() as usize;
    (from + DAYS_PER_WEEK - start) % DAYS_PER_WEEK
}
