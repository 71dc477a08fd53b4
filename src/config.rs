use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{Bounds, DateRange, RangeError, Selection, SelectionMode};

/// Settings a calendar is created with.
///
/// Every field is optional when deserializing; missing fields take their
/// defaults (single-date mode, no bounds, weeks starting on Sunday, nothing
/// selected).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Pick start/end ranges instead of single dates
    pub range_mode: bool,
    /// Earliest pickable day
    pub min_date:   Option<NaiveDate>,
    /// Latest pickable day
    pub max_date:   Option<NaiveDate>,
    /// First column of the grid
    pub week_start: Weekday,
    /// Initially selected date, or range start
    pub start_date: Option<NaiveDate>,
    /// Initial range end; ignored outside range mode
    pub end_date:   Option<NaiveDate>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            range_mode: false,
            min_date:   None,
            max_date:   None,
            week_start: Weekday::Sun,
            start_date: None,
            end_date:   None,
        }
    }
}

impl CalendarConfig {
    pub fn range_mode(mut self, range_mode: bool) -> Self {
        self.range_mode = range_mode;
        self
    }

    pub fn min_date(mut self, date: NaiveDate) -> Self {
        self.min_date = Some(date);
        self
    }

    pub fn max_date(mut self, date: NaiveDate) -> Self {
        self.max_date = Some(date);
        self
    }

    pub fn week_start(mut self, weekday: Weekday) -> Self {
        self.week_start = weekday;
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub const fn mode(&self) -> SelectionMode {
        SelectionMode::from_range_flag(self.range_mode)
    }

    /// Validated pickable window
    ///
    /// # Errors
    /// Returns `RangeError::InvalidBounds` if `min_date` is after `max_date`.
    pub fn bounds(&self) -> Result<Bounds, RangeError> {
        Bounds::new(self.min_date, self.max_date)
    }

    /// Initial selection described by `start_date` / `end_date`.
    ///
    /// In range mode a lone `end_date` selects that one day. Outside range
    /// mode `end_date` is ignored.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if, in range mode, `start_date` is after `end_date`.
    pub fn selection(&self) -> Result<Selection, RangeError> {
        let selection = match (self.mode(), self.start_date, self.end_date) {
            (SelectionMode::Single, None, _) | (SelectionMode::Range, None, None) => Selection::None,
            (SelectionMode::Single, Some(start), _) => Selection::Single(start),
            (SelectionMode::Range, Some(day), None) | (SelectionMode::Range, None, Some(day)) => {
                Selection::Range(DateRange::single_day(day))
            },
            (SelectionMode::Range, Some(start), Some(end)) => Selection::Range(DateRange::new(start, end)?),
        };
        Ok(selection)
    }
}
