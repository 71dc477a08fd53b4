use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{DateRange, Period, prelude::*};

/// Whether picks choose one date or build a start/end range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Range,
}

impl SelectionMode {
    pub const fn from_range_flag(range_mode: bool) -> Self {
        if range_mode { Self::Range } else { Self::Single }
    }

    pub const fn is_range(self) -> bool {
        matches!(self, Self::Range)
    }
}

/// What is currently selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    #[default]
    #[display(fmt = "")]
    None,
    #[display(fmt = "{_0}")]
    Single(NaiveDate),
    #[display(fmt = "{_0}")]
    Range(DateRange),
}

impl Selection {
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Selected start date; a single selection starts and ends on its date
    pub const fn start(&self) -> Option<NaiveDate> {
        match self {
            Self::None => None,
            Self::Single(date) => Some(*date),
            Self::Range(range) => Some(range.start()),
        }
    }

    /// Selected end date; a single selection starts and ends on its date
    pub const fn end(&self) -> Option<NaiveDate> {
        match self {
            Self::None => None,
            Self::Single(date) => Some(*date),
            Self::Range(range) => Some(range.end()),
        }
    }

    /// `(start, end)`, the value change notifications are compared by
    pub const fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Self::None => None,
            Self::Single(date) => Some((*date, *date)),
            Self::Range(range) => Some(range.dates()),
        }
    }

    /// The selection as a range; a single date becomes a one-day range
    pub const fn as_range(&self) -> Option<DateRange> {
        match self {
            Self::None => None,
            Self::Single(date) => Some(DateRange::single_day(*date)),
            Self::Range(range) => Some(*range),
        }
    }

    /// Whether both selections cover the same days
    pub fn same_days(&self, other: &Self) -> bool {
        self.bounds() == other.bounds()
    }

    pub fn is_start_date(&self, date: NaiveDate) -> bool {
        matches!(self, Self::Range(range) if range.start() == date)
    }

    pub fn is_end_date(&self, date: NaiveDate) -> bool {
        matches!(self, Self::Range(range) if range.end() == date)
    }

    /// The picked date of a single selection, or either end of a range
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        match self {
            Self::None => false,
            Self::Single(selected) => *selected == date,
            Self::Range(_) => self.is_start_date(date) || self.is_end_date(date),
        }
    }

    /// Range endpoints and every day between them. Single selections have no range.
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        match self {
            Self::Range(range) => self.is_selected(date) || range.strictly_contains(date),
            Self::None | Self::Single(_) => false,
        }
    }

    /// Length of the selection, if anything is selected
    pub fn period(&self) -> Option<Period> {
        self.as_range().map(|range| range.period())
    }

    /// The selection after picking `date`.
    ///
    /// In single mode the pick replaces the selection. In range mode:
    /// - nothing selected, or a range already spanning two days: start a
    ///   fresh one-day range on `date`;
    /// - a one-day range: `date` becomes the start if earlier, otherwise the end.
    pub fn picked(self, date: NaiveDate, mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single(date),
            SelectionMode::Range => match self.as_range() {
                Some(range) if range.is_single_day() => {
                    Self::Range(DateRange::from_unordered(range.start(), date))
                },
                Some(_) | None => Self::Range(DateRange::single_day(date)),
            },
        }
    }

    /// Converts the selection to fit `mode`.
    /// Leaving range mode keeps only the start date.
    pub fn with_mode(self, mode: SelectionMode) -> Self {
        match (self, mode) {
            (Self::Range(range), SelectionMode::Single) => Self::Single(range.start()),
            (Self::Single(date), SelectionMode::Range) => Self::Range(DateRange::single_day(date)),
            (selection, _) => selection,
        }
    }

    /// Replaces the start date, keeping the end. The result is reordered if needed.
    pub fn with_start(self, start: NaiveDate) -> Self {
        match self.end() {
            Some(end) => Self::Range(DateRange::from_unordered(start, end)),
            None => Self::Range(DateRange::single_day(start)),
        }
    }

    /// Replaces the end date, keeping the start. The result is reordered if needed.
    pub fn with_end(self, end: NaiveDate) -> Self {
        match self.start() {
            Some(start) => Self::Range(DateRange::from_unordered(start, end)),
            None => Self::Range(DateRange::single_day(end)),
        }
    }
}

impl From<DateRange> for Selection {
    fn from(range: DateRange) -> Self {
        Self::Range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, range};

    #[test]
    fn test_single_mode_replaces() {
        let first = Selection::None.picked(date(2015, 6, 15), SelectionMode::Single);
        assert_eq!(first, Selection::Single(date(2015, 6, 15)));

        let second = first.picked(date(2015, 6, 21), SelectionMode::Single);
        assert_eq!(second, Selection::Single(date(2015, 6, 21)));
    }

    #[test]
    fn test_range_mode_transitions() {
        let mode = SelectionMode::Range;

        let s = Selection::None.picked(date(2015, 6, 15), mode);
        assert_eq!(s, Selection::Range(DateRange::single_day(date(2015, 6, 15))));

        let s = s.picked(date(2015, 6, 21), mode);
        assert_eq!(s, Selection::Range(range(date(2015, 6, 15), date(2015, 6, 21))));

        // Completed range: the next pick starts over.
        let s = s.picked(date(2015, 6, 12), mode);
        assert_eq!(s, Selection::Range(DateRange::single_day(date(2015, 6, 12))));
    }

    #[test]
    fn test_range_mode_earlier_pick_becomes_start() {
        let s = Selection::Range(DateRange::single_day(date(2015, 6, 15)))
            .picked(date(2015, 6, 10), SelectionMode::Range);
        assert_eq!(s.bounds(), Some((date(2015, 6, 10), date(2015, 6, 15))));
    }

    #[test]
    fn test_range_mode_same_day_pick() {
        let s = Selection::Range(DateRange::single_day(date(2015, 6, 15)))
            .picked(date(2015, 6, 15), SelectionMode::Range);
        assert_eq!(s.bounds(), Some((date(2015, 6, 15), date(2015, 6, 15))));
    }

    #[test]
    fn test_range_mode_from_single_selection() {
        let s = Selection::Single(date(2015, 6, 15)).picked(date(2015, 6, 18), SelectionMode::Range);
        assert_eq!(s.bounds(), Some((date(2015, 6, 15), date(2015, 6, 18))));
    }

    #[test]
    fn test_range_mode_start_never_after_end() {
        let picks = [20, 3, 3, 28, 1, 15, 14, 14, 30, 2, 9, 9, 22, 21];
        let mut s = Selection::None;
        for day in picks {
            s = s.picked(date(2015, 6, day), SelectionMode::Range);
            let (start, end) = s.bounds().expect("range mode always selects");
            assert!(start <= end, "{start} after {end}");
        }
    }

    #[test]
    fn test_day_predicates_for_range() {
        let s = Selection::Range(range(date(2015, 6, 15), date(2015, 6, 21)));

        assert!(s.is_start_date(date(2015, 6, 15)));
        assert!(s.is_end_date(date(2015, 6, 21)));
        assert!(s.is_selected(date(2015, 6, 15)));
        assert!(s.is_selected(date(2015, 6, 21)));
        assert!(!s.is_selected(date(2015, 6, 18)));

        assert!(s.is_in_range(date(2015, 6, 15)));
        assert!(s.is_in_range(date(2015, 6, 18)));
        assert!(s.is_in_range(date(2015, 6, 21)));
        assert!(!s.is_in_range(date(2015, 6, 22)));
    }

    #[test]
    fn test_day_predicates_for_single() {
        let s = Selection::Single(date(2015, 6, 15));

        assert!(s.is_selected(date(2015, 6, 15)));
        assert!(!s.is_start_date(date(2015, 6, 15)));
        assert!(!s.is_end_date(date(2015, 6, 15)));
        assert!(!s.is_in_range(date(2015, 6, 15)));

        assert!(!Selection::None.is_selected(date(2015, 6, 15)));
    }

    #[test]
    fn test_with_mode() {
        let r = Selection::Range(range(date(2015, 6, 15), date(2015, 6, 21)));
        assert_eq!(
            r.with_mode(SelectionMode::Single),
            Selection::Single(date(2015, 6, 15))
        );

        let single = Selection::Single(date(2015, 6, 15));
        assert_eq!(
            single.with_mode(SelectionMode::Range),
            Selection::Range(DateRange::single_day(date(2015, 6, 15)))
        );

        assert_eq!(Selection::None.with_mode(SelectionMode::Range), Selection::None);
    }

    #[test]
    fn test_with_start_and_end_reorder() {
        let s = Selection::Range(range(date(2015, 6, 15), date(2015, 6, 21)));

        assert_eq!(
            s.with_start(date(2015, 6, 10)).bounds(),
            Some((date(2015, 6, 10), date(2015, 6, 21)))
        );
        assert_eq!(
            s.with_start(date(2015, 6, 25)).bounds(),
            Some((date(2015, 6, 21), date(2015, 6, 25)))
        );
        assert_eq!(
            s.with_end(date(2015, 6, 1)).bounds(),
            Some((date(2015, 6, 1), date(2015, 6, 15)))
        );
        assert_eq!(
            Selection::None.with_end(date(2015, 6, 1)).bounds(),
            Some((date(2015, 6, 1), date(2015, 6, 1)))
        );
    }

    #[test]
    fn test_same_days() {
        let single = Selection::Single(date(2015, 6, 15));
        let one_day = Selection::Range(DateRange::single_day(date(2015, 6, 15)));
        assert!(single.same_days(&one_day));
        assert!(!single.same_days(&Selection::None));
        assert!(Selection::None.same_days(&Selection::None));
    }

    #[test]
    fn test_period() {
        assert_eq!(Selection::None.period(), None);
        assert_eq!(Selection::Single(date(2015, 6, 15)).period(), Some(Period::days(1)));
        assert_eq!(
            Selection::Range(range(date(2015, 6, 1), date(2015, 6, 30))).period(),
            Some(Period::months(1))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Selection::None.to_string(), "");
        assert_eq!(Selection::Single(date(2015, 6, 15)).to_string(), "2015-06-15");
        assert_eq!(
            Selection::Range(range(date(2015, 6, 15), date(2015, 6, 21))).to_string(),
            "2015-06-15/2015-06-21"
        );
    }

    #[test]
    fn test_serde() {
        let s = Selection::Range(range(date(2015, 6, 15), date(2015, 6, 21)));
        let json = serde_json::to_string(&s).expect("serialize selection");
        assert_eq!(json, r#"{"range":"2015-06-15/2015-06-21"}"#);
        let parsed: Selection = serde_json::from_str(&json).expect("deserialize selection");
        assert_eq!(parsed, s);

        let json = serde_json::to_string(&Selection::Single(date(2015, 6, 15))).expect("serialize selection");
        assert_eq!(json, r#"{"single":"2015-06-15"}"#);

        let json = serde_json::to_string(&Selection::None).expect("serialize selection");
        assert_eq!(json, r#""none""#);
    }
}
