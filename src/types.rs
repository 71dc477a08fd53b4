use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::consts::{
    DATE_SEPARATOR, DECEMBER, FIRST_DAY, JANUARY, MAX_MONTH, MAX_YEAR, MIN_YEAR,
    MONTH_TITLE_FORMAT,
};
use crate::{ParseError, RangeError};

/// The month currently displayed by a calendar.
/// Always normalized to the first day of the month, with the year limited to
/// `MIN_YEAR..=MAX_YEAR` so month arithmetic never leaves chrono's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AnchorMonth(NaiveDate);

impl AnchorMonth {
    /// Creates a new anchor month, validating year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the year is outside `MIN_YEAR..=MAX_YEAR`,
    /// or `ParseError::InvalidMonth` if the month is 0 or > `MAX_MONTH`.
    pub fn new(year: i32, month: u32) -> Result<Self, ParseError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ParseError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, FIRST_DAY)
            .map(Self)
            .ok_or(ParseError::InvalidMonth(month))
    }

    /// The month containing `date`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the date's year is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn containing(date: NaiveDate) -> Result<Self, ParseError> {
        Self::new(date.year(), date.month())
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month number, 1-based
    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub const fn first_day(self) -> NaiveDate {
        self.0
    }

    pub fn last_day(self) -> NaiveDate {
        // Bounded year, so neither step can overflow.
        self.0 + Months::new(1) - Days::new(1)
    }

    /// Number of days in the month
    pub fn len(self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The following month, or `None` past December of `MAX_YEAR`
    pub fn next(self) -> Option<Self> {
        let (year, month) = if self.month() == DECEMBER {
            (self.year() + 1, JANUARY)
        } else {
            (self.year(), self.month() + 1)
        };
        Self::new(year, month).ok()
    }

    /// The preceding month, or `None` before January of `MIN_YEAR`
    pub fn previous(self) -> Option<Self> {
        let (year, month) = if self.month() == JANUARY {
            (self.year() - 1, DECEMBER)
        } else {
            (self.year(), self.month() - 1)
        };
        Self::new(year, month).ok()
    }

    /// Header text such as "June 2015"
    pub fn title(self) -> String {
        self.0.format(MONTH_TITLE_FORMAT).to_string()
    }
}

impl fmt::Display for AnchorMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{DATE_SEPARATOR}{:02}", self.year(), self.month())
    }
}

impl FromStr for AnchorMonth {
    type Err = ParseError;

    /// Parses `YYYY-MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let year = year
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat((*year).to_owned()))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidFormat((*month).to_owned()))?;

        Self::new(year, month)
    }
}

impl TryFrom<String> for AnchorMonth {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AnchorMonth> for String {
    fn from(month: AnchorMonth) -> Self {
        month.to_string()
    }
}

/// Optional inclusive limits on which days can be picked.
/// A missing limit leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
}

impl Bounds {
    /// Bounds that disable nothing
    pub const UNBOUNDED: Self = Self {
        min: None,
        max: None,
    };

    /// Creates bounds with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidBounds` if both limits are set and min > max.
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Result<Self, RangeError> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(RangeError::InvalidBounds { min, max });
            }
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> Option<NaiveDate> {
        self.min
    }

    pub const fn max(&self) -> Option<NaiveDate> {
        self.max
    }

    /// Whether `date` falls inside `[min, max]`
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min.is_none_or(|min| date >= min) && self.max.is_none_or(|max| date <= max)
    }

    /// Whether `date` falls outside `[min, max]` and must not be picked
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        !self.contains(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{anchor, date};

    #[test]
    fn test_anchor_new_valid() {
        assert!(AnchorMonth::new(1, 1).is_ok());
        assert!(AnchorMonth::new(2015, 6).is_ok());
        assert!(AnchorMonth::new(9999, 12).is_ok());
    }

    #[test]
    fn test_anchor_new_invalid() {
        assert!(matches!(AnchorMonth::new(0, 6), Err(ParseError::InvalidYear(0))));
        assert!(matches!(
            AnchorMonth::new(10000, 6),
            Err(ParseError::InvalidYear(10000))
        ));
        assert!(matches!(AnchorMonth::new(2015, 0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(
            AnchorMonth::new(2015, 13),
            Err(ParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_anchor_containing_normalizes_to_first() {
        let month = AnchorMonth::containing(date(2015, 6, 17)).expect("valid anchor");
        assert_eq!(month.first_day(), date(2015, 6, 1));
        assert_eq!(month.year(), 2015);
        assert_eq!(month.month(), 6);
    }

    #[test]
    fn test_anchor_last_day_and_len() {
        struct TestCase {
            year:     i32,
            month:    u32,
            last_day: u32,
        }

        let cases = [
            TestCase {
                year:     2015,
                month:    6,
                last_day: 30,
            },
            TestCase {
                year:     2015,
                month:    12,
                last_day: 31,
            },
            TestCase {
                year:     2020,
                month:    2,
                last_day: 29,
            },
            TestCase {
                year:     1900,
                month:    2,
                last_day: 28,
            },
            TestCase {
                year:     9999,
                month:    12,
                last_day: 31,
            },
        ];

        for case in &cases {
            let month = anchor(case.year, case.month);
            assert_eq!(
                month.last_day(),
                date(case.year, case.month, case.last_day),
                "last day of {}",
                month
            );
            assert_eq!(month.len(), case.last_day);
        }
    }

    #[test]
    fn test_anchor_navigation() {
        let june = anchor(2015, 6);
        assert_eq!(june.previous(), Some(anchor(2015, 5)));
        assert_eq!(june.next(), Some(anchor(2015, 7)));

        assert_eq!(anchor(2015, 12).next(), Some(anchor(2016, 1)));
        assert_eq!(anchor(2016, 1).previous(), Some(anchor(2015, 12)));
    }

    #[test]
    fn test_anchor_navigation_at_limits() {
        assert_eq!(anchor(9999, 12).next(), None);
        assert_eq!(anchor(1, 1).previous(), None);
    }

    #[test]
    fn test_anchor_contains() {
        let june = anchor(2015, 6);
        assert!(june.contains(date(2015, 6, 1)));
        assert!(june.contains(date(2015, 6, 30)));
        assert!(!june.contains(date(2015, 7, 1)));
        assert!(!june.contains(date(2014, 6, 15)));
    }

    #[test]
    fn test_anchor_title_and_display() {
        let june = anchor(2015, 6);
        assert_eq!(june.title(), "June 2015");
        assert_eq!(june.to_string(), "2015-06");
    }

    #[test]
    fn test_anchor_from_str() {
        assert_eq!("2015-06".parse::<AnchorMonth>(), Ok(anchor(2015, 6)));
        assert_eq!(" 2015 - 6 ".parse::<AnchorMonth>(), Ok(anchor(2015, 6)));
        assert!(matches!("".parse::<AnchorMonth>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "2015-06-01".parse::<AnchorMonth>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2015-XX".parse::<AnchorMonth>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2015-13".parse::<AnchorMonth>(),
            Err(ParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_anchor_serde() {
        let june = anchor(2015, 6);
        let json = serde_json::to_string(&june).expect("serialize anchor");
        assert_eq!(json, r#""2015-06""#);

        let parsed: AnchorMonth = serde_json::from_str(&json).expect("deserialize anchor");
        assert_eq!(parsed, june);

        let invalid: Result<AnchorMonth, _> = serde_json::from_str(r#""2015-13""#);
        assert!(invalid.is_err());
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = Bounds::new(Some(date(2015, 6, 10)), Some(date(2015, 6, 20)))
            .expect("valid bounds");

        assert!(bounds.contains(date(2015, 6, 10)));
        assert!(bounds.contains(date(2015, 6, 20)));
        assert!(bounds.is_disabled(date(2015, 6, 9)));
        assert!(bounds.is_disabled(date(2015, 6, 21)));
    }

    #[test]
    fn test_bounds_open_sides() {
        let min_only = Bounds::new(Some(date(2015, 6, 10)), None).expect("valid bounds");
        assert!(min_only.contains(date(9999, 1, 1)));
        assert!(min_only.is_disabled(date(2015, 6, 9)));

        let max_only = Bounds::new(None, Some(date(2015, 6, 10))).expect("valid bounds");
        assert!(max_only.contains(date(1, 1, 1)));
        assert!(max_only.is_disabled(date(2015, 6, 11)));

        assert!(Bounds::UNBOUNDED.contains(date(2015, 6, 10)));
    }

    #[test]
    fn test_bounds_rejects_inverted() {
        let result = Bounds::new(Some(date(2015, 6, 20)), Some(date(2015, 6, 10)));
        assert!(matches!(result, Err(RangeError::InvalidBounds { .. })));
    }
}
