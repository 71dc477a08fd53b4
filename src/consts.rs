/// Minimum valid anchor year (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum valid anchor year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// First day of a month, used to normalize anchors
pub const FIRST_DAY: u32 = 1;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Every grid row is a full week
pub const DAYS_PER_WEEK: usize = 7;

/// Calendar quarters span three months
pub const MONTHS_PER_QUARTER: u32 = 3;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
/// Month-first format separator (text input format)
pub const MONTH_FIRST_SEPARATOR: char = '/';

/// `chrono` format used to render dates into text inputs
pub const INPUT_DATE_FORMAT: &str = "%m/%d/%Y";

/// `chrono` format used for the month header, e.g. "June 2015"
pub const MONTH_TITLE_FORMAT: &str = "%B %Y";
