//! Rental record model and the categorical dimensions it is grouped by.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Offset applied to the dataset's `yr` code (0 = 2011, 1 = 2012).
pub const YEAR_CODE_BASE: i32 = 2011;

/// Error returned when a categorical value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} '{value}'")]
pub struct ParseCategoryError {
    kind: &'static str,
    value: String,
}

impl ParseCategoryError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Meteorological season of a rental record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Code 1
    Spring,
    /// Code 2
    Summer,
    /// Code 3
    Fall,
    /// Code 4
    Winter,
}

impl Season {
    /// All seasons in dataset code order.
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Fall, Self::Winter];

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        }
    }

    /// Zero-based position in [`Season::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Season {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "spring" => Ok(Self::Spring),
            "2" | "summer" => Ok(Self::Summer),
            "3" | "fall" | "autumn" => Ok(Self::Fall),
            "4" | "winter" => Ok(Self::Winter),
            _ => Err(ParseCategoryError::new("season", s)),
        }
    }
}

/// Day of the week, ordered Sunday first as in the dataset's `weekday` codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    /// Code 0
    Sunday,
    /// Code 1
    Monday,
    /// Code 2
    Tuesday,
    /// Code 3
    Wednesday,
    /// Code 4
    Thursday,
    /// Code 5
    Friday,
    /// Code 6
    Saturday,
}

impl DayOfWeek {
    /// All days in dataset code order.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Zero-based position in [`DayOfWeek::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DayOfWeek {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "sun" | "sunday" => Ok(Self::Sunday),
            "1" | "mon" | "monday" => Ok(Self::Monday),
            "2" | "tue" | "tuesday" => Ok(Self::Tuesday),
            "3" | "wed" | "wednesday" => Ok(Self::Wednesday),
            "4" | "thu" | "thursday" => Ok(Self::Thursday),
            "5" | "fri" | "friday" => Ok(Self::Friday),
            "6" | "sat" | "saturday" => Ok(Self::Saturday),
            _ => Err(ParseCategoryError::new("weekday", s)),
        }
    }
}

/// Calendar month, ordered January to December.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// The fixed month axis used by every month-keyed chart.
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// Three-letter abbreviation.
    pub const fn abbr(self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
        }
    }

    /// Month number, 1 to 12.
    pub const fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Month from its number, 1 to 12.
    pub fn from_number(number: u32) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize).copied())
    }

    /// Zero-based position in [`Month::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbr())
    }
}

impl FromStr for Month {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Self::from_number(number).ok_or_else(|| ParseCategoryError::new("month", s));
        }

        let lower = trimmed.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|month| {
                let abbr = month.abbr().to_ascii_lowercase();
                lower == abbr || (lower.len() > 3 && full_month_name(*month) == lower)
            })
            .ok_or_else(|| ParseCategoryError::new("month", s))
    }
}

const fn full_month_name(month: Month) -> &'static str {
    match month {
        Month::Jan => "january",
        Month::Feb => "february",
        Month::Mar => "march",
        Month::Apr => "april",
        Month::May => "may",
        Month::Jun => "june",
        Month::Jul => "july",
        Month::Aug => "august",
        Month::Sep => "september",
        Month::Oct => "october",
        Month::Nov => "november",
        Month::Dec => "december",
    }
}

/// Calendar year of a rental record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Year(pub i32);

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Year {
    type Err = ParseCategoryError;

    /// Accepts the dataset's `yr` codes (0 for 2011, 1 for 2012) or a
    /// four-digit year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<i32>()
            .ok()
            .or_else(|| crate::utils::parse_integral_float(trimmed).and_then(|v| i32::try_from(v).ok()))
            .ok_or_else(|| ParseCategoryError::new("year", s))?;

        match value {
            0..=99 => Ok(Self(YEAR_CODE_BASE + value)),
            1000..=9999 => Ok(Self(value)),
            _ => Err(ParseCategoryError::new("year", s)),
        }
    }
}

/// One row of the rental table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    /// Calendar day
    pub date: NaiveDate,
    /// Hour of day; present only on hourly rows
    pub hour: Option<u8>,
    /// Season
    pub season: Season,
    /// Whether the day is neither a weekend nor a holiday
    pub working_day: bool,
    /// Whether the day is a public holiday
    pub holiday: bool,
    /// Day of the week
    pub weekday: DayOfWeek,
    /// Month
    pub month: Month,
    /// Year
    pub year: Year,
    /// Rentals by casual users
    pub casual: u32,
    /// Rentals by registered users
    pub registered: u32,
    /// All rentals; equals `casual + registered`
    pub total: u32,
}

/// Inclusive range of calendar days.
///
/// A range whose `start` is after its `end` is allowed and contains no day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day, inclusive
    pub start: NaiveDate,
    /// Last day, inclusive
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new range without reordering the bounds.
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether `date` lies within the range, both ends inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the bounds are inverted.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parsing_accepts_codes_and_names() {
        assert_eq!("1".parse::<Season>().unwrap(), Season::Spring);
        assert_eq!("Summer".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!("autumn".parse::<Season>().unwrap(), Season::Fall);
        assert_eq!(" 4 ".parse::<Season>().unwrap(), Season::Winter);
        assert!("5".parse::<Season>().is_err());
    }

    #[test]
    fn test_weekday_codes_start_on_sunday() {
        assert_eq!("0".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sunday);
        assert_eq!("6".parse::<DayOfWeek>().unwrap(), DayOfWeek::Saturday);
        assert_eq!("Wed".parse::<DayOfWeek>().unwrap(), DayOfWeek::Wednesday);
        assert!(DayOfWeek::Sunday < DayOfWeek::Monday);
        assert!("7".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_month_parsing_and_order() {
        assert_eq!("Jan".parse::<Month>().unwrap(), Month::Jan);
        assert_eq!("12".parse::<Month>().unwrap(), Month::Dec);
        assert_eq!("september".parse::<Month>().unwrap(), Month::Sep);
        assert!("13".parse::<Month>().is_err());
        assert!("Ja".parse::<Month>().is_err());

        let mut months = vec![Month::Dec, Month::Jan, Month::Jul];
        months.sort();
        assert_eq!(months, vec![Month::Jan, Month::Jul, Month::Dec]);
        assert_eq!(Month::Apr.number(), 4);
        assert_eq!(Month::from_number(0), None);
    }

    #[test]
    fn test_year_codes_are_offset() {
        assert_eq!("0".parse::<Year>().unwrap(), Year(2011));
        assert_eq!("1".parse::<Year>().unwrap(), Year(2012));
        assert_eq!("2012".parse::<Year>().unwrap(), Year(2012));
        assert_eq!("1.0".parse::<Year>().unwrap(), Year(2012));
        assert!("-3".parse::<Year>().is_err());
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let start = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2011, 1, 3).unwrap();
        let range = DateRange::new(start, end);

        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2011, 1, 4).unwrap()));
        assert!(!range.is_inverted());

        let inverted = DateRange::new(end, start);
        assert!(inverted.is_inverted());
        assert!(!inverted.contains(start));
        assert!(!inverted.contains(end));
    }
}
