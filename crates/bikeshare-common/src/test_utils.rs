//! Test fixtures shared across the workspace.
//!
//! Enabled for this crate's own tests and for dependents through the
//! `testing` feature.

use crate::types::{DayOfWeek, Month, RentalRecord, Season, Year};
use chrono::{Datelike, NaiveDate};

/// Header row of the rental CSV in the column order the dataset ships with.
pub const CSV_HEADER: &str =
    "dteday,season,yr,mnth,hr,holiday,weekday,workingday,casual,registered,cnt";

/// Shorthand for a calendar day; panics on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Season of a day as the dataset codes it: code 1 runs from the December
/// solstice to the March equinox, and each later code starts at the next
/// solstice or equinox.
pub fn season_of(day: NaiveDate) -> Season {
    match (day.month(), day.day()) {
        (12, 21..) | (1 | 2, _) | (3, ..=20) => Season::Spring,
        (3, _) | (4 | 5, _) | (6, ..=20) => Season::Summer,
        (6, _) | (7 | 8, _) | (9, ..=22) => Season::Fall,
        _ => Season::Winter,
    }
}

/// Builds a daily record for `day`, deriving every calendar dimension from
/// the date itself.
pub fn daily_record(day: NaiveDate, casual: u32, registered: u32) -> RentalRecord {
    let weekday = DayOfWeek::ALL[day.weekday().num_days_from_sunday() as usize];
    let weekend = matches!(weekday, DayOfWeek::Saturday | DayOfWeek::Sunday);
    RentalRecord {
        date: day,
        hour: None,
        season: season_of(day),
        working_day: !weekend,
        holiday: false,
        weekday,
        month: Month::from_number(day.month()).expect("chrono months are 1-12"),
        year: Year(day.year()),
        casual,
        registered,
        total: casual + registered,
    }
}

/// Builds an hourly record for `day` at `hour`.
pub fn hourly_record(day: NaiveDate, hour: u8, casual: u32, registered: u32) -> RentalRecord {
    RentalRecord {
        hour: Some(hour),
        ..daily_record(day, casual, registered)
    }
}

/// Deterministic daily records covering `days` consecutive days from `start`.
///
/// Counts vary with the day index so that grouped sums differ per key.
pub fn generate_daily_records(start: NaiveDate, days: u32) -> Vec<RentalRecord> {
    (0..days)
        .map(|offset| {
            let day = start + chrono::Duration::days(i64::from(offset));
            daily_record(day, 100 + (offset * 7) % 300, 1000 + (offset * 13) % 2500)
        })
        .collect()
}

/// Renders records as CSV text with [`CSV_HEADER`], using the dataset's
/// numeric codes for every categorical column.
pub fn records_to_csv(records: &[RentalRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for record in records {
        let hour = record.hour.map(|h| h.to_string()).unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{}\n",
            record.date.format("%Y-%m-%d"),
            record.season.index() + 1,
            record.year.0 - crate::types::YEAR_CODE_BASE,
            record.month.number(),
            hour,
            u8::from(record.holiday),
            record.weekday.index(),
            u8::from(record.working_day),
            record.casual,
            record.registered,
            record.total,
        ));
    }
    out
}

/// The two-row example used throughout the tests.
pub fn two_day_example() -> Vec<RentalRecord> {
    vec![
        daily_record(date(2011, 1, 1), 10, 20),
        daily_record(date(2011, 1, 2), 5, 5),
    ]
}

/// Writes `contents` to a fresh temporary file and returns its handle.
#[cfg(feature = "tempfile")]
pub fn write_temp_csv(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary file");
    file
}
