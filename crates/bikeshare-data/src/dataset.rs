//! Loading of the rental table.
//!
//! The table is read once at startup and kept immutable for the rest of the
//! process. Any schema or value problem aborts the load with an error naming
//! the offending line and column.

use crate::schema::{Column, ColumnIndex};
use bikeshare_common::{
    is_missing, parse_count, parse_flag, parse_integral_float, DashboardError, DateRange,
    DayOfWeek, Month, RentalRecord, Result, Season, Year,
};
use chrono::NaiveDate;
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// The validated, immutable rental table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<RentalRecord>,
    min_date: NaiveDate,
    max_date: NaiveDate,
}

impl Dataset {
    /// Loads and validates the CSV at `path`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            DashboardError::data_with_source(
                format!("failed to open dataset '{}'", path.display()),
                err,
            )
        })?;

        let dataset = Self::from_reader(file)?;
        info!(
            records = dataset.len(),
            hourly = dataset.hourly_len(),
            start = %dataset.min_date,
            end = %dataset.max_date,
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Parses CSV text from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| DashboardError::data_with_source("failed to read CSV header", err))?;
        let index = ColumnIndex::from_headers(headers)?;

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row.map_err(|err| DashboardError::data_with_source("failed to read CSV row", err))?;
            records.push(parse_row(&index, &row)?);
        }

        debug!(rows = records.len(), "Parsed rental rows");
        Self::from_records(records)
    }

    /// Builds a dataset from already-parsed records.
    ///
    /// Fails when `records` is empty, since the date bounds are undefined.
    pub fn from_records(records: Vec<RentalRecord>) -> Result<Self> {
        let (min_date, max_date) = records
            .iter()
            .map(|record| record.date)
            .fold(None, |bounds, date| match bounds {
                None => Some((date, date)),
                Some((lo, hi)) => Some((date.min(lo), date.max(hi))),
            })
            .ok_or_else(|| DashboardError::schema("dataset contains no records"))?;

        Ok(Self {
            records,
            min_date,
            max_date,
        })
    }

    /// All records in file order.
    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records that carry an hour.
    pub fn hourly_len(&self) -> usize {
        self.records.iter().filter(|r| r.hour.is_some()).count()
    }

    /// Earliest date in the table.
    pub const fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    /// Latest date in the table.
    pub const fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    /// The full `[min_date, max_date]` range.
    pub const fn date_bounds(&self) -> DateRange {
        DateRange::new(self.min_date, self.max_date)
    }
}

fn parse_row(index: &ColumnIndex, row: &StringRecord) -> Result<RentalRecord> {
    let line = row.position().map_or(0, csv::Position::line);
    let cell = |column: Column| index.cell(row, column);
    let invalid = |column: Column, detail: String| DashboardError::record(line, column.name(), detail);

    let date = parse_date(cell(Column::Date))
        .ok_or_else(|| invalid(Column::Date, format!("invalid date '{}'", cell(Column::Date))))?;
    let hour = parse_hour(cell(Column::Hour))
        .map_err(|()| invalid(Column::Hour, format!("invalid hour '{}'", cell(Column::Hour))))?;

    let season: Season = parse_category(cell(Column::Season)).map_err(|e| invalid(Column::Season, e))?;
    let weekday: DayOfWeek =
        parse_category(cell(Column::Weekday)).map_err(|e| invalid(Column::Weekday, e))?;
    let month: Month = parse_category(cell(Column::Month)).map_err(|e| invalid(Column::Month, e))?;
    let year: Year = parse_category(cell(Column::Year)).map_err(|e| invalid(Column::Year, e))?;

    let flag = |column: Column| {
        parse_flag(cell(column))
            .ok_or_else(|| invalid(column, format!("invalid flag '{}'", cell(column))))
    };
    let holiday = flag(Column::Holiday)?;
    let working_day = flag(Column::WorkingDay)?;

    let count = |column: Column| {
        parse_count(cell(column))
            .ok_or_else(|| invalid(column, format!("invalid count '{}'", cell(column))))
    };
    let casual = count(Column::Casual)?;
    let registered = count(Column::Registered)?;
    let total = count(Column::Total)?;

    if casual.checked_add(registered) != Some(total) {
        return Err(invalid(
            Column::Total,
            format!("count {total} does not equal casual {casual} + registered {registered}"),
        ));
    }

    Ok(RentalRecord {
        date,
        hour,
        season,
        working_day,
        holiday,
        weekday,
        month,
        year,
        casual,
        registered,
        total,
    })
}

/// Accepts `YYYY-MM-DD` with an optional trailing time component.
fn parse_date(input: &str) -> Option<NaiveDate> {
    let day = input.split([' ', 'T']).next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn parse_hour(input: &str) -> std::result::Result<Option<u8>, ()> {
    if is_missing(input) {
        return Ok(None);
    }
    parse_integral_float(input)
        .and_then(|value| u8::try_from(value).ok())
        .filter(|hour| *hour < 24)
        .map(Some)
        .ok_or(())
}

fn parse_category<T>(input: &str) -> std::result::Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    input.parse::<T>().map_err(|err| err.to_string())
}
