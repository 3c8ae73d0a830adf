//! Column contract of the rental CSV.
//!
//! The header is checked once when the file is opened. Every required
//! column must be present; extra columns are ignored and order is free.

use bikeshare_common::{DashboardError, Result};
use csv::StringRecord;
use std::fmt;

/// A required column of the rental table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// `dteday`
    Date,
    /// `hr`
    Hour,
    /// `season`
    Season,
    /// `holiday`
    Holiday,
    /// `workingday`
    WorkingDay,
    /// `weekday`
    Weekday,
    /// `mnth`
    Month,
    /// `yr`
    Year,
    /// `casual`
    Casual,
    /// `registered`
    Registered,
    /// `cnt`
    Total,
}

impl Column {
    /// Header name as it appears in the file.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Date => "dteday",
            Self::Hour => "hr",
            Self::Season => "season",
            Self::Holiday => "holiday",
            Self::WorkingDay => "workingday",
            Self::Weekday => "weekday",
            Self::Month => "mnth",
            Self::Year => "yr",
            Self::Casual => "casual",
            Self::Registered => "registered",
            Self::Total => "cnt",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Columns the loader requires, in declaration order of [`Column`].
pub const REQUIRED_COLUMNS: [Column; 11] = [
    Column::Date,
    Column::Hour,
    Column::Season,
    Column::Holiday,
    Column::WorkingDay,
    Column::Weekday,
    Column::Month,
    Column::Year,
    Column::Casual,
    Column::Registered,
    Column::Total,
];

/// Position of each required column within a concrete header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: [usize; REQUIRED_COLUMNS.len()],
}

impl ColumnIndex {
    /// Resolves every required column against `headers`.
    ///
    /// Header names are matched after trimming, case-insensitively. The
    /// first missing column is reported by name.
    pub fn from_headers(headers: &StringRecord) -> Result<Self> {
        let names: Vec<String> = headers
            .iter()
            .map(|h| h.trim().trim_start_matches('\u{feff}').to_ascii_lowercase())
            .collect();

        let mut positions = [0; REQUIRED_COLUMNS.len()];
        for (slot, column) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = names
                .iter()
                .position(|name| name == column.name())
                .ok_or_else(|| {
                    DashboardError::schema_column(
                        format!("required column '{column}' is missing"),
                        column.name(),
                    )
                })?;
        }

        Ok(Self { positions })
    }

    /// Index of `column` within each record.
    pub const fn position(&self, column: Column) -> usize {
        self.positions[column as usize]
    }

    /// Cell of `column` in `record`, or an empty string for short rows.
    pub fn cell<'r>(&self, record: &'r StringRecord, column: Column) -> &'r str {
        record.get(self.position(column)).unwrap_or_default()
    }
}
