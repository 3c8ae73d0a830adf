//! # Bikeshare Graphs
//!
//! Aggregation of rental records into derived tables, and the charts drawn
//! from those tables with plotters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregator;
pub mod hourly_weekday;
pub mod monthly_rentals;
pub mod renderer;
pub mod season_split;
pub mod types;
pub mod yearly_trend;

pub use aggregator::{
    AggregateTable, Aggregates, Aggregation, DailyCasual, DailyRegistered, DailyTotal,
    HolidayBySeason, HourByWeekday, Metric, Monthly, SummaryMetrics, WorkingDayBySeason,
    YearlyByMonth,
};
pub use hourly_weekday::HourlyWeekdayGraph;
pub use monthly_rentals::MonthlyRentalsGraph;
pub use renderer::GraphRenderer;
pub use season_split::{DayFlag, SeasonSplitGraph};
pub use types::{ColorScheme, FontConfig, GraphConfig, MarginConfig, StyleConfig};
pub use yearly_trend::YearlyTrendGraph;
