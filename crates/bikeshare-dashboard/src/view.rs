//! View model of one dashboard interaction.
//!
//! A view is built from the immutable dataset and the selected range on
//! every request; nothing is cached between requests.

use bikeshare_common::{DateRange, Result};
use bikeshare_config::GraphsConfig;
use bikeshare_data::{filter_by_date, Dataset};
use bikeshare_graphs::{
    Aggregates, GraphRenderer, HourlyWeekdayGraph, MonthlyRentalsGraph, SeasonSplitGraph,
    StyleConfig, SummaryMetrics, YearlyTrendGraph,
};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Chart panels of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Rentals by month and year
    Yearly,
    /// Rentals by month
    Monthly,
    /// Rentals by working day and season
    WorkingDay,
    /// Rentals by holiday and season
    Holiday,
    /// Rentals by hour and weekday
    Hourly,
}

impl ChartKind {
    /// All panels in page order.
    pub const ALL: [Self; 5] = [
        Self::Yearly,
        Self::Monthly,
        Self::WorkingDay,
        Self::Holiday,
        Self::Hourly,
    ];

    /// Path segment under `/charts/`.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Yearly => "yearly",
            Self::Monthly => "monthly",
            Self::WorkingDay => "workingday",
            Self::Holiday => "holiday",
            Self::Hourly => "hourly",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| format!("unknown chart '{s}'"))
    }
}

/// Everything the page shows for one selected range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    /// Selected range, possibly inverted or outside the data
    pub range: DateRange,
    /// Earliest and latest date of the dataset
    pub bounds: DateRange,
    /// Number of records inside the range
    pub selected_records: usize,
    /// All eight derived tables
    pub aggregates: Aggregates,
    /// Headline counters
    pub summary: SummaryMetrics,
}

impl DashboardView {
    /// Filters the dataset to `range` and runs every aggregation.
    #[instrument(skip_all, fields(%range))]
    pub fn build(dataset: &Dataset, range: DateRange) -> Self {
        let filtered = filter_by_date(dataset.records(), range);
        let aggregates = Aggregates::compute(&filtered);
        let summary = aggregates.summary();

        Self {
            range,
            bounds: dataset.date_bounds(),
            selected_records: filtered.len(),
            aggregates,
            summary,
        }
    }

    /// Draws one chart panel as PNG bytes.
    pub fn render_chart(&self, kind: ChartKind, settings: &GraphsConfig) -> Result<Vec<u8>> {
        let style = StyleConfig::from(settings);
        let aggregates = &self.aggregates;
        match kind {
            ChartKind::Yearly => render(
                &YearlyTrendGraph::from_table(&aggregates.yearly_by_month),
                style,
                settings.scale,
            ),
            ChartKind::Monthly => render(
                &MonthlyRentalsGraph::from_table(&aggregates.monthly),
                style,
                settings.scale,
            ),
            ChartKind::WorkingDay => render(
                &SeasonSplitGraph::working_day(&aggregates.working_day_by_season),
                style,
                settings.scale,
            ),
            ChartKind::Holiday => render(
                &SeasonSplitGraph::holiday(&aggregates.holiday_by_season),
                style,
                settings.scale,
            ),
            ChartKind::Hourly => render(
                &HourlyWeekdayGraph::from_table(&aggregates.hour_by_weekday),
                style,
                settings.scale,
            ),
        }
    }
}

fn render<G: GraphRenderer>(graph: &G, style: StyleConfig, scale: f64) -> Result<Vec<u8>> {
    let config = graph.base_config().with_style(style).scaled(scale);
    graph.render_to_bytes(&config)
}
