//! Line chart of rentals per month, one line per year

use crate::aggregator::AggregateTable;
use crate::renderer::{category_chart, count_axis_max, draw_legend, GraphRenderer};
use crate::GraphConfig;
use bikeshare_common::{Month, Result, Year};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::collections::BTreeMap;

/// Rentals per month for each year, drawn as connected markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearlyTrendGraph {
    /// One series per year, in year order; points in month order
    pub series: Vec<(Year, Vec<(Month, u64)>)>,
}

impl YearlyTrendGraph {
    /// Splits a `(month, year)` table into per-year series.
    pub fn from_table(table: &AggregateTable<(Month, Year)>) -> Self {
        let mut by_year: BTreeMap<Year, Vec<(Month, u64)>> = BTreeMap::new();
        for ((month, year), count) in table.iter() {
            by_year.entry(year).or_default().push((month, count));
        }
        for points in by_year.values_mut() {
            points.sort_by_key(|(month, _)| *month);
        }
        Self {
            series: by_year.into_iter().collect(),
        }
    }

    fn max_count(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|(_, points)| points.iter().map(|(_, count)| *count))
            .max()
            .unwrap_or(0)
    }
}

impl GraphRenderer for YearlyTrendGraph {
    fn name(&self) -> &'static str {
        "yearly_trend"
    }

    fn base_config(&self) -> GraphConfig {
        GraphConfig::new("Number of Users by Month and Year", 1000, 500)
            .with_labels("Month", "Count of Users")
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        config: &GraphConfig,
    ) -> Result<()>
    where
        DB::ErrorType: std::error::Error + Send + Sync + 'static,
    {
        root.fill(&self.get_background_color(config))?;

        let labels = Month::ALL.map(Month::abbr);
        let mut chart = category_chart(root, config, &labels, count_axis_max(self.max_count()))?;

        for (index, (year, points)) in self.series.iter().enumerate() {
            let color = self.series_color(config, index);
            let coords: Vec<(f64, f64)> = points
                .iter()
                .map(|(month, count)| (month.index() as f64, *count as f64))
                .collect();

            chart
                .draw_series(LineSeries::new(coords.iter().copied(), color.stroke_width(2)))?
                .label(year.to_string())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
            chart.draw_series(
                coords
                    .iter()
                    .map(|&point| Circle::new(point, 4, color.filled())),
            )?;
        }

        if !self.series.is_empty() {
            draw_legend(&mut chart, config)?;
        }
        Ok(())
    }
}
