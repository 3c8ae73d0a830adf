//! Point chart of rentals per hour, one connected series per weekday

use crate::aggregator::AggregateTable;
use crate::renderer::{category_chart, count_axis_max, draw_legend, GraphRenderer};
use crate::GraphConfig;
use bikeshare_common::{DayOfWeek, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

/// Hours on the x axis.
pub const HOURS: u8 = 24;

/// Rentals per hour for each weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourlyWeekdayGraph {
    /// One series per weekday, Sunday first; points in hour order
    pub series: Vec<(DayOfWeek, Vec<(u8, u64)>)>,
}

impl HourlyWeekdayGraph {
    /// Splits an `(hour, weekday)` table into per-weekday series.
    pub fn from_table(table: &AggregateTable<(u8, DayOfWeek)>) -> Self {
        let series = DayOfWeek::ALL
            .into_iter()
            .map(|day| {
                let points: Vec<(u8, u64)> = table
                    .iter()
                    .filter(|((_, weekday), _)| *weekday == day)
                    .map(|((hour, _), count)| (hour, count))
                    .collect();
                (day, points)
            })
            .filter(|(_, points)| !points.is_empty())
            .collect();
        Self { series }
    }

    fn max_count(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|(_, points)| points.iter().map(|(_, count)| *count))
            .max()
            .unwrap_or(0)
    }
}

impl GraphRenderer for HourlyWeekdayGraph {
    fn name(&self) -> &'static str {
        "hourly_weekday"
    }

    fn base_config(&self) -> GraphConfig {
        GraphConfig::new("Number of Users by Hour and Weekday", 1500, 800)
            .with_labels("Hour", "Count of Users")
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

        let hour_labels: Vec<String> = (0..HOURS).map(|hour| hour.to_string()).collect();
        let labels: Vec<&str> = hour_labels.iter().map(String::as_str).collect();
        let mut chart = category_chart(root, config, &labels, count_axis_max(self.max_count()))?;

        for (day, points) in &self.series {
            let color = self.series_color(config, day.index());
            let coords: Vec<(f64, f64)> = points
                .iter()
                .map(|(hour, count)| (f64::from(*hour), *count as f64))
                .collect();

            chart
                .draw_series(LineSeries::new(coords.iter().copied(), color.stroke_width(2)))?
                .label(day.label())
                .legend(move |(x, y)| Circle::new((x + 5, y), 4, color.filled()));
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{Aggregation, HourByWeekday};
    use bikeshare_common::test_utils::{date, daily_record, hourly_record};

    #[test]
    fn test_series_per_weekday_in_code_order() {
        let records = vec![
            hourly_record(date(2011, 1, 1), 8, 5, 95),
            hourly_record(date(2011, 1, 1), 9, 1, 49),
            hourly_record(date(2011, 1, 2), 8, 2, 8),
            hourly_record(date(2011, 1, 8), 8, 0, 10),
            daily_record(date(2011, 1, 3), 100, 100),
        ];
        let graph = HourlyWeekdayGraph::from_table(&HourByWeekday.aggregate(&records));

        assert_eq!(
            graph.series,
            vec![
                (DayOfWeek::Sunday, vec![(8, 10)]),
                (DayOfWeek::Saturday, vec![(8, 110), (9, 50)]),
            ]
        );
        assert_eq!(graph.max_count(), 110);
    }

    #[test]
    fn test_daily_only_data_has_no_series() {
        let records = vec![daily_record(date(2011, 1, 1), 1, 1)];
        let graph = HourlyWeekdayGraph::from_table(&HourByWeekday.aggregate(&records));
        assert!(graph.series.is_empty());
    }

    #[test]
    fn test_base_config() {
        let config = HourlyWeekdayGraph::default().base_config();
        assert_eq!(config.title, "Number of Users by Hour and Weekday");
        assert_eq!(config.x_label.as_deref(), Some("Hour"));
        assert_eq!((config.width, config.height), (1500, 800));
    }
}
