//! Bar chart of rentals per month

use crate::aggregator::AggregateTable;
use crate::renderer::{category_chart, count_axis_max, GraphRenderer};
use crate::GraphConfig;
use bikeshare_common::{Month, Result};
use plotters::coord::Shift;
use plotters::prelude::*;

const BAR_WIDTH: f64 = 0.8;

/// Rentals per month over the fixed Jan to Dec axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyRentalsGraph {
    /// Bars in month order
    pub data: Vec<(Month, u64)>,
}

impl MonthlyRentalsGraph {
    /// Takes the bars straight from the monthly table.
    pub fn from_table(table: &AggregateTable<Month>) -> Self {
        Self {
            data: table.iter().collect(),
        }
    }

    fn max_count(&self) -> u64 {
        self.data.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }
}

impl GraphRenderer for MonthlyRentalsGraph {
    fn name(&self) -> &'static str {
        "monthly_rentals"
    }

    fn base_config(&self) -> GraphConfig {
        GraphConfig::new("Number of Users by Month", 800, 500).with_labels("Month", "Count of Users")
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

        chart.draw_series(self.data.iter().filter(|(_, count)| *count > 0).map(|(month, count)| {
            let x = month.index() as f64;
            let color = self.series_color(config, month.index());
            Rectangle::new(
                [(x - BAR_WIDTH / 2.0, 0.0), (x + BAR_WIDTH / 2.0, *count as f64)],
                color.filled(),
            )
        }))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{Aggregation, Monthly};
    use bikeshare_common::test_utils::{generate_daily_records, date};

    #[test]
    fn test_bars_cover_every_month() {
        let records = generate_daily_records(date(2011, 3, 1), 31);
        let graph = MonthlyRentalsGraph::from_table(&Monthly.aggregate(&records));

        assert_eq!(graph.data.len(), 12);
        assert_eq!(graph.data[0], (Month::Jan, 0));
        assert!(graph.data[2].1 > 0);
        assert_eq!(graph.max_count(), graph.data[2].1);
    }

    #[test]
    fn test_base_config() {
        let config = MonthlyRentalsGraph::default().base_config();
        assert_eq!(config.title, "Number of Users by Month");
        assert_eq!((config.width, config.height), (800, 500));
    }

    #[test]
    #[ignore = "requires system fonts"]
    fn test_render_blank_chart() {
        let graph = MonthlyRentalsGraph::from_table(&Monthly.aggregate(&[]));
        let bytes = graph.render_to_bytes(&graph.base_config()).unwrap();
        assert!(!bytes.is_empty());
    }
}
