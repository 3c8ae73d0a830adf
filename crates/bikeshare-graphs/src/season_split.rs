//! Grouped bar charts of rentals by a day flag, split by season

use crate::aggregator::AggregateTable;
use crate::renderer::{category_chart, count_axis_max, draw_legend, GraphRenderer};
use crate::GraphConfig;
use bikeshare_common::{Result, Season};
use plotters::coord::Shift;
use plotters::prelude::*;

const GROUP_WIDTH: f64 = 0.8;

/// Day flag on the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFlag {
    /// `workingday`
    WorkingDay,
    /// `holiday`
    Holiday,
}

impl DayFlag {
    /// Axis description.
    pub const fn label(self) -> &'static str {
        match self {
            Self::WorkingDay => "Working Day",
            Self::Holiday => "Holiday",
        }
    }
}

/// Rentals per (flag, season): two bar groups with one bar per season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonSplitGraph {
    /// Flag on the x axis
    pub flag: DayFlag,
    /// Bars in (flag, season) order
    pub data: Vec<((bool, Season), u64)>,
}

impl SeasonSplitGraph {
    /// Working-day chart from the working-day-by-season table.
    pub fn working_day(table: &AggregateTable<(bool, Season)>) -> Self {
        Self {
            flag: DayFlag::WorkingDay,
            data: table.iter().collect(),
        }
    }

    /// Holiday chart from the holiday-by-season table.
    pub fn holiday(table: &AggregateTable<(bool, Season)>) -> Self {
        Self {
            flag: DayFlag::Holiday,
            data: table.iter().collect(),
        }
    }

    fn max_count(&self) -> u64 {
        self.data.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }

    /// Left and right edge of the bar for `season` in the group at `flag`.
    #[allow(clippy::cast_precision_loss)]
    fn bar_span(flag: bool, season: Season) -> (f64, f64) {
        let width = GROUP_WIDTH / Season::ALL.len() as f64;
        let left = f64::from(u8::from(flag)) - GROUP_WIDTH / 2.0 + width * season.index() as f64;
        (left, left + width)
    }
}

impl GraphRenderer for SeasonSplitGraph {
    fn name(&self) -> &'static str {
        match self.flag {
            DayFlag::WorkingDay => "working_day_by_season",
            DayFlag::Holiday => "holiday_by_season",
        }
    }

    fn base_config(&self) -> GraphConfig {
        GraphConfig::new(
            format!("Number of Users by {} and Season", self.flag.label()),
            750,
            500,
        )
        .with_labels(self.flag.label(), "Count of Users")
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

        let mut chart = category_chart(root, config, &["0", "1"], count_axis_max(self.max_count()))?;

        let mut drawn = false;
        for season in Season::ALL {
            let bars: Vec<(bool, u64)> = self
                .data
                .iter()
                .filter(|((_, s), _)| *s == season)
                .map(|((flag, _), count)| (*flag, *count))
                .collect();
            if bars.is_empty() {
                continue;
            }

            let color = self.series_color(config, season.index());
            chart
                .draw_series(bars.into_iter().map(|(flag, count)| {
                    let (left, right) = Self::bar_span(flag, season);
                    Rectangle::new([(left, 0.0), (right, count as f64)], color.filled())
                }))?
                .label(season.label())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
            drawn = true;
        }

        if drawn {
            draw_legend(&mut chart, config)?;
        }
        Ok(())
    }
}
