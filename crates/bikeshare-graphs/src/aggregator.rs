//! Grouping and summation of rental records into derived tables.
//!
//! Every aggregation has the same shape: derive a key from each record,
//! then sum one count metric per key. Aggregations never fail and never
//! mutate their input; schema problems are rejected when the dataset loads.

use bikeshare_common::{DayOfWeek, Month, RentalRecord, Season, Year};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Count column summed by an aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// `cnt`
    Total,
    /// `casual`
    Casual,
    /// `registered`
    Registered,
}

impl Metric {
    /// Value of this metric on `record`.
    pub fn of(self, record: &RentalRecord) -> u64 {
        u64::from(match self {
            Self::Total => record.total,
            Self::Casual => record.casual,
            Self::Registered => record.registered,
        })
    }
}

/// Derived table mapping a grouping key to a summed metric.
///
/// Entries are sorted by key and keys are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateTable<K> {
    entries: Vec<(K, u64)>,
}

impl<K: Ord + Copy> AggregateTable<K> {
    /// Sums values per key.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, u64)>,
    {
        let mut sums: BTreeMap<K, u64> = BTreeMap::new();
        for (key, value) in pairs {
            *sums.entry(key).or_insert(0) += value;
        }
        Self {
            entries: sums.into_iter().collect(),
        }
    }

    /// Reindexes the table over `domain`, filling absent keys with zero.
    ///
    /// Keys outside `domain` are dropped.
    #[must_use]
    pub fn reindex(&self, domain: &[K]) -> Self {
        let entries = domain
            .iter()
            .map(|key| (*key, self.get(key).unwrap_or(0)))
            .collect::<BTreeMap<_, _>>()
            .into_iter()
            .collect();
        Self { entries }
    }

    /// Sum stored under `key`.
    pub fn get(&self, key: &K) -> Option<u64> {
        self.entries
            .binary_search_by(|(k, _)| k.cmp(key))
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Sum of every entry.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, value)| value).sum()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Keys in order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    /// Values in key order.
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|(_, value)| *value)
    }

    /// Borrow the sorted entries.
    pub fn entries(&self) -> &[(K, u64)] {
        &self.entries
    }
}

impl<K> Default for AggregateTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

/// A group-by-then-sum operation over rental records.
pub trait Aggregation {
    /// Grouping key; one dimension or a tuple of two.
    type Key: Ord + Copy;

    /// Short name used in logs.
    const NAME: &'static str;

    /// Count column being summed.
    const METRIC: Metric;

    /// Grouping key of `record`, or `None` to skip it.
    fn key(&self, record: &RentalRecord) -> Option<Self::Key>;

    /// Groups `records` by [`Aggregation::key`] and sums the metric.
    fn group(&self, records: &[RentalRecord]) -> AggregateTable<Self::Key> {
        AggregateTable::from_pairs(
            records
                .iter()
                .filter_map(|record| Some((self.key(record)?, Self::METRIC.of(record)))),
        )
    }

    /// Produces the derived table.
    fn aggregate(&self, records: &[RentalRecord]) -> AggregateTable<Self::Key> {
        let table = self.group(records);
        debug!(aggregation = Self::NAME, keys = table.len(), "Aggregated records");
        table
    }
}

/// Total rentals per day.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyTotal;

impl Aggregation for DailyTotal {
    type Key = NaiveDate;
    const NAME: &'static str = "daily_total";
    const METRIC: Metric = Metric::Total;

    fn key(&self, record: &RentalRecord) -> Option<NaiveDate> {
        Some(record.date)
    }
}

/// Casual rentals per day.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyCasual;

impl Aggregation for DailyCasual {
    type Key = NaiveDate;
    const NAME: &'static str = "daily_casual";
    const METRIC: Metric = Metric::Casual;

    fn key(&self, record: &RentalRecord) -> Option<NaiveDate> {
        Some(record.date)
    }
}

/// Registered rentals per day.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyRegistered;

impl Aggregation for DailyRegistered {
    type Key = NaiveDate;
    const NAME: &'static str = "daily_registered";
    const METRIC: Metric = Metric::Registered;

    fn key(&self, record: &RentalRecord) -> Option<NaiveDate> {
        Some(record.date)
    }
}

/// Total rentals per (month, year).
#[derive(Debug, Clone, Copy, Default)]
pub struct YearlyByMonth;

impl Aggregation for YearlyByMonth {
    type Key = (Month, Year);
    const NAME: &'static str = "yearly_by_month";
    const METRIC: Metric = Metric::Total;

    fn key(&self, record: &RentalRecord) -> Option<(Month, Year)> {
        Some((record.month, record.year))
    }
}

/// Total rentals per month, always covering Jan to Dec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Monthly;

impl Aggregation for Monthly {
    type Key = Month;
    const NAME: &'static str = "monthly";
    const METRIC: Metric = Metric::Total;

    fn key(&self, record: &RentalRecord) -> Option<Month> {
        Some(record.month)
    }

    fn aggregate(&self, records: &[RentalRecord]) -> AggregateTable<Month> {
        let table = self.group(records).reindex(&Month::ALL);
        debug!(aggregation = Self::NAME, keys = table.len(), "Aggregated records");
        table
    }
}

/// Total rentals per (working day flag, season).
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkingDayBySeason;

impl Aggregation for WorkingDayBySeason {
    type Key = (bool, Season);
    const NAME: &'static str = "working_day_by_season";
    const METRIC: Metric = Metric::Total;

    fn key(&self, record: &RentalRecord) -> Option<(bool, Season)> {
        Some((record.working_day, record.season))
    }
}

/// Total rentals per (holiday flag, season).
#[derive(Debug, Clone, Copy, Default)]
pub struct HolidayBySeason;

impl Aggregation for HolidayBySeason {
    type Key = (bool, Season);
    const NAME: &'static str = "holiday_by_season";
    const METRIC: Metric = Metric::Total;

    fn key(&self, record: &RentalRecord) -> Option<(bool, Season)> {
        Some((record.holiday, record.season))
    }
}

/// Total rentals per (hour, weekday). Rows without an hour are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct HourByWeekday;

impl Aggregation for HourByWeekday {
    type Key = (u8, DayOfWeek);
    const NAME: &'static str = "hour_by_weekday";
    const METRIC: Metric = Metric::Total;

    fn key(&self, record: &RentalRecord) -> Option<(u8, DayOfWeek)> {
        record.hour.map(|hour| (hour, record.weekday))
    }
}

/// Headline counters shown above the charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryMetrics {
    /// Sum of casual rentals
    pub casual: u64,
    /// Sum of registered rentals
    pub registered: u64,
    /// Sum of all rentals
    pub total: u64,
}

/// All eight derived tables of one filtered record set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregates {
    /// Total rentals per day
    pub daily_total: AggregateTable<NaiveDate>,
    /// Casual rentals per day
    pub daily_casual: AggregateTable<NaiveDate>,
    /// Registered rentals per day
    pub daily_registered: AggregateTable<NaiveDate>,
    /// Total rentals per (month, year)
    pub yearly_by_month: AggregateTable<(Month, Year)>,
    /// Total rentals per month, Jan to Dec
    pub monthly: AggregateTable<Month>,
    /// Total rentals per (working day flag, season)
    pub working_day_by_season: AggregateTable<(bool, Season)>,
    /// Total rentals per (holiday flag, season)
    pub holiday_by_season: AggregateTable<(bool, Season)>,
    /// Total rentals per (hour, weekday)
    pub hour_by_weekday: AggregateTable<(u8, DayOfWeek)>,
}

impl Aggregates {
    /// Runs every aggregation over `records`.
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn compute(records: &[RentalRecord]) -> Self {
        Self {
            daily_total: DailyTotal.aggregate(records),
            daily_casual: DailyCasual.aggregate(records),
            daily_registered: DailyRegistered.aggregate(records),
            yearly_by_month: YearlyByMonth.aggregate(records),
            monthly: Monthly.aggregate(records),
            working_day_by_season: WorkingDayBySeason.aggregate(records),
            holiday_by_season: HolidayBySeason.aggregate(records),
            hour_by_weekday: HourByWeekday.aggregate(records),
        }
    }

    /// Casual, registered and total sums over the daily tables.
    pub fn summary(&self) -> SummaryMetrics {
        SummaryMetrics {
            casual: self.daily_casual.total(),
            registered: self.daily_registered.total(),
            total: self.daily_total.total(),
        }
    }
}
