//! Loads rental tables from disk and selects date ranges.

use bikeshare_common::test_utils::{
    date, generate_daily_records, hourly_record, records_to_csv, two_day_example, write_temp_csv,
};
use bikeshare_common::{DashboardError, DateRange};
use bikeshare_data::{filter_by_date, Dataset};

#[test]
fn test_load_round_trips_fixture_records() {
    let records = generate_daily_records(date(2011, 1, 1), 731);
    let file = write_temp_csv(&records_to_csv(&records));

    let dataset = Dataset::load(file.path()).unwrap();

    assert_eq!(dataset.records(), records.as_slice());
    assert_eq!(dataset.min_date(), date(2011, 1, 1));
    assert_eq!(dataset.max_date(), date(2012, 12, 31));
}

#[test]
fn test_load_mixed_daily_and_hourly_rows() {
    let mut records = two_day_example();
    records.push(hourly_record(date(2011, 1, 1), 0, 3, 13));
    records.push(hourly_record(date(2011, 1, 1), 1, 8, 32));
    let file = write_temp_csv(&records_to_csv(&records));

    let dataset = Dataset::load(file.path()).unwrap();

    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.hourly_len(), 2);
}

#[test]
fn test_extra_columns_are_ignored() {
    let file = write_temp_csv(
        "instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,temp,casual,registered,cnt\n\
         1,2011-01-01,1,0,1,,0,6,0,0.344167,331,654,985\n",
    );

    let dataset = Dataset::load(file.path()).unwrap();
    assert_eq!(dataset.records()[0].total, 985);
}

#[test]
fn test_missing_file_is_fatal() {
    let err = Dataset::load("/nonexistent/day.csv").unwrap_err();
    assert!(matches!(err, DashboardError::Data { .. }));
    assert!(err.to_string().contains("/nonexistent/day.csv"));
}

#[test]
fn test_missing_column_is_fatal() {
    let file = write_temp_csv("dteday,season,yr,mnth,hr,holiday,weekday,workingday,casual,registered\n");

    match Dataset::load(file.path()).unwrap_err() {
        DashboardError::Schema { column, .. } => assert_eq!(column.as_deref(), Some("cnt")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_full_bounds_select_everything() {
    let records = generate_daily_records(date(2011, 6, 1), 45);
    let dataset = Dataset::from_records(records.clone()).unwrap();

    let selected = filter_by_date(dataset.records(), dataset.date_bounds());
    assert_eq!(selected, records);

    let inverted = DateRange::new(dataset.max_date(), dataset.min_date());
    assert!(filter_by_date(dataset.records(), inverted).is_empty());
}
