//! Integration tests for shootings-data crate.

use shootings_common::test_utils::{create_temp_dir, dataset_fixtures, mock_date};
use shootings_config::Config;
use shootings_data::{summarize, DataError, TableLoader, WeeklyAggregator};
use std::fs;

#[test]
fn test_sample_csv_end_to_end() {
    let tmp = create_temp_dir();
    let path = tmp.path().join("wp-police-shootings.csv");
    fs::write(&path, dataset_fixtures::sample_csv()).unwrap();

    let frame = TableLoader::shootings().load_path(&path).unwrap();
    let weekly = WeeklyAggregator::new().aggregate_column(&frame, "date").unwrap();

    assert_eq!(weekly.counts(), &dataset_fixtures::SAMPLE_WEEKLY_COUNTS);
    assert_eq!(weekly.start(), mock_date(2015, 1, 2));
    assert_eq!(weekly.total(), 10);
}

#[test]
fn test_unsorted_rows_are_sorted_before_aggregation() {
    let mut rows = dataset_fixtures::SAMPLE_ROWS.to_vec();
    rows.reverse();
    let csv = dataset_fixtures::csv_from_rows(&rows);

    let frame = TableLoader::shootings().load_reader(csv.as_bytes()).unwrap();
    let weekly = WeeklyAggregator::new().aggregate_column(&frame, "date").unwrap();
    assert_eq!(weekly.counts(), &dataset_fixtures::SAMPLE_WEEKLY_COUNTS);
}

#[test]
fn test_bad_date_aborts_aggregation() {
    let mut rows = dataset_fixtures::SAMPLE_ROWS.to_vec();
    rows.push("99,Bad Date,2015-02-31,shot,gun,40,M,W,Nowhere,NV,False,attack,Not fleeing,False");
    let csv = dataset_fixtures::csv_from_rows(&rows);

    let frame = TableLoader::shootings().load_reader(csv.as_bytes()).unwrap();
    let err = WeeklyAggregator::new()
        .aggregate_column(&frame, "date")
        .unwrap_err();
    assert!(matches!(err, DataError::InvalidDate { row: 10, .. }));
}

#[test]
fn test_default_summary_columns() {
    let config = Config::default();
    let frame = TableLoader::shootings()
        .load_reader(dataset_fixtures::sample_csv().as_bytes())
        .unwrap();

    let summaries = summarize(&frame, &config.analysis.summary_columns).unwrap();
    let columns: Vec<_> = summaries.iter().map(|s| s.column.as_str()).collect();
    assert_eq!(columns, ["manner_of_death", "threat_level", "flee", "armed", "race"]);
    assert_eq!(summaries[0].uniques, vec!["shot", "shot and Tasered"]);
}
