//! Fixed-window aggregation of event dates.

use crate::dates::parse_sorted_dates;
use crate::error::{DataError, DataResult};
use crate::frame::DataFrame;
use chrono::{Duration, NaiveDate};
use tracing::{debug, info, instrument};

/// Default window length in days.
pub const DAYS_PER_WEEK: u32 = 7;

/// Event counts per consecutive window, anchored at the first event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyCounts {
    start: NaiveDate,
    window_days: u32,
    counts: Vec<u32>,
}

impl WeeklyCounts {
    /// Date of the first event; window 0 starts here.
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Window length in days.
    pub const fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Raw counts, one per window.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Counts as plot values, one per window.
    pub fn values(&self) -> Vec<f64> {
        self.counts.iter().map(|&c| f64::from(c)).collect()
    }

    /// `(window index, count)` pairs for a time-series plot.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as f64, f64::from(c)))
            .collect()
    }

    /// First day of window `index`.
    pub fn week_start(&self, index: usize) -> Option<NaiveDate> {
        if index >= self.counts.len() {
            return None;
        }
        let offset = i64::try_from(index).ok()? * i64::from(self.window_days);
        self.start.checked_add_signed(Duration::days(offset))
    }

    /// Total number of events counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Number of windows.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false for a successfully aggregated series.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Buckets sorted dates into consecutive fixed-length windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyAggregator {
    window_days: u32,
}

impl Default for WeeklyAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl WeeklyAggregator {
    /// Seven-day windows.
    pub const fn new() -> Self {
        Self {
            window_days: DAYS_PER_WEEK,
        }
    }

    /// Windows of `days` days. Zero is rejected.
    pub fn with_window_days(days: u32) -> DataResult<Self> {
        if days == 0 {
            return Err(DataError::InvalidWindow(days));
        }
        Ok(Self { window_days: days })
    }

    /// Window length in days.
    pub const fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Counts dates per window.
    ///
    /// The number of windows is `floor(span_hours / window_hours) + 1`, where
    /// the span runs from the first to the last date. Dates must be ascending.
    #[instrument(skip(self, dates), fields(count = dates.len(), window_days = self.window_days))]
    pub fn aggregate(&self, dates: &[NaiveDate]) -> DataResult<WeeklyCounts> {
        let (first, last) = match (dates.first(), dates.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(DataError::NoDates),
        };

        if let Some(index) = dates.windows(2).position(|pair| pair[1] < pair[0]) {
            return Err(DataError::UnsortedDates { index: index + 1 });
        }

        let window = Duration::days(i64::from(self.window_days));
        let span_hours = (last - first).num_hours();
        let window_hours = window.num_hours();
        let buckets = usize::try_from(span_hours / window_hours).unwrap_or(0) + 1;

        let mut counts = vec![0u32; buckets];
        let mut anchor = first;
        let mut bucket = 0;
        for &date in dates {
            while date - anchor >= window {
                anchor += window;
                bucket += 1;
            }
            counts[bucket] += 1;
        }

        debug!(buckets, "Aggregated dates into windows");
        Ok(WeeklyCounts {
            start: first,
            window_days: self.window_days,
            counts,
        })
    }

    /// Parses the date column of a frame, sorts it and aggregates it.
    pub fn aggregate_column(&self, frame: &DataFrame, column: &str) -> DataResult<WeeklyCounts> {
        let dates = parse_sorted_dates(frame.str_column(column)?)?;
        let weekly = self.aggregate(&dates)?;
        info!(
            windows = weekly.len(),
            events = weekly.total(),
            start = %weekly.start(),
            "Aggregated '{column}' into {}-day windows",
            self.window_days
        );
        Ok(weekly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shootings_common::test_utils::{dates_from_offsets, mock_date};

    #[test]
    fn test_regression_buckets() {
        let dates = dates_from_offsets(mock_date(2015, 1, 2), &[0, 1, 8, 9, 20]);
        let weekly = WeeklyAggregator::new().aggregate(&dates).unwrap();
        assert_eq!(weekly.counts(), &[2, 2, 1]);
        assert_eq!(weekly.start(), mock_date(2015, 1, 2));
    }

    #[test]
    fn test_single_date_is_one_bucket() {
        let weekly = WeeklyAggregator::new()
            .aggregate(&[mock_date(2016, 6, 1)])
            .unwrap();
        assert_eq!(weekly.counts(), &[1]);
        assert_eq!(weekly.points(), vec![(0.0, 1.0)]);
    }

    #[test]
    fn test_window_boundary_starts_next_bucket() {
        let dates = dates_from_offsets(mock_date(2015, 1, 1), &[0, 6, 7, 14]);
        let weekly = WeeklyAggregator::new().aggregate(&dates).unwrap();
        assert_eq!(weekly.counts(), &[2, 1, 1]);
    }

    #[test]
    fn test_empty_windows_are_zero() {
        let dates = dates_from_offsets(mock_date(2015, 1, 1), &[0, 30]);
        let weekly = WeeklyAggregator::new().aggregate(&dates).unwrap();
        assert_eq!(weekly.counts(), &[1, 0, 0, 0, 1]);
        assert_eq!(weekly.week_start(4), Some(mock_date(2015, 1, 29)));
        assert_eq!(weekly.week_start(5), None);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            WeeklyAggregator::new().aggregate(&[]),
            Err(DataError::NoDates)
        ));
    }

    #[test]
    fn test_unsorted_input() {
        let dates = dates_from_offsets(mock_date(2015, 1, 1), &[0, 5, 3]);
        assert!(matches!(
            WeeklyAggregator::new().aggregate(&dates),
            Err(DataError::UnsortedDates { index: 2 })
        ));
    }

    #[test]
    fn test_custom_window() {
        assert!(WeeklyAggregator::with_window_days(0).is_err());
        let daily = WeeklyAggregator::with_window_days(1).unwrap();
        let dates = dates_from_offsets(mock_date(2015, 1, 1), &[0, 0, 2]);
        assert_eq!(daily.aggregate(&dates).unwrap().counts(), &[2, 0, 1]);
    }

    proptest! {
        #[test]
        fn prop_every_date_is_counted(mut offsets in prop::collection::vec(0i64..400, 1..60)) {
            offsets.sort_unstable();
            let dates = dates_from_offsets(mock_date(2015, 1, 1), &offsets);
            let weekly = WeeklyAggregator::new().aggregate(&dates).unwrap();

            prop_assert_eq!(weekly.total(), offsets.len() as u64);
            let span = offsets[offsets.len() - 1] - offsets[0];
            prop_assert_eq!(weekly.len() as i64, span / 7 + 1);
        }
    }
}
