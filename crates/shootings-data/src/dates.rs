//! Event date parsing.

use crate::error::{DataError, DataResult};
use chrono::NaiveDate;

/// Format of the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses `YYYY-MM-DD` strings, failing on the first malformed or empty cell.
pub fn parse_dates<S: AsRef<str>>(values: &[S]) -> DataResult<Vec<NaiveDate>> {
    values
        .iter()
        .enumerate()
        .map(|(row, value)| {
            let value = value.as_ref();
            NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
                DataError::InvalidDate {
                    row,
                    value: value.to_string(),
                }
            })
        })
        .collect()
}

/// Parses and sorts dates ascending, ready for aggregation.
pub fn parse_sorted_dates<S: AsRef<str>>(values: &[S]) -> DataResult<Vec<NaiveDate>> {
    let mut dates = parse_dates(values)?;
    dates.sort_unstable();
    Ok(dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shootings_common::test_utils::mock_date;

    #[test]
    fn test_parse_dates() {
        let dates = parse_dates(&["2015-01-02", "2016-02-29"]).unwrap();
        assert_eq!(dates, vec![mock_date(2015, 1, 2), mock_date(2016, 2, 29)]);
    }

    #[test]
    fn test_invalid_date_fails_fast() {
        for bad in ["2015-13-01", "", "2015/01/02", "2015-02-30"] {
            let err = parse_dates(&["2015-01-02", bad]).unwrap_err();
            assert!(
                matches!(err, DataError::InvalidDate { row: 1, ref value } if value == bad),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_sorted_dates() {
        let dates = parse_sorted_dates(&["2015-01-09", "2015-01-02", "2015-01-04"]).unwrap();
        assert_eq!(
            dates,
            vec![mock_date(2015, 1, 2), mock_date(2015, 1, 4), mock_date(2015, 1, 9)]
        );
    }
}
