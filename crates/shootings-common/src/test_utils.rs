//! Test utilities and shared fixtures.
//!
//! Available to other crates through the `testing` feature.

use chrono::NaiveDate;
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call multiple times.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Test fixture for a calendar date.
pub fn mock_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Dates at the given day offsets from `start`, in the given order.
pub fn dates_from_offsets(start: NaiveDate, offsets: &[i64]) -> Vec<NaiveDate> {
    offsets
        .iter()
        .map(|days| start + chrono::Duration::days(*days))
        .collect()
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Dataset fixtures shaped like the Washington Post CSV.
pub mod dataset_fixtures {
    /// Header row of the shootings CSV.
    pub const HEADER: &str = "id,name,date,manner_of_death,armed,age,gender,race,city,state,signs_of_mental_illness,threat_level,flee,body_camera";

    /// Ten synthetic rows spread over five weeks starting 2015-01-02.
    ///
    /// Weekly buckets anchored at the first date: `[4, 2, 1, 1, 2]`.
    pub const SAMPLE_ROWS: [&str; 10] = [
        "3,Alex Doe,2015-01-02,shot,gun,53,M,A,Shelton,WA,True,attack,Not fleeing,False",
        "4,Sam Roe,2015-01-02,shot,gun,47,M,W,Aloha,OR,False,attack,Not fleeing,False",
        "5,\"Lee, Jr.\",2015-01-03,shot and Tasered,unarmed,23,M,H,Wichita,KS,False,other,Not fleeing,False",
        "8,Kim Poe,2015-01-04,shot,toy weapon,32,M,W,San Francisco,CA,True,attack,Not fleeing,False",
        "9,Jo Moe,2015-01-09,shot,nail gun,,M,H,Evans,CO,False,attack,Not fleeing,False",
        "11,Pat Coe,2015-01-10,shot,gun,18,F,W,Guthrie,OK,False,attack,Not fleeing,False",
        "13,Ray Foe,2015-01-22,shot,gun,22,M,H,Chandler,AZ,False,attack,Car,False",
        "15,Val Hoe,2015-01-23,shot,gun,35,M,W,Assaria,KS,False,attack,Not fleeing,False",
        "16,Ash Joe,2015-01-30,shot,unarmed,34,F,W,Burlington,IA,False,undetermined,Foot,True",
        "17,Max Koe,2015-02-05,shot,knife,47,M,B,Knoxville,PA,False,other,Not fleeing,False",
    ];

    /// Expected weekly buckets for [`SAMPLE_ROWS`].
    pub const SAMPLE_WEEKLY_COUNTS: [u32; 5] = [4, 2, 1, 1, 2];

    /// The sample rows joined with the header into a CSV document.
    pub fn sample_csv() -> String {
        csv_from_rows(&SAMPLE_ROWS)
    }

    /// Joins arbitrary rows under the standard header.
    pub fn csv_from_rows(rows: &[&str]) -> String {
        let mut csv = String::from(HEADER);
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        csv.push('\n');
        csv
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// A minimal valid configuration as YAML.
    pub fn minimal_config_yaml() -> &'static str {
        r#"
sources:
  data_dir: "data"
  datasets:
    - name: "wapo"
      url: "https://raw.githubusercontent.com/washingtonpost/data-police-shootings/master/fatal-police-shootings-data.csv"
      file_name: "wp-police-shootings.csv"
      format: "csv"

figures:
  output_dir: "reports/figures"
  dpi: 72
"#
    }

    /// The same minimal configuration expressed as TOML.
    pub fn minimal_config_toml() -> &'static str {
        r#"
[sources]
data_dir = "data"

[[sources.datasets]]
name = "wapo"
url = "https://raw.githubusercontent.com/washingtonpost/data-police-shootings/master/fatal-police-shootings-data.csv"
file_name = "wp-police-shootings.csv"
format = "csv"

[figures]
output_dir = "reports/figures"
dpi = 72
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_init_logging_multiple_calls() {
        init_test_logging();
        init_test_logging();
    }

    #[test]
    fn test_mock_date() {
        let date = mock_date(2015, 1, 2);
        assert_eq!(date.year(), 2015);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 2);
    }

    #[test]
    fn test_dates_from_offsets() {
        let start = mock_date(2015, 1, 30);
        let dates = dates_from_offsets(start, &[0, 2, -1]);
        assert_eq!(dates, vec![start, mock_date(2015, 2, 1), mock_date(2015, 1, 29)]);
    }

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0001, 0.001);
        assert_approx_eq(1.0, 0.9999, 0.001);
    }

    #[test]
    #[should_panic]
    fn test_assert_approx_eq_fails() {
        assert_approx_eq(1.0, 1.1, 0.05);
    }

    #[test]
    fn test_sample_csv_shape() {
        let csv = dataset_fixtures::sample_csv();
        assert_eq!(csv.lines().count(), 11);
        assert!(csv.starts_with("id,name,date"));
        let total: u32 = dataset_fixtures::SAMPLE_WEEKLY_COUNTS.iter().sum();
        assert_eq!(total as usize, dataset_fixtures::SAMPLE_ROWS.len());
    }
}
