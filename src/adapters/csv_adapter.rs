//! CSV file data adapter.
//!
//! Reads `{ticker}.csv` files with `date,close` rows. This is the local
//! stand-in for a market-data provider: whatever fetched the data is
//! expected to have written one file per ticker.

use crate::domain::error::SmacrossError;
use crate::domain::price::{PricePoint, PriceSeries};
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, ticker: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", ticker))
    }

    fn read_points(&self, ticker: &str) -> Result<Vec<PricePoint>, SmacrossError> {
        let path = self.csv_path(ticker);
        let content = fs::read_to_string(&path).map_err(|e| SmacrossError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut points = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| SmacrossError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let date_str = record.get(0).ok_or_else(|| SmacrossError::Data {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                SmacrossError::Data {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            let close: f64 = record
                .get(1)
                .ok_or_else(|| SmacrossError::Data {
                    reason: "missing close column".into(),
                })?
                .parse()
                .map_err(|e| SmacrossError::Data {
                    reason: format!("invalid close value: {}", e),
                })?;

            points.push(PricePoint { date, close });
        }

        points.sort_by_key(|p| p.date);
        Ok(points)
    }
}

impl DataPort for CsvAdapter {
    fn fetch_closes(
        &self,
        ticker: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PriceSeries, SmacrossError> {
        let mut points = self.read_points(ticker)?;
        points.retain(|p| p.date >= start_date && p.date <= end_date);

        if points.is_empty() {
            return Err(SmacrossError::NoData {
                ticker: ticker.to_string(),
            });
        }

        PriceSeries::new(points)
    }

    fn list_tickers(&self) -> Result<Vec<String>, SmacrossError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| SmacrossError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut tickers = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SmacrossError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            if let Some(ticker) = name_str.strip_suffix(".csv") {
                tickers.push(ticker.to_string());
            }
        }

        tickers.sort();
        Ok(tickers)
    }

    fn data_range(
        &self,
        ticker: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, SmacrossError> {
        if !self.csv_path(ticker).exists() {
            return Ok(None);
        }
        let points = self.read_points(ticker)?;
        match (points.first(), points.last()) {
            (Some(first), Some(last)) => Ok(Some((first.date, last.date, points.len()))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_data() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().to_path_buf();

        let csv_content = "date,close\n\
            2024-01-17,115.0\n\
            2024-01-15,105.0\n\
            2024-01-16,110.0\n";

        fs::write(path.join("SPY.csv"), csv_content).unwrap();
        fs::write(path.join("QQQ.csv"), "date,close\n").unwrap();
        fs::write(path.join("notes.txt"), "not a data file").unwrap();

        (dir, path)
    }

    #[test]
    fn fetch_closes_sorts_and_parses() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let start = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 17).unwrap();
        let series = adapter.fetch_closes("SPY", start, end).unwrap();

        assert_eq!(series.len(), 3);
        let closes: Vec<f64> = series.closes().collect();
        assert_eq!(closes, vec![105.0, 110.0, 115.0]);
    }

    #[test]
    fn fetch_closes_filters_by_date() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let day = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap();
        let series = adapter.fetch_closes("SPY", day, day).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.points()[0].close, 110.0);
    }

    #[test]
    fn fetch_closes_missing_file_is_an_error() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let result = adapter.fetch_closes("XYZ", start, end);

        assert!(matches!(result, Err(SmacrossError::Data { .. })));
    }

    #[test]
    fn fetch_closes_empty_range_is_no_data() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        let result = adapter.fetch_closes("SPY", start, end);

        assert!(matches!(result, Err(SmacrossError::NoData { ticker }) if ticker == "SPY"));
    }

    #[test]
    fn fetch_closes_rejects_bad_close() {
        let (_dir, path) = setup_test_data();
        fs::write(path.join("BAD.csv"), "date,close\n2024-01-15,oops\n").unwrap();
        let adapter = CsvAdapter::new(path);

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let result = adapter.fetch_closes("BAD", start, end);

        assert!(matches!(result, Err(SmacrossError::Data { .. })));
    }

    #[test]
    fn list_tickers_skips_non_csv_files() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let tickers = adapter.list_tickers().unwrap();
        assert_eq!(tickers, vec!["QQQ", "SPY"]);
    }

    #[test]
    fn data_range_reports_bounds_and_count() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);

        let range = adapter.data_range("SPY").unwrap().unwrap();
        assert_eq!(range.0, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(range.1, NaiveDate::from_ymd_opt(2024, 1, 17).unwrap());
        assert_eq!(range.2, 3);
    }

    #[test]
    fn data_range_none_for_missing_ticker() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);
        assert!(adapter.data_range("XYZ").unwrap().is_none());
    }

    #[test]
    fn data_range_none_for_empty_file() {
        let (_dir, path) = setup_test_data();
        let adapter = CsvAdapter::new(path);
        assert!(adapter.data_range("QQQ").unwrap().is_none());
    }
}
