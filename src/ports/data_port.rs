//! Market-data port trait.
//!
//! The pipeline never fetches prices itself; an adapter behind this trait
//! supplies an already-ordered, validated close series for a ticker.

use crate::domain::error::SmacrossError;
use crate::domain::price::PriceSeries;
use chrono::NaiveDate;

pub trait DataPort {
    fn fetch_closes(
        &self,
        ticker: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PriceSeries, SmacrossError>;

    fn list_tickers(&self) -> Result<Vec<String>, SmacrossError>;

    /// First date, last date, and point count of the stored data for a
    /// ticker, or `None` when nothing is stored.
    fn data_range(
        &self,
        ticker: &str,
    ) -> Result<Option<(NaiveDate, NaiveDate, usize)>, SmacrossError>;
}
