//! Close-price series, the pipeline's input type.

use crate::domain::error::SmacrossError;
use chrono::NaiveDate;

/// One daily close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// An ordered close-price series. Dates are strictly increasing and every
/// close is positive; both are enforced by the constructor, so downstream
/// stages can index by position without re-checking.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Result<Self, SmacrossError> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(SmacrossError::Data {
                    reason: format!(
                        "dates must be strictly increasing: {} followed by {}",
                        pair[0].date, pair[1].date
                    ),
                });
            }
        }
        if let Some(bad) = points.iter().find(|p| !(p.close > 0.0)) {
            return Err(SmacrossError::Data {
                reason: format!("close on {} is {}, expected > 0", bad.date, bad.close),
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }

    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, close: f64) -> PricePoint {
        PricePoint {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            close,
        }
    }

    #[test]
    fn accepts_ordered_positive_closes() {
        let series = PriceSeries::new(vec![
            point("2024-01-01", 100.0),
            point("2024-01-02", 101.5),
            point("2024-01-05", 99.0),
        ])
        .unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.points()[1].close, 101.5);
    }

    #[test]
    fn accepts_empty_series() {
        let series = PriceSeries::new(vec![]).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn rejects_duplicate_dates() {
        let result = PriceSeries::new(vec![
            point("2024-01-01", 100.0),
            point("2024-01-01", 101.0),
        ]);
        assert!(matches!(result, Err(SmacrossError::Data { .. })));
    }

    #[test]
    fn rejects_out_of_order_dates() {
        let result = PriceSeries::new(vec![
            point("2024-01-02", 100.0),
            point("2024-01-01", 101.0),
        ]);
        assert!(matches!(result, Err(SmacrossError::Data { .. })));
    }

    #[test]
    fn rejects_non_positive_close() {
        let result = PriceSeries::new(vec![point("2024-01-01", 0.0)]);
        assert!(matches!(result, Err(SmacrossError::Data { .. })));

        let result = PriceSeries::new(vec![point("2024-01-01", -5.0)]);
        assert!(matches!(result, Err(SmacrossError::Data { .. })));
    }

    #[test]
    fn rejects_nan_close() {
        let result = PriceSeries::new(vec![point("2024-01-01", f64::NAN)]);
        assert!(matches!(result, Err(SmacrossError::Data { .. })));
    }

    #[test]
    fn iterators_follow_point_order() {
        let series = PriceSeries::new(vec![
            point("2024-01-01", 100.0),
            point("2024-01-02", 102.0),
        ])
        .unwrap();
        let dates: Vec<NaiveDate> = series.dates().collect();
        let closes: Vec<f64> = series.closes().collect();
        assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(closes, vec![100.0, 102.0]);
    }
}
