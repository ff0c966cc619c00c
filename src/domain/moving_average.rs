//! Simple moving average over a close-price series.
//!
//! O(n) running-sum implementation. The first (window - 1) points carry no
//! value: the window is not yet full, and those points stay in the series so
//! positional alignment with the owning price series is preserved.

use crate::domain::price::PriceSeries;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaPoint {
    pub date: NaiveDate,
    /// `None` during warm-up, never a sentinel zero.
    pub value: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct MaSeries {
    pub window: usize,
    pub points: Vec<MaPoint>,
}

impl MaSeries {
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.points.get(index).and_then(|p| p.value)
    }
}

/// Compute the simple moving average of `prices` over `window` steps.
/// Callers validate the window against the series length; a window of 0 or
/// longer than the series simply yields a series with no defined values.
pub fn simple_moving_average(prices: &PriceSeries, window: usize) -> MaSeries {
    let mut points = Vec::with_capacity(prices.len());
    if window == 0 {
        points.extend(prices.points().iter().map(|p| MaPoint {
            date: p.date,
            value: None,
        }));
        return MaSeries { window, points };
    }

    let mut window_sum = 0.0_f64;
    for (i, point) in prices.points().iter().enumerate() {
        window_sum += point.close;
        if i >= window {
            window_sum -= prices.points()[i - window].close;
        }

        let value = if i >= window - 1 {
            Some(window_sum / window as f64)
        } else {
            None
        };

        points.push(MaPoint {
            date: point.date,
            value,
        });
    }

    MaSeries { window, points }
}
