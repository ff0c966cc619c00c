//! Per-step raw and strategy returns.
//!
//! The strategy return at step t applies the position held at t-1 to the
//! price change realized at t. The one-step lag is what keeps the metric
//! honest: a signal computed from today's close cannot be traded until the
//! next step.

use crate::domain::error::SmacrossError;
use crate::domain::price::PriceSeries;
use crate::domain::signal::{Position, SignalSeries};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnPoint {
    pub date: NaiveDate,
    /// Simple percent change from the prior close. Undefined at the first
    /// step, where there is no prior close.
    pub raw: Option<f64>,
    /// `raw × position[t-1]`. Undefined at the first step and on steps where
    /// the prior position was flat: the strategy was not in the market, so
    /// there is no realized trade return to count.
    pub strategy: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct ReturnSeries {
    pub points: Vec<ReturnPoint>,
}

impl ReturnSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn strategy_returns(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.points.iter().map(|p| p.strategy)
    }
}

/// Combine a price series with its signal series into per-step returns.
///
/// The two inputs must have been produced from the same series; any length
/// or date mismatch is a defect upstream and fails loudly.
pub fn compute(
    prices: &PriceSeries,
    signals: &SignalSeries,
) -> Result<ReturnSeries, SmacrossError> {
    if prices.len() != signals.len() {
        return Err(SmacrossError::Alignment {
            reason: format!(
                "price series has {} points, signal series has {}",
                prices.len(),
                signals.len()
            ),
        });
    }
    for (price, signal) in prices.points().iter().zip(&signals.points) {
        if price.date != signal.date {
            return Err(SmacrossError::Alignment {
                reason: format!(
                    "price dated {} paired with signal dated {}",
                    price.date, signal.date
                ),
            });
        }
    }

    let points = prices
        .points()
        .iter()
        .enumerate()
        .map(|(i, point)| {
            if i == 0 {
                return ReturnPoint {
                    date: point.date,
                    raw: None,
                    strategy: None,
                };
            }

            let raw = point.close / prices.points()[i - 1].close - 1.0;
            let strategy = match signals.points[i - 1].position {
                Position::Flat => None,
                held => Some(raw * held.factor()),
            };

            ReturnPoint {
                date: point.date,
                raw: Some(raw),
                strategy,
            }
        })
        .collect();

    Ok(ReturnSeries { points })
}
