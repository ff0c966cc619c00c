//! Crossover signal generation.
//!
//! A long position is held while the short-window SMA sits above the
//! long-window SMA, a short position while it sits below. No position is
//! taken before both windows are full, or on the knife edge where the two
//! averages are exactly equal.

use crate::domain::error::SmacrossError;
use crate::domain::moving_average::{simple_moving_average, MaSeries};
use crate::domain::price::PriceSeries;
use chrono::NaiveDate;

/// Discrete position held at one time step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Short,
    Flat,
    Long,
}

impl Position {
    /// Multiplier applied to a raw return realized under this position.
    pub fn factor(self) -> f64 {
        match self {
            Position::Short => -1.0,
            Position::Flat => 0.0,
            Position::Long => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalPoint {
    pub date: NaiveDate,
    pub position: Position,
}

#[derive(Debug, Clone)]
pub struct SignalSeries {
    pub points: Vec<SignalPoint>,
}

/// A step where the held position differs from the step before, i.e. where
/// a presenter would draw a buy or sell marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalChange {
    pub index: usize,
    pub date: NaiveDate,
    pub position: Position,
}

impl SignalSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn position_at(&self, index: usize) -> Option<Position> {
        self.points.get(index).map(|p| p.position)
    }

    /// Steps where the position changed. The leading flat warm-up region
    /// produces no change; the first entry is the first non-flat position.
    pub fn transitions(&self) -> Vec<SignalChange> {
        let mut changes = Vec::new();
        let mut held = Position::Flat;
        for (index, point) in self.points.iter().enumerate() {
            if point.position != held {
                changes.push(SignalChange {
                    index,
                    date: point.date,
                    position: point.position,
                });
                held = point.position;
            }
        }
        changes
    }
}

/// The full output of signal generation: both moving averages (for
/// presentation) and the derived position series.
#[derive(Debug, Clone)]
pub struct CrossoverSignals {
    pub short_ma: MaSeries,
    pub long_ma: MaSeries,
    pub signals: SignalSeries,
}

/// Derive a position series from two SMA windows over `prices`.
///
/// The position at each step uses only closes at or before that step; a
/// signal computed from today's close is acted on tomorrow (see
/// `returns::compute`).
pub fn generate(
    prices: &PriceSeries,
    short_window: usize,
    long_window: usize,
) -> Result<CrossoverSignals, SmacrossError> {
    if short_window == 0 {
        return Err(SmacrossError::Configuration {
            reason: "short_window must be at least 1".into(),
        });
    }
    if short_window >= long_window {
        return Err(SmacrossError::Configuration {
            reason: format!(
                "short_window ({short_window}) must be less than long_window ({long_window})"
            ),
        });
    }
    if long_window >= prices.len() {
        return Err(SmacrossError::Configuration {
            reason: format!(
                "long_window ({long_window}) must be smaller than the series length ({})",
                prices.len()
            ),
        });
    }

    let short_ma = simple_moving_average(prices, short_window);
    let long_ma = simple_moving_average(prices, long_window);

    let points = prices
        .points()
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let position = match (short_ma.value_at(i), long_ma.value_at(i)) {
                (Some(short), Some(long)) if short > long => Position::Long,
                (Some(short), Some(long)) if short < long => Position::Short,
                _ => Position::Flat,
            };
            SignalPoint {
                date: point.date,
                position,
            }
        })
        .collect();

    Ok(CrossoverSignals {
        short_ma,
        long_ma,
        signals: SignalSeries { points },
    })
}
