//! Risk/return statistics reduced from a strategy return series.

use crate::domain::returns::ReturnSeries;

/// Summary statistics for one strategy run. Derived and immutable; rerun
/// `analyze` rather than mutating a report in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceReport {
    /// Compounded total return over the whole series.
    pub cumulative_return: f64,
    /// Most negative point of the drawdown curve, always <= 0.
    pub max_drawdown: f64,
    /// Winning fraction of steps with a defined strategy return. `None` when
    /// the strategy never held a position, which is not the same as losing.
    pub win_rate: Option<f64>,
    /// Set when no step had a defined strategy return; the scalar metrics
    /// above are placeholders in that case and should not be interpreted.
    pub insufficient_data: bool,
    /// Compounded return through each step, one entry per input step.
    pub equity_curve: Vec<f64>,
    /// Distance below the running equity peak at each step, <= 0 everywhere.
    pub drawdown_curve: Vec<f64>,
}

/// Reduce a return series to summary statistics.
///
/// Undefined strategy returns compound as no-op steps, so warm-up and flat
/// stretches hold the equity curve level instead of distorting it.
pub fn analyze(returns: &ReturnSeries) -> PerformanceReport {
    let mut equity_curve = Vec::with_capacity(returns.len());
    let mut drawdown_curve = Vec::with_capacity(returns.len());

    let mut wealth = 1.0_f64;
    let mut peak = 1.0_f64;
    let mut max_drawdown = 0.0_f64;
    let mut defined = 0usize;
    let mut wins = 0usize;

    for point in &returns.points {
        if let Some(r) = point.strategy {
            wealth *= 1.0 + r;
            defined += 1;
            if r > 0.0 {
                wins += 1;
            }
        }
        if wealth > peak {
            peak = wealth;
        }

        let drawdown = wealth / peak - 1.0;
        if drawdown < max_drawdown {
            max_drawdown = drawdown;
        }

        equity_curve.push(wealth - 1.0);
        drawdown_curve.push(drawdown);
    }

    let cumulative_return = equity_curve.last().copied().unwrap_or(0.0);
    let win_rate = if defined > 0 {
        Some(wins as f64 / defined as f64)
    } else {
        None
    };

    PerformanceReport {
        cumulative_return,
        max_drawdown,
        win_rate,
        insufficient_data: defined == 0,
        equity_curve,
        drawdown_curve,
    }
}
