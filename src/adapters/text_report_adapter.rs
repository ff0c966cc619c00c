//! Plain-text report adapter.
//!
//! Renders the headline metrics the way the strategy's summary has always
//! been read (percentages, two decimals), plus the list of position changes
//! a plotting front end would mark as buy/sell points.

use crate::domain::error::SmacrossError;
use crate::domain::performance::PerformanceReport;
use crate::domain::price::PriceSeries;
use crate::domain::signal::{CrossoverSignals, Position};
use crate::ports::report_port::ReportPort;
use std::fs;

pub struct TextReportAdapter;

fn pct(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

fn marker_label(position: Position) -> &'static str {
    match position {
        Position::Long => "buy",
        Position::Short => "sell",
        Position::Flat => "exit",
    }
}

/// Render the full report to a string. Separated from [`ReportPort::write`]
/// so the CLI can print to stdout when no output path is configured.
pub fn render(
    ticker: &str,
    prices: &PriceSeries,
    crossover: &CrossoverSignals,
    report: &PerformanceReport,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "SMA crossover backtest: {} (short={}, long={})\n",
        ticker, crossover.short_ma.window, crossover.long_ma.window
    ));
    if let (Some(first), Some(last)) = (prices.points().first(), prices.points().last()) {
        out.push_str(&format!(
            "Period: {} to {} ({} points)\n",
            first.date,
            last.date,
            prices.len()
        ));
    }
    out.push('\n');

    if report.insufficient_data {
        out.push_str(
            "The strategy never held a position over this period; \
             return and win-rate figures are not meaningful.\n",
        );
    }

    out.push_str(&format!(
        "Cumulative Return: {}\n",
        pct(report.cumulative_return)
    ));
    out.push_str(&format!("Maximum Drawdown: {}\n", pct(report.max_drawdown)));
    match report.win_rate {
        Some(rate) => out.push_str(&format!("Win Rate: {}\n", pct(rate))),
        None => out.push_str("Win Rate: n/a (no trades)\n"),
    }

    let changes = crossover.signals.transitions();
    if !changes.is_empty() {
        out.push_str("\nSignal changes:\n");
        for change in changes {
            let close = prices.points()[change.index].close;
            out.push_str(&format!(
                "  {}  {:<4}  @ {:.2}\n",
                change.date,
                marker_label(change.position),
                close
            ));
        }
    }

    out
}

impl ReportPort for TextReportAdapter {
    fn write(
        &self,
        ticker: &str,
        prices: &PriceSeries,
        crossover: &CrossoverSignals,
        report: &PerformanceReport,
        output_path: &str,
    ) -> Result<(), SmacrossError> {
        let content = render(ticker, prices, crossover, report);
        fs::write(output_path, content)?;
        Ok(())
    }
}
