//! Report presentation port trait.

use crate::domain::error::SmacrossError;
use crate::domain::performance::PerformanceReport;
use crate::domain::price::PriceSeries;
use crate::domain::signal::CrossoverSignals;

/// Port for presenting a finished run: the performance report plus the
/// signal series a presenter needs for buy/sell markers.
pub trait ReportPort {
    fn write(
        &self,
        ticker: &str,
        prices: &PriceSeries,
        crossover: &CrossoverSignals,
        report: &PerformanceReport,
        output_path: &str,
    ) -> Result<(), SmacrossError>;
}
