//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::{self, TextReportAdapter};
use crate::domain::config_validation::{
    parse_date, validate_data_config, validate_strategy_config, DEFAULT_LONG_WINDOW,
    DEFAULT_SHORT_WINDOW,
};
use crate::domain::error::SmacrossError;
use crate::domain::performance::{self, PerformanceReport};
use crate::domain::price::PriceSeries;
use crate::domain::returns;
use crate::domain::signal::{self, CrossoverSignals};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;
use chrono::NaiveDate;

#[derive(Parser, Debug)]
#[command(name = "smacross", about = "SMA crossover strategy backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate the crossover strategy over a configured price series
    Backtest {
        #[arg(short, long)]
        config: PathBuf,
        /// Write the report here instead of the configured [report] output
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override the configured ticker
        #[arg(long)]
        ticker: Option<String>,
        /// Override the configured short window
        #[arg(long)]
        short: Option<usize>,
        /// Override the configured long window
        #[arg(long)]
        long: Option<usize>,
    },
    /// Validate a configuration file without running anything
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// List tickers available in the data directory
    ListTickers {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Show the stored data range for a ticker
    Info {
        #[arg(long)]
        ticker: Option<String>,
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Everything one run needs, resolved from config plus CLI overrides.
#[derive(Debug, Clone)]
pub struct RunParams {
    pub ticker: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub short_window: usize,
    pub long_window: usize,
    pub csv_path: PathBuf,
    pub output: Option<String>,
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Backtest {
            config,
            output,
            ticker,
            short,
            long,
        } => run_backtest(&config, output.as_ref(), ticker.as_deref(), short, long),
        Command::Validate { config } => run_validate(&config),
        Command::ListTickers { config } => run_list_tickers(&config),
        Command::Info { ticker, config } => run_info(ticker.as_deref(), &config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, SmacrossError> {
    FileConfigAdapter::from_file(path).map_err(|e| SmacrossError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Resolve run parameters from a validated config.
pub fn build_run_params(config: &dyn ConfigPort) -> Result<RunParams, SmacrossError> {
    let ticker = config
        .get_string("data", "ticker")
        .ok_or_else(|| SmacrossError::ConfigMissing {
            section: "data".to_string(),
            key: "ticker".to_string(),
        })?;

    let start_date = parse_date(config.get_string("data", "start_date").as_deref(), "start_date")?;
    let end_date = parse_date(config.get_string("data", "end_date").as_deref(), "end_date")?;

    let csv_path = config
        .get_string("data", "csv_path")
        .unwrap_or_else(|| "data".to_string());

    Ok(RunParams {
        ticker,
        start_date,
        end_date,
        short_window: config.get_int("strategy", "short_window", DEFAULT_SHORT_WINDOW) as usize,
        long_window: config.get_int("strategy", "long_window", DEFAULT_LONG_WINDOW) as usize,
        csv_path: PathBuf::from(csv_path),
        output: config.get_string("report", "output"),
    })
}

/// Fetch, signal, and analyze. The full pipeline behind one call so that
/// tests can drive it with a mock data port.
pub fn execute_backtest(
    data: &dyn DataPort,
    params: &RunParams,
) -> Result<(PriceSeries, CrossoverSignals, PerformanceReport), SmacrossError> {
    let prices = data.fetch_closes(&params.ticker, params.start_date, params.end_date)?;
    let crossover = signal::generate(&prices, params.short_window, params.long_window)?;
    let rets = returns::compute(&prices, &crossover.signals)?;
    let report = performance::analyze(&rets);
    Ok((prices, crossover, report))
}

fn run_backtest(
    config_path: &PathBuf,
    output_override: Option<&PathBuf>,
    ticker_override: Option<&str>,
    short_override: Option<usize>,
    long_override: Option<usize>,
) -> Result<(), SmacrossError> {
    // Stage 1: load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let adapter = load_config(config_path)?;
    validate_data_config(&adapter)?;
    validate_strategy_config(&adapter)?;

    // Stage 2: resolve parameters, apply CLI overrides
    let mut params = build_run_params(&adapter)?;
    if let Some(ticker) = ticker_override {
        params.ticker = ticker.to_string();
    }
    if let Some(short) = short_override {
        params.short_window = short;
    }
    if let Some(long) = long_override {
        params.long_window = long;
    }
    if let Some(output) = output_override {
        params.output = Some(output.display().to_string());
    }

    // Stage 3: run the pipeline
    eprintln!(
        "Running {} with windows {}/{}",
        params.ticker, params.short_window, params.long_window
    );
    let data = CsvAdapter::new(params.csv_path.clone());
    let (prices, crossover, report) = execute_backtest(&data, &params)?;
    eprintln!("Fetched {} closes", prices.len());

    // Stage 4: present
    match &params.output {
        Some(path) => {
            TextReportAdapter.write(&params.ticker, &prices, &crossover, &report, path)?;
            eprintln!("Report written to {path}");
        }
        None => {
            print!(
                "{}",
                text_report_adapter::render(&params.ticker, &prices, &crossover, &report)
            );
        }
    }
    Ok(())
}

fn run_validate(config_path: &PathBuf) -> Result<(), SmacrossError> {
    let adapter = load_config(config_path)?;
    validate_data_config(&adapter)?;
    validate_strategy_config(&adapter)?;
    let params = build_run_params(&adapter)?;
    println!(
        "Configuration OK: {} from {} to {}, windows {}/{}",
        params.ticker, params.start_date, params.end_date, params.short_window, params.long_window
    );
    Ok(())
}

fn run_list_tickers(config_path: &PathBuf) -> Result<(), SmacrossError> {
    let adapter = load_config(config_path)?;
    let csv_path = adapter
        .get_string("data", "csv_path")
        .unwrap_or_else(|| "data".to_string());
    let data = CsvAdapter::new(PathBuf::from(csv_path));
    for ticker in data.list_tickers()? {
        println!("{ticker}");
    }
    Ok(())
}

fn run_info(ticker_override: Option<&str>, config_path: &PathBuf) -> Result<(), SmacrossError> {
    let adapter = load_config(config_path)?;
    let ticker = match ticker_override {
        Some(t) => t.to_string(),
        None => adapter
            .get_string("data", "ticker")
            .ok_or_else(|| SmacrossError::ConfigMissing {
                section: "data".to_string(),
                key: "ticker".to_string(),
            })?,
    };
    let csv_path = adapter
        .get_string("data", "csv_path")
        .unwrap_or_else(|| "data".to_string());
    let data = CsvAdapter::new(PathBuf::from(csv_path));

    match data.data_range(&ticker)? {
        Some((first, last, count)) => {
            println!("{ticker}: {count} closes from {first} to {last}");
        }
        None => {
            println!("{ticker}: no stored data");
        }
    }
    Ok(())
}
