//! Configuration validation.
//!
//! Validates all config fields before any data is fetched or computed.

use crate::domain::error::SmacrossError;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

/// Window defaults when `[strategy]` leaves them unset.
pub const DEFAULT_SHORT_WINDOW: i64 = 20;
pub const DEFAULT_LONG_WINDOW: i64 = 50;

pub fn validate_data_config(config: &dyn ConfigPort) -> Result<(), SmacrossError> {
    validate_ticker(config)?;
    validate_dates(config)?;
    Ok(())
}

pub fn validate_strategy_config(config: &dyn ConfigPort) -> Result<(), SmacrossError> {
    let short = config.get_int("strategy", "short_window", DEFAULT_SHORT_WINDOW);
    let long = config.get_int("strategy", "long_window", DEFAULT_LONG_WINDOW);

    if short < 1 {
        return Err(SmacrossError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "short_window".to_string(),
            reason: "short_window must be at least 1".to_string(),
        });
    }
    if long < 1 {
        return Err(SmacrossError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "long_window".to_string(),
            reason: "long_window must be at least 1".to_string(),
        });
    }
    if short >= long {
        return Err(SmacrossError::ConfigInvalid {
            section: "strategy".to_string(),
            key: "short_window".to_string(),
            reason: format!("short_window ({short}) must be less than long_window ({long})"),
        });
    }
    Ok(())
}

fn validate_ticker(config: &dyn ConfigPort) -> Result<(), SmacrossError> {
    match config.get_string("data", "ticker") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(SmacrossError::ConfigMissing {
            section: "data".to_string(),
            key: "ticker".to_string(),
        }),
    }
}

fn validate_dates(config: &dyn ConfigPort) -> Result<(), SmacrossError> {
    let start_str = config.get_string("data", "start_date");
    let end_str = config.get_string("data", "end_date");

    let start_date = parse_date(start_str.as_deref(), "start_date")?;
    let end_date = parse_date(end_str.as_deref(), "end_date")?;

    if start_date >= end_date {
        return Err(SmacrossError::ConfigInvalid {
            section: "data".to_string(),
            key: "start_date".to_string(),
            reason: "start_date must be before end_date".to_string(),
        });
    }
    Ok(())
}

pub fn parse_date(value: Option<&str>, field: &str) -> Result<NaiveDate, SmacrossError> {
    match value {
        None => Err(SmacrossError::ConfigMissing {
            section: "data".to_string(),
            key: field.to_string(),
        }),
        Some(s) => {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| SmacrossError::ConfigInvalid {
                section: "data".to_string(),
                key: field.to_string(),
                reason: format!("invalid {} format, expected YYYY-MM-DD", field),
            })
        }
    }
}
