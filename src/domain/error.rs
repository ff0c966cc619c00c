//! Domain error types.

/// Top-level error type for smacross.
#[derive(Debug, thiserror::Error)]
pub enum SmacrossError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    /// Window parameters that cannot produce a crossover signal.
    #[error("invalid window configuration: {reason}")]
    Configuration { reason: String },

    /// Two series that must share a timestamp index do not. Indicates a
    /// defect in whatever produced them, not bad user input.
    #[error("series misalignment: {reason}")]
    Alignment { reason: String },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no price data for {ticker}")]
    NoData { ticker: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&SmacrossError> for std::process::ExitCode {
    fn from(err: &SmacrossError) -> Self {
        let code: u8 = match err {
            SmacrossError::Io(_) => 1,
            SmacrossError::ConfigParse { .. }
            | SmacrossError::ConfigMissing { .. }
            | SmacrossError::ConfigInvalid { .. } => 2,
            SmacrossError::Data { .. } | SmacrossError::NoData { .. } => 3,
            SmacrossError::Configuration { .. } => 4,
            SmacrossError::Alignment { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
