//! CLI error types.

use thiserror::Error;
use vantage_config::ConfigError;
use vantage_core::VantageError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// A CSV row whose values were rejected.
    #[error("Invalid row {row}: {source}")]
    InvalidRow {
        /// 1-based line number in the input file, header included.
        row: usize,
        /// Why the row was rejected.
        #[source]
        source: VantageError,
    },

    /// Domain error.
    #[error(transparent)]
    Vantage(#[from] VantageError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
