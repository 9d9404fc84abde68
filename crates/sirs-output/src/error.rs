//! Error types for sirs-output.

use thiserror::Error;

/// Errors that can occur when opening or writing an output file.
///
/// These never originate inside the simulation core — once settings
/// validate, the per-step arithmetic cannot fail; only the optional file
/// resources can.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
