use thiserror::Error;

use crate::oracle::OracleError;

/// Custom error types for medterm
#[derive(Debug, Error)]
pub enum MedtermError {
    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Unknown body system: {0}")]
    UnknownSystem(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
