//! Error types for the Olist feature pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Olist operations
pub type Result<T> = std::result::Result<T, OlistError>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum OlistError {
    #[error("Data directory not found at: {}", .0.display())]
    DataDirNotFound(PathBuf),

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<polars::error::PolarsError> for OlistError {
    fn from(err: polars::error::PolarsError) -> Self {
        OlistError::DataError(err.to_string())
    }
}

impl From<serde_json::Error> for OlistError {
    fn from(err: serde_json::Error) -> Self {
        OlistError::SerializationError(err.to_string())
    }
}
