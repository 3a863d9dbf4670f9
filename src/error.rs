//! Error types for the anomaly-insight core

use thiserror::Error;

/// Result type alias for anomaly-insight operations
pub type Result<T> = std::result::Result<T, InsightError>;

/// Main error type for the anomaly-insight core
#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Division by zero: {0} is undefined for this confusion matrix")]
    DivisionByZero(&'static str),

    #[error("Simulation error: {0}")]
    SimulationError(String),

    #[error("Training run canceled")]
    Canceled,

    #[error("Data error: {0}")]
    DataError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<csv::Error> for InsightError {
    fn from(err: csv::Error) -> Self {
        InsightError::DataError(err.to_string())
    }
}

impl From<serde_json::Error> for InsightError {
    fn from(err: serde_json::Error) -> Self {
        InsightError::SerializationError(err.to_string())
    }
}
