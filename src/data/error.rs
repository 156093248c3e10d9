use thiserror::Error;

/// Dataset-level validation failures raised while loading a file.
#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: outcome class must be 0 or 1, got {value}")]
    InvalidOutcome { row: usize, value: i64 },

    #[error("row {row}: column '{column}' has unsupported type {data_type}")]
    UnsupportedType {
        row: usize,
        column: String,
        data_type: String,
    },

    #[error("row {row}: flight number must be a non-negative integer, got {value}")]
    InvalidFlightNumber { row: usize, value: f64 },

    #[error("row {row}: column '{column}' is null")]
    NullValue { row: usize, column: String },
}
