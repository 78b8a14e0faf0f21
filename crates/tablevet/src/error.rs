//! Error types for the tablevet library.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A violated data-quality invariant.
///
/// Raised synchronously by the rule evaluators in [`crate::checks`] on the
/// first detected violation. Never retried; the harness records it as a hard
/// failure for the offending table.
#[derive(Debug, Clone, Error, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// A selected column contains no non-null values at all.
    #[error("table '{table}': column '{column}' is entirely null")]
    NullColumn { table: String, column: String },

    /// Row count fell below the allowed minimum.
    #[error(
        "table '{table}': too few rows: {actual} < {minimum} \
         (expected {expected} with margin {margin})"
    )]
    TooFewRows {
        table: String,
        actual: usize,
        minimum: usize,
        expected: usize,
        margin: f64,
    },

    /// Row count exceeded the allowed maximum.
    #[error(
        "table '{table}': too many rows: {actual} > {maximum} \
         (expected {expected} with margin {margin})"
    )]
    TooManyRows {
        table: String,
        actual: usize,
        maximum: usize,
        expected: usize,
        margin: f64,
    },

    /// A combination of values in the key subset appears more than once.
    #[error("table '{table}': {surplus} duplicate row(s) over columns {subset:?}")]
    DuplicateRows {
        table: String,
        subset: Vec<String>,
        surplus: usize,
    },

    /// A check referenced a column the table does not have.
    #[error("table '{table}': column '{column}' not found")]
    MissingColumn { table: String, column: String },
}

/// Main error type for tablevet operations.
#[derive(Debug, Error)]
pub enum TablevetError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to validate.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A dataset name outside the fixed catalog.
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    /// An aggregation frequency outside {raw, monthly, annual}.
    #[error("Unknown frequency: {0}")]
    UnknownFrequency(String),

    /// A data-quality check failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for tablevet operations.
pub type Result<T> = std::result::Result<T, TablevetError>;
