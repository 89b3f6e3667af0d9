//! Error types for matrix projection and summary aggregation.
//!
//! - [`MatrixError`] - Column lookup and projection errors
//! - [`SummaryError`] - Group-by/sum aggregation errors
//! - [`CsvError`] - Reading a matrix from bytes or files
//! - [`ConfigError`] - Loading a summary request from disk
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Matrix Errors
// =============================================================================

/// Errors raised while looking up or projecting columns of a matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The matrix has no rows, so it has no header either.
    #[error("matrix is empty")]
    EmptyMatrix,

    /// No header cell equals the requested name.
    #[error("header with name \"{name}\" was not found")]
    ColumnNotFound { name: String },

    /// A row is too short for the requested column position.
    #[error("row {row} has {width} cells, column index {index} is out of range")]
    RowIndexOutOfRange {
        row: usize,
        index: usize,
        width: usize,
    },

    /// Row accessor went past the last row.
    #[error("row {index} does not exist (matrix has {len} rows)")]
    NoSuchRow { index: usize, len: usize },
}

// =============================================================================
// Summary Errors
// =============================================================================

/// Errors raised by [`crate::summary::summarize`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    /// Group key or sum columns missing from the request.
    #[error("invalid summary request: {0}")]
    InvalidRequest(String),

    /// Projecting to the requested columns failed.
    #[error("can't filter by names: {0}")]
    Projection(#[from] MatrixError),

    /// A sum column cell is not a number.
    #[error("can't parse '{value}' to a number (row {row}, column '{column}')")]
    NumericParse {
        value: String,
        row: usize,
        column: String,
    },
}

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while loading a matrix from a byte stream.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV.
    #[error("Invalid CSV format: {0}")]
    Csv(#[from] csv::Error),

    /// Content could not be decoded.
    #[error("Failed to decode content: {0}")]
    Encoding(String),

    /// Delimiter is not a single-byte character.
    #[error("Unsupported delimiter '{0}'")]
    Delimiter(char),
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors while loading a [`crate::summary::SummaryConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config is not valid JSON for a summary request.
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but is unusable.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Result type for summary operations.
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Result type for reading operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for config loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_error_converts_to_summary_error() {
        let err: SummaryError = MatrixError::ColumnNotFound { name: "price".into() }.into();
        assert!(matches!(err, SummaryError::Projection(MatrixError::ColumnNotFound { .. })));
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_numeric_parse_error_format() {
        let err = SummaryError::NumericParse {
            value: "n/a".into(),
            row: 3,
            column: "Count".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'n/a'"));
        assert!(msg.contains("row 3"));
        assert!(msg.contains("Count"));
    }

    #[test]
    fn test_out_of_range_format() {
        let err = MatrixError::RowIndexOutOfRange { row: 2, index: 4, width: 3 };
        assert_eq!(
            err.to_string(),
            "row 2 has 3 cells, column index 4 is out of range"
        );
    }
}
