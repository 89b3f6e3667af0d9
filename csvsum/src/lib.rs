//! # Csvsum - group-by/sum summaries over CSV matrices
//!
//! Csvsum loads a CSV-like file into an in-memory matrix of strings, narrows
//! it to selected columns and sums numeric columns per distinct group key.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Parser    │────▶│ Projection  │────▶│   Summary   │
//! │  (ISO/UTF8) │     │  (auto-enc) │     │ (by name/#) │     │ (group/sum) │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use csvsum::{parse_str, summarize, SummaryConfig};
//!
//! let matrix = parse_str("Product,Count\nApple,1\nApple,10\nPear,2", ',').unwrap();
//! let config = SummaryConfig::new("Product", vec!["Count".to_string()]);
//! let summary = summarize(&matrix, &config).unwrap();
//!
//! assert_eq!(summary.get("Apple"), Some(&[11.0][..]));
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per concern
//! - [`models`] - The [`RowMatrix`] data holder
//! - [`parser`] - CSV reading with auto-detection
//! - [`projection`] - Column selection by name or position
//! - [`summary`] - Group-by/sum aggregation

// Core modules
pub mod error;
pub mod models;

// Reading
pub mod parser;

// Projection and aggregation
pub mod projection;
pub mod summary;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{ConfigError, CsvError, MatrixError, SummaryError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::RowMatrix;

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content,
    detect_delimiter,
    detect_encoding,
    parse_bytes,
    parse_bytes_auto,
    parse_matrix,
    parse_matrix_file,
    parse_matrix_file_auto,
    parse_str,
    ParseResult,
};

// =============================================================================
// Re-exports - Projection
// =============================================================================

pub use projection::{headers_of, index_of, select_by_indices, select_by_names};

// =============================================================================
// Re-exports - Summary
// =============================================================================

pub use summary::{parse_floats, summarize, CsvSummary, SummaryConfig};
