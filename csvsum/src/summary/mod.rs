//! Group-by/sum summaries.
//!
//! - `config`: Summary request (group column, sum columns)
//! - `engine`: Aggregation over a projected matrix
//! - `result`: Per-group sums with their header

pub mod config;
pub mod engine;
pub mod result;

pub use config::SummaryConfig;
pub use engine::{parse_floats, summarize};
pub use result::CsvSummary;
