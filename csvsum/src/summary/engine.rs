//! Group rows by one column and sum others.
//!
//! ```text
//! Product  Count                      Product  Count
//! Apple    1                          Apple    11
//! Banana   2      group_by=Product    Banana   2
//! Apple    10     ───────────────▶
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;

use super::config::SummaryConfig;
use super::result::CsvSummary;
use crate::error::{SummaryError, SummaryResult};
use crate::models::RowMatrix;
use crate::projection::{headers_of, select_by_names};

/// Sum the `sum_by` columns of `matrix` for each distinct value of `group_by`.
///
/// Group identity is the raw cell string: `"5"` and `"5.0"` are different
/// groups. Sums within a group are added in row order. Any unparseable cell
/// fails the whole call and no partial result is returned.
///
/// Cells such as `"NaN"` and `"inf"` parse as numbers. A `NaN` sum never
/// compares equal, so two summaries holding one are unequal even when
/// computed from the same input.
pub fn summarize(matrix: &RowMatrix, config: &SummaryConfig) -> SummaryResult<CsvSummary> {
    config.validate()?;

    let filtered = select_by_names(matrix, &config.columns())?;
    let header = headers_of(&filtered)?;
    let data = filtered.data_rows();

    let mut groups: HashMap<String, Vec<f64>> = HashMap::new();

    for (idx, row) in data.iter().enumerate() {
        // Row 0 of the matrix is the header.
        let row_number = idx + 1;
        let values = parse_row(row_number, header, &row[1..])?;

        match groups.entry(row[0].clone()) {
            Entry::Vacant(slot) => {
                slot.insert(values);
            }
            Entry::Occupied(mut slot) => {
                for (sum, value) in slot.get_mut().iter_mut().zip(values) {
                    *sum += value;
                }
            }
        }
    }

    debug!(
        group_by = %config.group_by,
        rows = data.len(),
        groups = groups.len(),
        "summary computed"
    );

    Ok(CsvSummary::new(header.to_vec(), groups))
}

/// Parse a slice of cells as `f64`, stopping at the first failure.
pub fn parse_floats<S: AsRef<str>>(cells: &[S]) -> Result<Vec<f64>, String> {
    cells
        .iter()
        .map(|cell| {
            let cell = cell.as_ref();
            cell.parse::<f64>().map_err(|_| cell.to_string())
        })
        .collect()
}

fn parse_row(row_number: usize, header: &[String], cells: &[String]) -> SummaryResult<Vec<f64>> {
    parse_floats(cells).map_err(|value| {
        let column = cells
            .iter()
            .position(|cell| *cell == value)
            .and_then(|pos| header.get(pos + 1))
            .cloned()
            .unwrap_or_default();
        SummaryError::NumericParse {
            value,
            row: row_number,
            column,
        }
    })
}
