//! Column projection over a [`RowMatrix`].
//!
//! Names are resolved to positions once, then every row (header included)
//! is rebuilt from those positions. Selection by name is a thin layer over
//! selection by index, so reordering and duplicate columns behave the same
//! either way.
//!
//! ```text
//! a  b  c                      c  a  a
//! 1  2  3   select [c, a, a]   3  1  1
//! 4  5  6   ───────────────▶   6  4  4
//! ```

use tracing::trace;

use crate::error::{MatrixError, MatrixResult};
use crate::models::RowMatrix;

/// Header row of a matrix, or [`MatrixError::EmptyMatrix`].
pub fn headers_of(matrix: &RowMatrix) -> MatrixResult<&[String]> {
    matrix.header().ok_or(MatrixError::EmptyMatrix)
}

/// Position of the first header cell equal to `name`.
///
/// Comparison is exact: case-sensitive, no trimming.
pub fn index_of(matrix: &RowMatrix, name: &str) -> MatrixResult<usize> {
    headers_of(matrix)?
        .iter()
        .position(|column| column == name)
        .ok_or_else(|| MatrixError::ColumnNotFound {
            name: name.to_string(),
        })
}

/// New matrix containing only the named columns, in the given order.
///
/// Fails on the first name that is not in the header.
pub fn select_by_names<S: AsRef<str>>(matrix: &RowMatrix, names: &[S]) -> MatrixResult<RowMatrix> {
    let indices = names
        .iter()
        .map(|name| index_of(matrix, name.as_ref()))
        .collect::<MatrixResult<Vec<_>>>()?;

    trace!(?indices, "resolved column names");
    select_by_indices(matrix, &indices)
}

/// New matrix containing only the given column positions, in the given order.
///
/// Every row must be long enough for every index; a short row is an error,
/// never silently truncated.
pub fn select_by_indices(matrix: &RowMatrix, indices: &[usize]) -> MatrixResult<RowMatrix> {
    if matrix.is_empty() {
        return Err(MatrixError::EmptyMatrix);
    }

    let rows = matrix
        .rows()
        .iter()
        .enumerate()
        .map(|(row_idx, row)| project_row(row_idx, row, indices))
        .collect::<MatrixResult<Vec<_>>>()?;

    Ok(RowMatrix::from_rows(rows))
}

fn project_row(row_idx: usize, row: &[String], indices: &[usize]) -> MatrixResult<Vec<String>> {
    indices
        .iter()
        .map(|&index| {
            row.get(index)
                .cloned()
                .ok_or(MatrixError::RowIndexOutOfRange {
                    row: row_idx,
                    index,
                    width: row.len(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RowMatrix {
        RowMatrix::from_str_rows(&[
            &["a", "b", "c"],
            &["1", "2", "3"],
            &["4", "5", "6"],
        ])
    }

    #[test]
    fn test_index_of() {
        let m = sample();
        assert_eq!(index_of(&m, "a").unwrap(), 0);
        assert_eq!(index_of(&m, "c").unwrap(), 2);
    }

    #[test]
    fn test_index_of_is_exact_match() {
        let m = RowMatrix::from_str_rows(&[&["Name", " b"]]);

        assert!(matches!(
            index_of(&m, "name"),
            Err(MatrixError::ColumnNotFound { .. })
        ));
        assert!(index_of(&m, "b").is_err());
        assert_eq!(index_of(&m, " b").unwrap(), 1);
    }

    #[test]
    fn test_index_of_duplicate_header_returns_first() {
        let m = RowMatrix::from_str_rows(&[&["x", "y", "x"]]);
        assert_eq!(index_of(&m, "x").unwrap(), 0);
    }

    #[test]
    fn test_index_of_empty_matrix() {
        let m = RowMatrix::default();
        assert_eq!(index_of(&m, "a").unwrap_err(), MatrixError::EmptyMatrix);
    }

    #[test]
    fn test_select_by_indices_identity() {
        let m = sample();
        let all: Vec<usize> = (0..m.width()).collect();
        assert_eq!(select_by_indices(&m, &all).unwrap(), m);
    }

    #[test]
    fn test_select_by_indices_reorder_and_duplicate() {
        let m = sample();
        let out = select_by_indices(&m, &[2, 0, 0]).unwrap();

        assert_eq!(out.rows()[0], vec!["c", "a", "a"]);
        assert_eq!(out.rows()[1], vec!["3", "1", "1"]);
        assert_eq!(out.rows()[2], vec!["6", "4", "4"]);
    }

    #[test]
    fn test_select_by_indices_does_not_touch_input() {
        let m = sample();
        let before = m.clone();
        let _ = select_by_indices(&m, &[1]).unwrap();
        assert_eq!(m, before);
    }

    #[test]
    fn test_select_by_indices_empty_matrix() {
        let m = RowMatrix::default();
        assert_eq!(
            select_by_indices(&m, &[0]).unwrap_err(),
            MatrixError::EmptyMatrix
        );
    }

    #[test]
    fn test_select_by_indices_ragged_row() {
        let m = RowMatrix::from_str_rows(&[&["a", "b", "c"], &["1", "2", "3"], &["4"]]);

        assert_eq!(
            select_by_indices(&m, &[0, 2]).unwrap_err(),
            MatrixError::RowIndexOutOfRange { row: 2, index: 2, width: 1 }
        );
        // Column 0 exists in every row.
        assert_eq!(select_by_indices(&m, &[0]).unwrap().len(), 3);
    }

    #[test]
    fn test_select_by_names() {
        let m = sample();
        let out = select_by_names(&m, &["c", "a"]).unwrap();

        assert_eq!(out.header().unwrap(), &["c", "a"]);
        assert_eq!(out.rows()[2], vec!["6", "4"]);
    }

    #[test]
    fn test_select_by_names_matches_index_of() {
        let m = sample();
        let names = ["b", "c", "b"];
        let indices: Vec<usize> = names.iter().map(|n| index_of(&m, n).unwrap()).collect();

        assert_eq!(
            select_by_names(&m, &names).unwrap(),
            select_by_indices(&m, &indices).unwrap()
        );
    }

    #[test]
    fn test_select_by_names_reports_missing_name() {
        let m = sample();
        let err = select_by_names(&m, &["a", "zzz", "yyy"]).unwrap_err();
        assert_eq!(err, MatrixError::ColumnNotFound { name: "zzz".into() });
    }

    #[test]
    fn test_select_by_names_owned_strings() {
        let m = sample();
        let names = vec!["b".to_string()];
        assert_eq!(select_by_names(&m, &names).unwrap().width(), 1);
    }
}
