//! Domain models for the summary pipeline.
//!
//! - [`RowMatrix`] - Rectangular grid of string cells, row 0 is the header

use crate::error::{MatrixError, MatrixResult};

// =============================================================================
// Row Matrix
// =============================================================================

/// Matrix of string cells as read from a CSV-like source.
///
/// The first row is the header. Rows are expected to have the same length,
/// but this is not checked here: a short row is reported when a projection
/// indexes past its end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowMatrix {
    records: Vec<Vec<String>>,
}

impl RowMatrix {
    /// Create a matrix from owned rows (header first).
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { records: rows }
    }

    /// Create a matrix from borrowed literal rows.
    ///
    /// ```
    /// use csvsum::RowMatrix;
    ///
    /// let m = RowMatrix::from_str_rows(&[&["a", "b"], &["1", "2"]]);
    /// assert_eq!(m.len(), 2);
    /// assert_eq!(m.header().unwrap(), &["a", "b"]);
    /// ```
    pub fn from_str_rows(rows: &[&[&str]]) -> Self {
        let records = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        Self { records }
    }

    /// All rows, header included.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.records
    }

    /// Row by position (0 is the header).
    pub fn row(&self, index: usize) -> MatrixResult<&[String]> {
        self.records
            .get(index)
            .map(Vec::as_slice)
            .ok_or(MatrixError::NoSuchRow {
                index,
                len: self.records.len(),
            })
    }

    /// Header row, `None` when the matrix has no rows.
    pub fn header(&self) -> Option<&[String]> {
        self.records.first().map(Vec::as_slice)
    }

    /// Rows after the header.
    pub fn data_rows(&self) -> &[Vec<String>] {
        self.records.get(1..).unwrap_or(&[])
    }

    /// Number of rows, header included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of header columns (0 for an empty matrix).
    pub fn width(&self) -> usize {
        self.header().map_or(0, <[String]>::len)
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.records
    }
}

impl From<Vec<Vec<String>>> for RowMatrix {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_data_rows() {
        let m = RowMatrix::from_str_rows(&[&["a", "b"], &["1", "2"], &["3", "4"]]);

        assert_eq!(m.header().unwrap(), &["a", "b"]);
        assert_eq!(m.data_rows().len(), 2);
        assert_eq!(m.data_rows()[1], vec!["3", "4"]);
        assert_eq!(m.width(), 2);
    }

    #[test]
    fn test_empty_matrix() {
        let m = RowMatrix::default();

        assert!(m.is_empty());
        assert!(m.header().is_none());
        assert!(m.data_rows().is_empty());
        assert_eq!(m.width(), 0);
    }

    #[test]
    fn test_header_only_has_no_data_rows() {
        let m = RowMatrix::from_str_rows(&[&["a"]]);
        assert!(m.data_rows().is_empty());
    }

    #[test]
    fn test_row_out_of_bounds() {
        let m = RowMatrix::from_str_rows(&[&["a"], &["1"]]);

        assert_eq!(m.row(1).unwrap(), &["1"]);
        assert_eq!(
            m.row(2).unwrap_err(),
            MatrixError::NoSuchRow { index: 2, len: 2 }
        );
    }
}
