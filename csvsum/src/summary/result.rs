//! Output of a group-by/sum summary.

use std::collections::HashMap;

/// Per-group sums with the header that names each slot.
///
/// `headers` is `[group_by, sum_by...]`; each accumulator vector holds one
/// sum per `sum_by` column, in that order. Group order carries no meaning,
/// so equality compares groups as a set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvSummary {
    headers: Vec<String>,
    groups: HashMap<String, Vec<f64>>,
}

impl CsvSummary {
    pub fn new(headers: Vec<String>, groups: HashMap<String, Vec<f64>>) -> Self {
        Self { headers, groups }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn groups(&self) -> &HashMap<String, Vec<f64>> {
        &self.groups
    }

    /// Sums for one group key.
    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Number of distinct groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups ordered by key, for stable display.
    pub fn sorted_rows(&self) -> Vec<(&str, &[f64])> {
        let mut rows: Vec<(&str, &[f64])> = self
            .groups
            .iter()
            .map(|(key, sums)| (key.as_str(), sums.as_slice()))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(b.0));
        rows
    }

    pub fn into_parts(self) -> (Vec<String>, HashMap<String, Vec<f64>>) {
        (self.headers, self.groups)
    }
}
