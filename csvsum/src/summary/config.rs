//! Summary request: which column to group by and which columns to sum.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, ConfigResult, SummaryError, SummaryResult};

/// Group-by/sum request.
///
/// Deserializes from JSON such as:
///
/// ```json
/// { "groupBy": "Product", "sumBy": ["Count", "Price"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryConfig {
    /// Column whose raw value identifies a group
    pub group_by: String,

    /// Columns summed per group, in output order (duplicates allowed)
    #[serde(default)]
    pub sum_by: Vec<String>,
}

impl SummaryConfig {
    pub fn new(group_by: impl Into<String>, sum_by: Vec<String>) -> Self {
        Self {
            group_by: group_by.into(),
            sum_by,
        }
    }

    /// Parse a request from JSON text.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a request from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Replace fields with any values given explicitly (e.g. on the command line).
    pub fn merge(mut self, group_by: Option<String>, sum_by: Vec<String>) -> Self {
        if let Some(group_by) = group_by {
            self.group_by = group_by;
        }
        if !sum_by.is_empty() {
            self.sum_by = sum_by;
        }
        self
    }

    /// Both the group key and the sum columns must be given.
    pub fn validate(&self) -> SummaryResult<()> {
        if self.group_by.is_empty() || self.sum_by.is_empty() {
            return Err(SummaryError::InvalidRequest(
                "group-by column and sum columns mustn't be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Columns to project: `[group_by, sum_by...]`.
    pub fn columns(&self) -> Vec<&str> {
        std::iter::once(self.group_by.as_str())
            .chain(self.sum_by.iter().map(String::as_str))
            .collect()
    }
}

impl TryFrom<&Path> for SummaryConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let config = Self::from_file(path)?;
        config
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(config)
    }
}
