//! Filter configuration

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::model::ColumnKey;

/// How a multi-value column splits and matches its cells.
///
/// A cell such as `"fps, adventure"` holds several values joined by
/// `separator`. In the default (non-exclusive) mode a row is hidden only when
/// every value in the cell is excluded; in exclusive mode one excluded value
/// is enough.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArrayColumn {
    /// Text that separates values within a cell.
    pub separator: String,
    /// Hide rows on any overlap with the excluded values.
    ///
    /// Default: `false`
    #[serde(default)]
    pub exclusive: bool,
}

impl ArrayColumn {
    /// Creates a non-exclusive array column.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            exclusive: false,
        }
    }

    /// Switches the column to exclusive matching.
    pub fn exclusive(mut self) -> Self {
        self.exclusive = true;
        self
    }
}

/// Configuration for one filterable table.
///
/// Field names follow the plugin option keys, so a JSON options object can be
/// parsed directly with [`FilterConfig::from_json`].
///
/// # Example
///
/// ```
/// use filterable_lib::{ArrayColumn, FilterConfig};
///
/// let config = FilterConfig::default()
///     .with_case_sensitive_search(true)
///     .with_array_column(3, ArrayColumn::new(", ").exclusive());
///
/// let parsed = FilterConfig::from_json(r#"{
///     "caseSensitiveSearch": true,
///     "arrayColumns": { "3": { "separator": ", ", "exclusive": true } }
/// }"#).unwrap();
///
/// assert_eq!(config, parsed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    /// Compare filter values and cells without case folding.
    ///
    /// Default: `false`
    pub case_sensitive_filter: bool,

    /// Compare the search term and cells without case folding.
    ///
    /// Default: `false`
    pub case_sensitive_search: bool,

    /// Columns whose cells hold several separated values.
    ///
    /// Default: empty
    #[serde(alias = "arrayData")]
    pub array_columns: HashMap<ColumnKey, ArrayColumn>,
}

impl FilterConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a config from a JSON options object.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FilterConfig = serde_json::from_str(json)?;
        config.warn_on_empty_separators();
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Sets case-sensitive filter matching.
    pub fn with_case_sensitive_filter(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive_filter = case_sensitive;
        self
    }

    /// Sets case-sensitive search matching.
    pub fn with_case_sensitive_search(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive_search = case_sensitive;
        self
    }

    /// Declares a column as an array column.
    pub fn with_array_column(mut self, column: impl Into<ColumnKey>, array: ArrayColumn) -> Self {
        let column = column.into();
        if array.separator.is_empty() {
            log::warn!("Array column {} has an empty separator", column);
        }
        self.array_columns.insert(column, array);
        self
    }

    /// Returns the array settings for a column, if it is an array column.
    pub fn array_column(&self, column: &ColumnKey) -> Option<&ArrayColumn> {
        self.array_columns.get(column)
    }

    fn warn_on_empty_separators(&self) {
        for (column, array) in &self.array_columns {
            if array.separator.is_empty() {
                log::warn!("Array column {} has an empty separator", column);
            }
        }
    }
}
