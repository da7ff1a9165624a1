//! Per-column excluded values

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;

use super::normalize;
use crate::config::{ArrayColumn, FilterConfig};
use crate::model::ColumnKey;

/// The set of values currently excluded in each column.
///
/// A column gets an entry the first time one of its values is toggled and
/// keeps it for the lifetime of the set, even when the entry empties again.
/// Only columns with at least one excluded value are *active*; the active
/// column list is always derived from the entries, never stored.
///
/// Columns declared in [`FilterConfig::array_columns`] match per separated
/// item; all other columns match the whole cell exactly.
#[derive(Debug, Clone, Default)]
pub struct ColumnFilterSet {
    case_sensitive: bool,
    array_columns: HashMap<ColumnKey, ArrayColumn>,
    excluded: BTreeMap<ColumnKey, HashSet<String>>,
}

impl ColumnFilterSet {
    /// Creates an empty filter set for a table configuration.
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            case_sensitive: config.case_sensitive_filter,
            array_columns: config.array_columns.clone(),
            excluded: BTreeMap::new(),
        }
    }

    /// Toggles a value in or out of a column's excluded set.
    ///
    /// Returns `true` if the value is excluded after the call.
    pub fn toggle_value(&mut self, column: impl Into<ColumnKey>, raw_value: &str) -> bool {
        let column = column.into();
        let value = normalize(raw_value, self.case_sensitive).into_owned();
        let values = self.excluded.entry(column.clone()).or_default();

        let excluded = if values.remove(&value) {
            false
        } else {
            values.insert(value);
            true
        };

        log::debug!(
            "Filter {} on column {}: {:?} ({} excluded)",
            if excluded { "added" } else { "removed" },
            column,
            raw_value,
            values.len()
        );
        excluded
    }

    /// Returns `true` if the column has at least one excluded value.
    pub fn is_column_filtered(&self, column: &ColumnKey) -> bool {
        self.excluded.get(column).is_some_and(|v| !v.is_empty())
    }

    /// Iterates the columns that currently restrict rows.
    ///
    /// Index columns come first in ascending order, then named columns
    /// sorted by name.
    pub fn active_columns(&self) -> impl Iterator<Item = &ColumnKey> {
        self.excluded
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(column, _)| column)
    }

    /// Returns `true` if no column restricts rows.
    pub fn is_empty(&self) -> bool {
        self.active_columns().next().is_none()
    }

    /// Returns the normalized excluded values of a column.
    ///
    /// `None` means the column was never toggled.
    pub fn excluded_values(&self, column: &ColumnKey) -> Option<&HashSet<String>> {
        self.excluded.get(column)
    }

    /// Checks a cell against its column's filter.
    ///
    /// `cell_text` is expected to be trimmed already. Returns `true` if the
    /// row may stay visible as far as this column is concerned.
    pub fn passes_filter(&self, column: &ColumnKey, cell_text: &str) -> bool {
        let Some(excluded) = self.excluded.get(column).filter(|v| !v.is_empty()) else {
            return true;
        };

        match self.array_columns.get(column) {
            Some(array) => self.passes_array(excluded, array, cell_text),
            None => !excluded.contains(&*normalize(cell_text, self.case_sensitive)),
        }
    }

    fn passes_array(&self, excluded: &HashSet<String>, array: &ArrayColumn, cell_text: &str) -> bool {
        // An empty cell has no items to exclude.
        if cell_text.is_empty() {
            return true;
        }

        let items: Vec<_> = split_items(cell_text, &array.separator)
            .into_iter()
            .map(|item| normalize(item, self.case_sensitive))
            .collect();

        if array.exclusive {
            return !items.iter().any(|item| excluded.contains(&**item));
        }

        // More items than excluded values: at least one item is not excluded.
        if items.len() > excluded.len() {
            return true;
        }

        !items.iter().all(|item| excluded.contains(&**item))
    }
}

/// Splits a cell into items. An empty separator splits per character.
fn split_items<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect();
    }
    text.split(separator).collect()
}
