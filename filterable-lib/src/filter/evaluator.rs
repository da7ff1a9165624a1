//! Per-row visibility

use super::{ColumnFilterSet, SearchMatcher, trim_cell};
use crate::model::FilterRow;

/// Decides whether a single row is visible.
///
/// A row is visible when it passes every active column filter and matches
/// the search term.
#[derive(Debug, Clone, Copy)]
pub struct RowEvaluator<'a> {
    filters: &'a ColumnFilterSet,
    search: &'a SearchMatcher,
}

impl<'a> RowEvaluator<'a> {
    /// Creates an evaluator over the current filter and search state.
    pub fn new(filters: &'a ColumnFilterSet, search: &'a SearchMatcher) -> Self {
        Self { filters, search }
    }

    /// Returns `true` if the row should be shown.
    pub fn is_visible<R: FilterRow + ?Sized>(&self, row: &R) -> bool {
        !self.any_column_filter_fails(row) && self.search.row_matches(row)
    }

    /// Returns `true` as soon as one active column rejects the row.
    ///
    /// Columns missing from the row read as empty text.
    pub fn any_column_filter_fails<R: FilterRow + ?Sized>(&self, row: &R) -> bool {
        self.filters.active_columns().any(|column| {
            let text = row.column_text(column).map(trim_cell).unwrap_or_default();
            !self.filters.passes_filter(column, text)
        })
    }
}
