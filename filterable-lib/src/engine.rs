//! Filter engine for one table

use crate::config::FilterConfig;
use crate::filter::{ColumnFilterSet, RowEvaluator, Scan, SearchMatcher, TableScanner, Visibility};
use crate::model::{ColumnKey, FilterControl, FilterRow};

/// Filter and search state of one table.
///
/// The engine owns its configuration and the active filter and search
/// state; nothing is shared between engines, so every table gets its own.
/// Rows stay with the caller and are passed to [`scan`](Filterable::scan)
/// after every state change. Use [`FilterableTable`] to keep the rows and
/// the latest scan together.
///
/// # Example
///
/// ```
/// use filterable_lib::Filterable;
/// use filterable_lib::model::TableRow;
///
/// let rows = vec![
///     TableRow::new(["WoW", "Blizzard"]),
///     TableRow::new(["Portal", "Valve"]),
/// ];
///
/// let mut engine = Filterable::default();
/// engine.toggle_value(1, "valve");
///
/// let visible: Vec<bool> = engine.scan(&rows).map(|r| r.visible).collect();
/// assert_eq!(visible, vec![true, false]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Filterable {
    config: FilterConfig,
    filters: ColumnFilterSet,
    search: SearchMatcher,
}

impl Filterable {
    /// Creates an engine with no active filters and an empty search term.
    pub fn new(config: FilterConfig) -> Self {
        Self {
            filters: ColumnFilterSet::new(&config),
            search: SearchMatcher::new(config.case_sensitive_search),
            config,
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Toggles a value in a column's filter.
    ///
    /// Returns `true` if rows with this value are now hidden.
    pub fn toggle_value(&mut self, column: impl Into<ColumnKey>, value: &str) -> bool {
        self.filters.toggle_value(column, value)
    }

    /// Toggles the value of a filter control.
    pub fn toggle_control(&mut self, control: &FilterControl) -> bool {
        self.filters.toggle_value(&control.column, control.matching_value())
    }

    /// Replaces the search term.
    pub fn set_search_term(&mut self, term: &str) {
        self.search.set_term(term);
    }

    /// Returns the normalized search term.
    pub fn search_term(&self) -> &str {
        self.search.term()
    }

    /// Returns `true` if the column currently hides some values.
    pub fn is_column_filtered(&self, column: &ColumnKey) -> bool {
        self.filters.is_column_filtered(column)
    }

    /// Returns the columns that currently restrict rows, in evaluation order.
    pub fn active_filter_columns(&self) -> Vec<ColumnKey> {
        self.filters.active_columns().cloned().collect()
    }

    /// Returns `true` if neither a filter nor a search term is active.
    pub fn is_unrestricted(&self) -> bool {
        self.filters.is_empty() && self.search.is_empty()
    }

    /// Returns the evaluator for the current state.
    pub fn evaluator(&self) -> RowEvaluator<'_> {
        RowEvaluator::new(&self.filters, &self.search)
    }

    /// Returns `true` if the row should be shown.
    pub fn is_visible<R: FilterRow + ?Sized>(&self, row: &R) -> bool {
        self.evaluator().is_visible(row)
    }

    /// Lazily evaluates every row in table order.
    pub fn scan<'r, R: FilterRow>(&self, rows: &'r [R]) -> Scan<'_, 'r, R> {
        TableScanner::new(self.evaluator()).scan(rows)
    }

    /// Evaluates every row and collects the decisions.
    pub fn visibility<R: FilterRow>(&self, rows: &[R]) -> Visibility {
        TableScanner::new(self.evaluator()).visibility(rows)
    }
}

/// A table's rows together with its engine and latest scan.
///
/// Every state change re-scans all rows before returning, so
/// [`visibility`](FilterableTable::visibility) always reflects the current
/// filter and search state.
///
/// # Example
///
/// ```
/// use filterable_lib::{FilterConfig, FilterableTable};
/// use filterable_lib::model::TableRow;
///
/// let mut table = FilterableTable::new(
///     FilterConfig::default(),
///     vec![TableRow::new(["WoW", "Blizzard"]), TableRow::new(["Portal", "Valve"])],
/// );
///
/// let visibility = table.set_search_term("portal");
/// assert_eq!(visibility.visible_count(), 1);
/// assert_eq!(visibility.is_visible(1), Some(true));
/// ```
#[derive(Debug, Clone)]
pub struct FilterableTable<R: FilterRow> {
    engine: Filterable,
    rows: Vec<R>,
    visibility: Visibility,
}

impl<R: FilterRow> FilterableTable<R> {
    /// Creates a table and runs the initial scan.
    pub fn new(config: FilterConfig, rows: Vec<R>) -> Self {
        let engine = Filterable::new(config);
        let visibility = engine.visibility(&rows);
        Self {
            engine,
            rows,
            visibility,
        }
    }

    /// Returns the engine.
    pub fn engine(&self) -> &Filterable {
        &self.engine
    }

    /// Returns all data rows.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Returns the latest scan.
    pub fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    /// Iterates the rows that are currently visible.
    pub fn visible_rows(&self) -> impl Iterator<Item = &R> {
        self.visibility
            .visible_indices()
            .filter_map(|i| self.rows.get(i))
    }

    /// Toggles a column value and re-scans.
    pub fn toggle_value(&mut self, column: impl Into<ColumnKey>, value: &str) -> &Visibility {
        self.engine.toggle_value(column, value);
        self.rescan()
    }

    /// Toggles a filter control and re-scans.
    pub fn toggle_control(&mut self, control: &FilterControl) -> &Visibility {
        self.engine.toggle_control(control);
        self.rescan()
    }

    /// Replaces the search term and re-scans.
    pub fn set_search_term(&mut self, term: &str) -> &Visibility {
        self.engine.set_search_term(term);
        self.rescan()
    }

    /// Replaces the rows and re-scans with the current state.
    pub fn set_rows(&mut self, rows: Vec<R>) -> &Visibility {
        self.rows = rows;
        self.rescan()
    }

    fn rescan(&mut self) -> &Visibility {
        self.visibility = self.engine.visibility(&self.rows);
        &self.visibility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableRow;

    fn rows() -> Vec<TableRow> {
        vec![
            TableRow::new(["A"]),
            TableRow::new(["B"]),
            TableRow::new(["C"]),
            TableRow::new(["b"]),
        ]
    }

    #[test]
    fn test_new_engine_is_unrestricted() {
        let engine = Filterable::default();
        assert!(engine.is_unrestricted());
        assert!(engine.active_filter_columns().is_empty());
        assert_eq!(engine.search_term(), "");
    }

    #[test]
    fn test_engine_keeps_its_config() {
        let config = FilterConfig::default().with_case_sensitive_search(true);
        let mut engine = Filterable::new(config.clone());
        engine.set_search_term("Valve");

        assert_eq!(engine.config(), &config);
        assert_eq!(engine.search_term(), "Valve");
    }

    #[test]
    fn test_simple_filter_with_case_folding() {
        let mut table = FilterableTable::new(FilterConfig::default(), rows());
        let visibility = table.toggle_value(0, "B");
        assert_eq!(visibility.as_slice(), &[true, false, true, false]);
    }

    #[test]
    fn test_simple_filter_case_sensitive() {
        let config = FilterConfig::default().with_case_sensitive_filter(true);
        let mut table = FilterableTable::new(config, rows());
        let visibility = table.toggle_value(0, "B");
        assert_eq!(visibility.as_slice(), &[true, false, true, true]);
    }

    #[test]
    fn test_toggle_control_prefers_content() {
        let mut engine = Filterable::default();
        let control = FilterControl::new(0, "bee").with_content("B");
        assert!(engine.toggle_control(&control));
        assert!(engine.is_column_filtered(&ColumnKey::Index(0)));
        assert!(!engine.is_visible(&TableRow::new(["b"])));
        assert!(engine.is_visible(&TableRow::new(["bee"])));
    }

    #[test]
    fn test_visible_rows_follow_latest_scan() {
        let mut table = FilterableTable::new(FilterConfig::default(), rows());
        table.set_search_term("c");
        let visible: Vec<_> = table.visible_rows().collect();
        assert_eq!(visible, vec![&TableRow::new(["C"])]);

        table.set_rows(vec![TableRow::new(["cc"]), TableRow::new(["d"])]);
        assert_eq!(table.visibility().as_slice(), &[true, false]);
    }
}
