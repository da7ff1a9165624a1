//! Whole-table scans

use std::iter::FusedIterator;

use super::RowEvaluator;
use crate::model::FilterRow;

/// Visibility decision for one data row.
#[derive(Debug, Clone)]
pub struct RowVisibility<'r, R> {
    /// Position of the row in the table.
    pub index: usize,
    /// The row itself.
    pub row: &'r R,
    /// Whether the row should be shown.
    pub visible: bool,
}

/// Runs a [`RowEvaluator`] over every data row of a table.
///
/// Rows handed to the scanner must all be data rows; placeholder rows such
/// as an "empty results" message belong to the UI and are never evaluated.
#[derive(Debug, Clone, Copy)]
pub struct TableScanner<'a> {
    evaluator: RowEvaluator<'a>,
}

impl<'a> TableScanner<'a> {
    /// Creates a scanner for the given evaluator.
    pub fn new(evaluator: RowEvaluator<'a>) -> Self {
        Self { evaluator }
    }

    /// Lazily evaluates `rows` in table order.
    ///
    /// The returned iterator is `Clone`, so the same scan can be restarted.
    pub fn scan<'r, R: FilterRow>(&self, rows: &'r [R]) -> Scan<'a, 'r, R> {
        Scan {
            evaluator: self.evaluator,
            rows: rows.iter().enumerate(),
        }
    }

    /// Evaluates every row and collects the decisions.
    pub fn visibility<R: FilterRow>(&self, rows: &[R]) -> Visibility {
        let visibility: Visibility = self.scan(rows).collect();
        log::trace!(
            "Scanned {} rows, {} visible",
            visibility.len(),
            visibility.visible_count()
        );
        visibility
    }

    /// Returns `true` if no row in the results is visible.
    pub fn is_result_empty<'r, R: 'r, I>(results: I) -> bool
    where
        I: IntoIterator<Item = RowVisibility<'r, R>>,
    {
        !results.into_iter().any(|r| r.visible)
    }
}

/// Lazy iterator returned by [`TableScanner::scan`].
#[derive(Debug, Clone)]
pub struct Scan<'a, 'r, R> {
    evaluator: RowEvaluator<'a>,
    rows: std::iter::Enumerate<std::slice::Iter<'r, R>>,
}

impl<'r, R: FilterRow> Iterator for Scan<'_, 'r, R> {
    type Item = RowVisibility<'r, R>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, row) = self.rows.next()?;
        Some(RowVisibility {
            index,
            row,
            visible: self.evaluator.is_visible(row),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl<R: FilterRow> ExactSizeIterator for Scan<'_, '_, R> {}

impl<R: FilterRow> FusedIterator for Scan<'_, '_, R> {}

/// Striping class of a visible row, counted over visible rows only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stripe {
    Odd,
    Even,
}

impl Stripe {
    /// Class name used for row striping.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stripe::Odd => "odd",
            Stripe::Even => "even",
        }
    }
}

/// Collected visibility decisions for a table, in row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Visibility {
    rows: Vec<bool>,
}

impl Visibility {
    /// Number of rows scanned.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no rows were scanned.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns whether the row at `index` is visible.
    pub fn is_visible(&self, index: usize) -> Option<bool> {
        self.rows.get(index).copied()
    }

    /// Number of visible rows.
    pub fn visible_count(&self) -> usize {
        self.rows.iter().filter(|v| **v).count()
    }

    /// Returns `true` if no row is visible, i.e. the UI should show its
    /// empty-results placeholder.
    pub fn is_result_empty(&self) -> bool {
        !self.rows.iter().any(|v| *v)
    }

    /// Indices of the visible rows, in order.
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| i)
    }

    /// Visible row indices paired with their stripe, starting with odd.
    pub fn stripes(&self) -> impl Iterator<Item = (usize, Stripe)> + '_ {
        self.visible_indices().enumerate().map(|(n, index)| {
            let stripe = if n % 2 == 0 { Stripe::Odd } else { Stripe::Even };
            (index, stripe)
        })
    }

    /// The decisions as a slice of flags.
    pub fn as_slice(&self) -> &[bool] {
        &self.rows
    }
}

impl<'r, R> FromIterator<RowVisibility<'r, R>> for Visibility {
    fn from_iter<I: IntoIterator<Item = RowVisibility<'r, R>>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().map(|r| r.visible).collect(),
        }
    }
}
