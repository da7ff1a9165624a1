//! Free-text search

use super::normalize;
use crate::model::FilterRow;

/// Holds the active search term and matches rows against it.
///
/// A row matches when any of its cells contains the term. The empty term
/// matches every row.
#[derive(Debug, Clone, Default)]
pub struct SearchMatcher {
    case_sensitive: bool,
    term: String,
}

impl SearchMatcher {
    /// Creates a matcher with an empty term.
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            case_sensitive,
            term: String::new(),
        }
    }

    /// Replaces the search term.
    pub fn set_term(&mut self, raw_term: &str) {
        self.term = normalize(raw_term, self.case_sensitive).into_owned();
        log::debug!("Search term set to {:?}", self.term);
    }

    /// Returns the normalized term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Returns `true` if the term is empty.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Returns `true` if any cell of the row contains the term.
    pub fn row_matches<R: FilterRow + ?Sized>(&self, row: &R) -> bool {
        if self.term.is_empty() {
            return true;
        }
        row.cells()
            .any(|cell| normalize(cell, self.case_sensitive).contains(self.term.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableRow;

    fn row() -> TableRow {
        TableRow::new(["World of Warcraft", " Blizzard ", "mmorpg"])
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let search = SearchMatcher::new(false);
        assert!(search.row_matches(&row()));
        assert!(search.row_matches(&TableRow::default()));
    }

    #[test]
    fn test_case_insensitive_folds_both_sides() {
        let mut search = SearchMatcher::new(false);
        search.set_term("BLIZZARD");
        assert!(search.row_matches(&row()));
        search.set_term("blizz");
        assert_eq!(search.term(), "BLIZZ");
        assert!(search.row_matches(&row()));
    }

    #[test]
    fn test_case_sensitive() {
        let mut search = SearchMatcher::new(true);
        search.set_term("BLIZZARD");
        assert!(!search.row_matches(&row()));
        search.set_term("Blizzard");
        assert!(search.row_matches(&row()));
    }

    #[test]
    fn test_substring_across_cells_does_not_match() {
        let mut search = SearchMatcher::new(false);
        search.set_term("warcraft blizzard");
        assert!(!search.row_matches(&row()));
    }

    #[test]
    fn test_attributes_are_not_searched() {
        let mut search = SearchMatcher::new(false);
        search.set_term("yes");
        assert!(!search.row_matches(&row().with_attribute("released", "yes")));
    }
}
