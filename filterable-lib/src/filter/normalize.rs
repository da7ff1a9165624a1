//! Text normalization shared by filters and search

use std::borrow::Cow;

/// Folds `text` to upper case unless `case_sensitive` is set.
///
/// Every value stored by a filter or the search matcher and every cell text
/// compared against them goes through this function, so both sides of a
/// comparison always use the same casing rule.
pub fn normalize(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_uppercase())
    }
}

/// Trims a cell for exact filter comparison.
///
/// Only filter matching trims. Search is a containment check, so
/// surrounding whitespace cannot stop a match.
pub fn trim_cell(text: &str) -> &str {
    text.trim()
}
