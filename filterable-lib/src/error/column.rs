//! ColumnKeyError for column key parsing

/// Error type for parsing a [`ColumnKey`](crate::model::ColumnKey) from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnKeyError {
    /// The key was empty (or only whitespace).
    #[error("Column key must not be empty")]
    Empty,
}
