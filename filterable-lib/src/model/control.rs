//! Filter controls

use serde::Deserialize;

use super::ColumnKey;

/// A single filter control, such as a checkbox in a filter group.
///
/// The control's `value` is what the widget reports. When the value shown
/// to the user differs from the text that appears in the table, `content`
/// carries the text to match instead and takes precedence.
///
/// # Example
///
/// ```
/// use filterable_lib::model::{ColumnKey, FilterControl};
///
/// let control = FilterControl::new(3, "first-person-shooter").with_content("fps");
/// assert_eq!(control.column, ColumnKey::Index(3));
/// assert_eq!(control.matching_value(), "fps");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FilterControl {
    /// The column this control filters.
    pub column: ColumnKey,
    /// The widget value.
    pub value: String,
    /// Alternate content to match against, if any.
    #[serde(default)]
    pub content: Option<String>,
}

impl FilterControl {
    /// Creates a control for a column with a widget value.
    pub fn new(column: impl Into<ColumnKey>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
            content: None,
        }
    }

    /// Sets the alternate content value.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Returns the text this control matches against table cells.
    pub fn matching_value(&self) -> &str {
        self.content.as_deref().unwrap_or(&self.value)
    }
}
