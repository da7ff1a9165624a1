//! Row access for filtering

use std::collections::HashMap;

use serde::Deserialize;

use super::ColumnKey;

/// Read access to the text of a table row.
///
/// The engine never needs to know how a row is stored; it only reads cell
/// text by position and attribute text by name. Rows that carry no
/// row-level attributes can rely on the default [`attribute`](FilterRow::attribute).
///
/// # Example
///
/// ```
/// use filterable_lib::model::{ColumnKey, FilterRow};
///
/// struct Game {
///     title: String,
///     genres: String,
/// }
///
/// impl FilterRow for Game {
///     fn cell_count(&self) -> usize {
///         1
///     }
///
///     fn cell(&self, index: usize) -> Option<&str> {
///         (index == 0).then_some(self.title.as_str())
///     }
///
///     fn attribute(&self, name: &str) -> Option<&str> {
///         (name == "genres").then_some(self.genres.as_str())
///     }
/// }
///
/// let game = Game { title: "Portal".into(), genres: "puzzle".into() };
/// assert_eq!(game.column_text(&ColumnKey::name("genres")), Some("puzzle"));
/// ```
pub trait FilterRow {
    /// Number of cells in the row.
    fn cell_count(&self) -> usize;

    /// Text of the cell at `index`, or `None` past the end of the row.
    fn cell(&self, index: usize) -> Option<&str>;

    /// Text of a row-level attribute, if the row has one with this name.
    fn attribute(&self, _name: &str) -> Option<&str> {
        None
    }

    /// Resolves a column key to the text it refers to in this row.
    fn column_text(&self, key: &ColumnKey) -> Option<&str> {
        match key {
            ColumnKey::Index(i) => self.cell(*i),
            ColumnKey::Name(name) => self.attribute(name),
        }
    }

    /// Iterates the row's cell texts in column order.
    fn cells(&self) -> impl Iterator<Item = &str> {
        (0..self.cell_count()).filter_map(move |i| self.cell(i))
    }
}

impl<R: FilterRow + ?Sized> FilterRow for &R {
    fn cell_count(&self) -> usize {
        (**self).cell_count()
    }

    fn cell(&self, index: usize) -> Option<&str> {
        (**self).cell(index)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        (**self).attribute(name)
    }
}

impl FilterRow for Vec<String> {
    fn cell_count(&self) -> usize {
        self.len()
    }

    fn cell(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }
}

impl FilterRow for [&str] {
    fn cell_count(&self) -> usize {
        self.len()
    }

    fn cell(&self, index: usize) -> Option<&str> {
        self.get(index).copied()
    }
}

/// An owned table row with cells and row-level attributes.
///
/// Deserializes from either a plain array of cells or an object with
/// `cells` and `attributes`:
///
/// ```
/// use filterable_lib::model::{FilterRow, TableRow};
///
/// let rows: Vec<TableRow> = serde_json::from_str(r#"[
///     ["WoW", "Blizzard"],
///     { "cells": ["Portal", "Valve"], "attributes": { "released": "yes" } }
/// ]"#).unwrap();
///
/// assert_eq!(rows[0].cell(1), Some("Blizzard"));
/// assert_eq!(rows[1].attribute("released"), Some("yes"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawRow")]
pub struct TableRow {
    /// Visible cell texts in column order.
    pub cells: Vec<String>,
    /// Row-level attributes, keyed by name.
    pub attributes: HashMap<String, String>,
}

impl TableRow {
    /// Creates a row from cell texts.
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            attributes: HashMap::new(),
        }
    }

    /// Sets a row-level attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

impl FilterRow for TableRow {
    fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRow {
    Cells(Vec<String>),
    Full {
        cells: Vec<String>,
        #[serde(default)]
        attributes: HashMap<String, String>,
    },
}

impl From<RawRow> for TableRow {
    fn from(raw: RawRow) -> Self {
        match raw {
            RawRow::Cells(cells) => TableRow {
                cells,
                attributes: HashMap::new(),
            },
            RawRow::Full { cells, attributes } => TableRow { cells, attributes },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_text_resolves_index_and_name() {
        let row = TableRow::new(["WoW", "Blizzard"]).with_attribute("released", "yes");
        assert_eq!(row.column_text(&ColumnKey::Index(1)), Some("Blizzard"));
        assert_eq!(row.column_text(&ColumnKey::Index(5)), None);
        assert_eq!(row.column_text(&ColumnKey::name("released")), Some("yes"));
        assert_eq!(row.column_text(&ColumnKey::name("genres")), None);
    }

    #[test]
    fn test_cells_iterates_in_order() {
        let row = vec!["a".to_string(), "b".to_string()];
        assert_eq!(row.cells().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_str_slice_rows_have_no_attributes() {
        let row: &[&str] = &["a", "b"];
        assert_eq!(row.cell(0), Some("a"));
        assert_eq!(row.attribute("a"), None);
    }

    #[test]
    fn test_deserialize_object_without_attributes() {
        let row: TableRow = serde_json::from_str(r#"{ "cells": ["x"] }"#).unwrap();
        assert_eq!(row, TableRow::new(["x"]));
    }
}
