//! Column identity

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::de::{self, Visitor};

use crate::error::ColumnKeyError;

/// Identifies the column a filter applies to.
///
/// A column is either a position in the row's cells or the name of a
/// row-level attribute. Both forms are used as map keys throughout the
/// engine, so a filter registered for `Index(3)` never matches `Name("3")`.
///
/// Text that parses as an unsigned integer becomes an index, anything else
/// becomes a name:
///
/// ```
/// use filterable_lib::model::ColumnKey;
///
/// assert_eq!("3".parse::<ColumnKey>().unwrap(), ColumnKey::Index(3));
/// assert_eq!("genres".parse::<ColumnKey>().unwrap(), ColumnKey::name("genres"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColumnKey {
    /// Zero-based cell position.
    Index(usize),
    /// Row attribute name.
    Name(String),
}

impl ColumnKey {
    /// Creates a name key without attempting numeric parsing.
    pub fn name(name: impl Into<String>) -> Self {
        ColumnKey::Name(name.into())
    }

    fn from_text(s: &str) -> Self {
        match s.parse::<usize>() {
            Ok(i) => ColumnKey::Index(i),
            Err(_) => ColumnKey::Name(s.to_string()),
        }
    }
}

impl FromStr for ColumnKey {
    type Err = ColumnKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColumnKeyError::Empty);
        }
        Ok(Self::from_text(s))
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKey::Index(i) => write!(f, "{}", i),
            ColumnKey::Name(n) => write!(f, "{}", n),
        }
    }
}

impl From<usize> for ColumnKey {
    fn from(index: usize) -> Self {
        ColumnKey::Index(index)
    }
}

impl From<&str> for ColumnKey {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl From<String> for ColumnKey {
    fn from(s: String) -> Self {
        match s.parse::<usize>() {
            Ok(i) => ColumnKey::Index(i),
            Err(_) => ColumnKey::Name(s),
        }
    }
}

impl From<&ColumnKey> for ColumnKey {
    fn from(key: &ColumnKey) -> Self {
        key.clone()
    }
}

struct ColumnKeyVisitor;

impl Visitor<'_> for ColumnKeyVisitor {
    type Value = ColumnKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a column index or a non-empty column name")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ColumnKey, E> {
        usize::try_from(v)
            .map(ColumnKey::Index)
            .map_err(|_| E::custom(format!("column index {} out of range", v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ColumnKey, E> {
        usize::try_from(v)
            .map(ColumnKey::Index)
            .map_err(|_| E::custom(format!("invalid column index {}", v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ColumnKey, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for ColumnKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ColumnKeyVisitor)
    }
}
