//! Core type definitions for schema representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage type of a column, decided once when the column is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Whole numbers (no decimal point).
    Integer,
    /// Floating-point numbers.
    Float,
    /// Text/string values.
    Text,
    /// Boolean values (`true`/`false` only).
    Boolean,
    /// Date values, stored as their original text.
    Date,
    /// Date and time values, stored as their original text.
    DateTime,
    /// Every value is missing.
    #[default]
    Unknown,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }

    /// Returns true if this type is temporal.
    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnType::DateTime | ColumnType::Date)
    }

    /// Returns true if values are stored as text (searchable, possibly categorical).
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            ColumnType::Text | ColumnType::Date | ColumnType::DateTime
        )
    }

    /// Short storage label used in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Text => "text",
            ColumnType::Boolean => "boolean",
            ColumnType::Date => "date",
            ColumnType::DateTime => "datetime",
            ColumnType::Unknown => "empty",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which input table a combined column came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Only the primary table has this column.
    Primary,
    /// Only the secondary table has this column.
    Secondary,
    /// Both tables have this column.
    Both,
}

impl Provenance {
    /// Merge the provenance of a column seen again in another source.
    pub fn merge(self, other: Provenance) -> Provenance {
        if self == other { self } else { Provenance::Both }
    }
}
