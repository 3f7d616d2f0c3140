//! Typed in-memory tables.
//!
//! A [`Table`] is an ordered set of equally long [`Column`]s. Each column's
//! storage type and date hints are computed once when it is built, so every
//! query against the same table reuses them.

mod column;
mod combine;
pub mod temporal;
mod value;

use indexmap::IndexMap;

pub use column::Column;
pub use combine::{CombinedTable, NoDataAvailable, TableCombiner};
pub use value::Value;

use crate::error::{Result, TallyError};
use crate::input::DataTable;
use crate::schema::{ColumnProfile, Provenance, TableProfile};

/// An ordered collection of named, equally long columns.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: IndexMap<String, Column>,
    row_count: usize,
}

impl Table {
    /// Build a table, checking that all columns have the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let row_count = columns.first().map(Column::len).unwrap_or(0);
        let mut map = IndexMap::with_capacity(columns.len());

        for column in columns {
            if column.len() != row_count {
                return Err(TallyError::Shape {
                    column: column.name().to_string(),
                    expected: row_count,
                    actual: column.len(),
                });
            }
            if map.contains_key(column.name()) {
                return Err(TallyError::DuplicateColumn(column.name().to_string()));
            }
            map.insert(column.name().to_string(), column);
        }

        Ok(Self {
            columns: map,
            row_count,
        })
    }

    /// Build from columns already known to share `row_count`.
    pub(crate) fn assemble(columns: Vec<Column>, row_count: usize) -> Self {
        debug_assert!(columns.iter().all(|c| c.len() == row_count));
        Self {
            columns: columns
                .into_iter()
                .map(|c| (c.name().to_string(), c))
                .collect(),
            row_count,
        }
    }

    /// Type a raw table. Repeated header names get a `.N` suffix.
    pub fn from_data_table(data: &DataTable) -> Self {
        let mut seen: IndexMap<String, usize> = IndexMap::new();
        let columns = data
            .headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let occurrence = seen.entry(header.clone()).or_insert(0);
                let name = if *occurrence == 0 {
                    header.clone()
                } else {
                    format!("{}.{}", header, occurrence)
                };
                *occurrence += 1;

                let raw: Vec<&str> = data.column_values(idx).collect();
                Column::from_raw(name, &raw)
            })
            .collect();

        Self::assemble(columns, data.row_count())
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// A table with no rows or no columns holds no usable data.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0 || self.columns.is_empty()
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Iterate columns in table order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// Get a cell.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        self.columns.get(column).and_then(|c| c.get(row))
    }

    /// Numeric columns in table order.
    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns().filter(|c| c.is_numeric()).collect()
    }

    /// Textual columns in table order.
    pub fn textual_columns(&self) -> Vec<&Column> {
        self.columns().filter(|c| c.is_textual()).collect()
    }

    /// Textual columns with at most `threshold` distinct values.
    pub fn categorical_columns(&self, threshold: usize) -> Vec<&Column> {
        self.columns()
            .filter(|c| c.is_categorical(threshold))
            .collect()
    }

    /// Columns that look temporal: by name first, by content otherwise.
    pub fn date_columns(&self) -> Vec<&Column> {
        let by_name: Vec<&Column> = self.columns().filter(|c| c.name_suggests_date()).collect();
        if !by_name.is_empty() {
            return by_name;
        }
        self.columns()
            .filter(|c| c.content_parses_as_date())
            .collect()
    }

    /// Profile every column, attributing provenance when given.
    pub fn profile(
        &self,
        sources: &[String],
        provenance: Option<&IndexMap<String, Provenance>>,
    ) -> TableProfile {
        let columns = self
            .columns()
            .enumerate()
            .map(|(position, column)| ColumnProfile {
                name: column.name().to_string(),
                position,
                column_type: column.column_type(),
                provenance: provenance.and_then(|p| p.get(column.name()).copied()),
                count: column.len(),
                null_count: column.null_count(),
                unique_count: column.unique_count(),
                temporal: column.name_suggests_date() || column.content_parses_as_date(),
                numeric: column.numeric_summary(),
            })
            .collect();

        TableProfile {
            row_count: self.row_count,
            sources: sources.to_vec(),
            columns,
        }
    }
}

impl From<&DataTable> for Table {
    fn from(data: &DataTable) -> Self {
        Table::from_data_table(data)
    }
}
