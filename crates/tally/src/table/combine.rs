//! Combining a primary and an optional secondary table into one.

use std::borrow::Cow;

use indexmap::IndexMap;
use thiserror::Error;
use tracing::debug;

use super::column::Column;
use super::value::Value;
use super::Table;
use crate::schema::{ColumnType, Provenance, TableProfile};

/// Neither input table holds any rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no data available")]
pub struct NoDataAvailable;

/// The unified table plus narrative attribution of where it came from.
#[derive(Debug, Clone)]
pub struct CombinedTable<'a> {
    /// The unified table. Borrowed when only one source had data.
    pub table: Cow<'a, Table>,
    /// Labels of the sources that contributed rows, in order.
    pub sources: Vec<String>,
    /// Source attribution per column.
    pub provenance: IndexMap<String, Provenance>,
}

impl CombinedTable<'_> {
    /// Whether rows from more than one source were merged.
    pub fn is_multi_source(&self) -> bool {
        self.sources.len() > 1
    }

    /// Profile of the unified table with provenance attached.
    pub fn profile(&self) -> TableProfile {
        self.table.profile(&self.sources, Some(&self.provenance))
    }
}

/// Merges input tables with possibly different column sets.
#[derive(Debug, Clone)]
pub struct TableCombiner {
    primary_label: String,
    secondary_label: String,
}

impl TableCombiner {
    /// Create a combiner that labels its sources with the given names.
    pub fn new(primary_label: impl Into<String>, secondary_label: impl Into<String>) -> Self {
        Self {
            primary_label: primary_label.into(),
            secondary_label: secondary_label.into(),
        }
    }

    /// Combine the inputs. Empty inputs are ignored; a single non-empty input
    /// is returned as is; two are merged by an outer union of columns.
    pub fn combine<'a>(
        &self,
        primary: Option<&'a Table>,
        secondary: Option<&'a Table>,
    ) -> Result<CombinedTable<'a>, NoDataAvailable> {
        let parts: Vec<(Provenance, &str, &'a Table)> = [
            (Provenance::Primary, self.primary_label.as_str(), primary),
            (Provenance::Secondary, self.secondary_label.as_str(), secondary),
        ]
        .into_iter()
        .filter_map(|(prov, label, table)| {
            table.filter(|t| !t.is_empty()).map(|t| (prov, label, t))
        })
        .collect();

        let sources: Vec<String> = parts.iter().map(|(_, label, _)| label.to_string()).collect();

        let mut provenance: IndexMap<String, Provenance> = IndexMap::new();
        for (prov, _, table) in &parts {
            for name in table.column_names() {
                provenance
                    .entry(name.to_string())
                    .and_modify(|p| *p = p.merge(*prov))
                    .or_insert(*prov);
            }
        }

        let table = match parts.as_slice() {
            [] => return Err(NoDataAvailable),
            [(_, _, only)] => Cow::Borrowed(*only),
            _ => {
                let tables: Vec<&Table> = parts.iter().map(|(_, _, t)| *t).collect();
                Cow::Owned(union_columns(&tables, provenance.keys()))
            }
        };

        debug!(
            sources = sources.len(),
            rows = table.row_count(),
            columns = table.column_count(),
            "combined input tables"
        );

        Ok(CombinedTable {
            table,
            sources,
            provenance,
        })
    }
}

/// Stack the rows of every table under the union of their columns.
fn union_columns<'n>(tables: &[&Table], names: impl Iterator<Item = &'n String>) -> Table {
    let row_count: usize = tables.iter().map(|t| t.row_count()).sum();

    let columns = names
        .map(|name| {
            let segments: Vec<Option<&Column>> = tables.iter().map(|t| t.column(name)).collect();
            let column_type = merged_type(&segments);

            let mut values = Vec::with_capacity(row_count);
            for (table, segment) in tables.iter().zip(&segments) {
                match segment {
                    Some(column) => values.extend(column.values().iter().cloned()),
                    None => values.extend(std::iter::repeat_n(Value::Null, table.row_count())),
                }
            }

            // Text gaps become empty strings so searching never trips on them
            if column_type.is_textual() {
                values = values
                    .into_iter()
                    .map(|v| match v.into_text() {
                        Value::Null => Value::Text(String::new()),
                        other => other,
                    })
                    .collect();
            }

            Column::with_type(name.clone(), column_type, values)
        })
        .collect();

    Table::assemble(columns, row_count)
}

/// Storage type of a column assembled from several sources.
fn merged_type(segments: &[Option<&Column>]) -> ColumnType {
    let has_gaps = segments.iter().any(Option::is_none);
    let present: Vec<ColumnType> = segments
        .iter()
        .flatten()
        .map(|c| c.column_type())
        .filter(|t| *t != ColumnType::Unknown)
        .collect();

    let Some(&first) = present.first() else {
        return ColumnType::Unknown;
    };

    if present.iter().all(ColumnType::is_numeric) {
        if present.iter().all(|t| *t == ColumnType::Integer) {
            ColumnType::Integer
        } else {
            ColumnType::Float
        }
    } else if present.iter().all(ColumnType::is_temporal) {
        if present.contains(&ColumnType::DateTime) {
            ColumnType::DateTime
        } else {
            ColumnType::Date
        }
    } else if !has_gaps && present.iter().all(|t| *t == first) {
        first
    } else {
        ColumnType::Text
    }
}
