//! Table-level profile.

use serde::{Deserialize, Serialize};

use super::column::ColumnProfile;

/// Profile of an entire (possibly combined) table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableProfile {
    /// Number of rows.
    pub row_count: usize,
    /// Labels of the sources that contributed rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    /// Profiles for each column.
    pub columns: Vec<ColumnProfile>,
}

impl TableProfile {
    /// Get a column by name.
    pub fn get_column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
