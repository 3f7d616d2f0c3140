//! Schema types describing loaded tables.

mod column;
mod table;
mod types;

pub use column::{ColumnProfile, NumericSummary};
pub use table::TableProfile;
pub use types::{ColumnType, Provenance};
