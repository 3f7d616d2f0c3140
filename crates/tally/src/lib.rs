//! Tally: keyword-driven question answering over tabular data.
//!
//! Tally takes a primary table, an optional secondary table and a free-text
//! question, and answers with a formatted block of text. No model is
//! involved: the question is classified by ordered keyword rules and the
//! columns it names are found by whole-word matching.
//!
//! # Core Principles
//!
//! - **Read-only**: tables are never modified while answering
//! - **Always answers**: every path ends in text, never in an error
//! - **Typed once**: column types and date hints are computed when a table is built
//!
//! # Example
//!
//! ```no_run
//! use tally::Tally;
//!
//! let tally = Tally::new();
//! let (table, _source) = tally.load_table("incidents.csv").unwrap();
//! let answer = tally.respond(Some(&table), None, "how many severity high", None);
//!
//! println!("{}", answer.text);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod input;
pub mod query;
pub mod schema;
pub mod table;

mod tally;

pub use crate::tally::{Answer, NO_DATA_MESSAGE, Tally};
pub use config::{DEFAULT_STATUS_VALUES, RoleHint, TallyConfig};
pub use error::{Result, TallyError};
pub use input::{DataTable, Parser, SourceMetadata};
pub use query::{Intent, IntentClassifier, Interpretation, QueryInterpreter};
pub use schema::{ColumnProfile, ColumnType, NumericSummary, Provenance, TableProfile};
pub use table::{Column, CombinedTable, NoDataAvailable, Table, TableCombiner, Value};
