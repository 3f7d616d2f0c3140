//! Analytical handlers, one per intent.
//!
//! Every handler reads the table through an [`AnswerContext`] and returns
//! formatted text. None of them can fail: when the column class a handler
//! needs is missing it answers with a fallback message instead.

mod comparison;
mod count;
mod fallback;
mod filter;
pub mod format;
mod list;
mod search;
mod statistics;
mod summary;
mod trend;
mod value;

use indexmap::IndexMap;

use crate::config::{RoleHint, TallyConfig};
use crate::query::{Intent, Interpretation};
use crate::schema::Provenance;
use crate::table::{Column, Table};

/// Read-only view of everything a handler may consult.
#[derive(Debug, Clone, Copy)]
pub struct AnswerContext<'a> {
    pub table: &'a Table,
    pub interpretation: &'a Interpretation,
    /// Labels of the sources that contributed rows.
    pub sources: &'a [String],
    pub provenance: &'a IndexMap<String, Provenance>,
    pub config: &'a TallyConfig,
    pub role: RoleHint,
}

impl<'a> AnswerContext<'a> {
    /// The normalized query text.
    pub fn query(&self) -> &'a str {
        &self.interpretation.query
    }

    /// Referenced columns, in table order.
    pub fn referenced(&self) -> Vec<&'a Column> {
        self.interpretation
            .columns
            .iter()
            .filter_map(|name| self.table.column(name))
            .collect()
    }

    /// Whether more than one source contributed rows.
    pub fn is_multi_source(&self) -> bool {
        self.sources.len() > 1
    }

    /// Textual columns with few enough distinct values to enumerate.
    pub fn categorical_columns(&self) -> Vec<&'a Column> {
        self.table
            .categorical_columns(self.config.categorical_threshold)
    }
}

/// Route to the handler for the interpreted intent.
pub fn answer(ctx: &AnswerContext<'_>) -> String {
    match ctx.interpretation.intent {
        Intent::Count => count::answer(ctx),
        Intent::Statistics => statistics::answer(ctx),
        Intent::Search => search::answer(ctx),
        Intent::Filter => filter::answer(ctx),
        Intent::Comparison => comparison::answer(ctx),
        Intent::Trend => trend::answer(ctx),
        Intent::Value => value::answer(ctx),
        Intent::List => list::answer(ctx),
        Intent::Summary => summary::answer(ctx),
        Intent::General => fallback::answer(ctx),
    }
}
