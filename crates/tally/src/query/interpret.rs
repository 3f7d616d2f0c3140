//! Turning query text into a structured interpretation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::extract::{self, StatusMention, Threshold};
use super::intent::{Intent, IntentClassifier};
use crate::table::Table;

/// Everything the handlers need to know about a query.
///
/// Derived fresh for every query and never reused across queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Lower-cased, trimmed query text.
    pub query: String,
    /// Selected intent.
    pub intent: Intent,
    /// Columns named in the query as whole words, in table order.
    pub columns: Vec<String>,
    /// Status values mentioned next to referenced columns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_mentions: Vec<StatusMention>,
    /// Numeric threshold phrase, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Threshold>,
}

impl Interpretation {
    /// Whether the normalized query contains any of the given phrases.
    pub fn mentions_any(&self, phrases: &[&str]) -> bool {
        phrases.iter().any(|p| self.query.contains(p))
    }

    /// Status values mentioned for a column, in vocabulary order.
    pub fn status_values_for(&self, column: &str) -> &[String] {
        self.status_mentions
            .iter()
            .find(|m| m.column == column)
            .map(|m| m.values.as_slice())
            .unwrap_or(&[])
    }
}

/// Normalize raw query text for matching.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Classifies intent and extracts references in a single pass.
#[derive(Debug, Clone)]
pub struct QueryInterpreter {
    classifier: IntentClassifier,
    status_values: Vec<String>,
}

impl QueryInterpreter {
    /// Create an interpreter that recognizes the given status vocabulary.
    pub fn new(status_values: Vec<String>) -> Self {
        Self {
            classifier: IntentClassifier::new(),
            status_values: status_values.into_iter().map(|v| v.to_lowercase()).collect(),
        }
    }

    /// The recognized status vocabulary.
    pub fn status_values(&self) -> &[String] {
        &self.status_values
    }

    /// Interpret a query against a table's columns.
    pub fn interpret(&self, query: &str, table: &Table) -> Interpretation {
        let query = normalize(query);
        let intent = self.classifier.classify(&query);
        let columns = extract::whole_word_columns(&query, &table.column_names());
        let status_mentions = extract::status_mentions(&query, &columns, &self.status_values);
        let threshold = extract::detect_threshold(&query);

        debug!(
            %intent,
            columns = ?columns,
            status_mentions = status_mentions.len(),
            threshold = ?threshold,
            "interpreted query"
        );

        Interpretation {
            query,
            intent,
            columns,
            status_mentions,
            threshold,
        }
    }
}
