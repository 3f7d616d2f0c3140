//! Free-text search across textual columns.

use std::collections::HashSet;

use tracing::trace;

use super::format::row_fields;
use super::AnswerContext;
use crate::query::extract::search_terms;
use crate::table::Table;

const MAX_SHOWN: usize = 10;

pub fn answer(ctx: &AnswerContext<'_>) -> String {
    let terms = search_terms(ctx.query());
    if terms.is_empty() {
        return format!(
            "Please provide specific search terms. For example: '{}'",
            ctx.role.search_example()
        );
    }

    let matches = matching_rows(ctx.table, &terms);

    if matches.is_empty() {
        return format!(
            "❌ No records found matching: {}\n\nTry different search terms or ask about specific columns or values.",
            terms.join(", ")
        );
    }

    let mut out = format!("🔍 **Found {} matching records:**\n\n", matches.len());
    for &row in matches.iter().take(MAX_SHOWN) {
        out.push_str(&format!("**Record {}:**\n", row + 1));
        out.push_str(&row_fields(ctx.table, row, 5, 3).join(" - "));
        out.push_str("\n\n");
    }
    if matches.len() > MAX_SHOWN {
        out.push_str(&format!("... and {} more results.\n", matches.len() - MAX_SHOWN));
    }
    out
}

/// Rows where any textual column contains any term, in column-then-row
/// discovery order, with rows of identical content reported once.
pub fn matching_rows(table: &Table, terms: &[String]) -> Vec<usize> {
    let mut seen_rows = HashSet::new();
    let mut seen_content = HashSet::new();
    let mut matches = Vec::new();

    for column in table.columns() {
        if !column.is_textual() {
            trace!(column = column.name(), "skipping non-text column in search");
            continue;
        }
        for (row, value) in column.values().iter().enumerate() {
            let Some(text) = value.as_text() else {
                continue;
            };
            let text = text.to_lowercase();
            if !terms.iter().any(|term| text.contains(term.as_str())) {
                continue;
            }
            if seen_rows.insert(row) && seen_content.insert(row_key(table, row)) {
                matches.push(row);
            }
        }
    }

    matches
}

fn row_key(table: &Table, row: usize) -> Vec<String> {
    table
        .columns()
        .map(|c| c.get(row).map(|v| v.to_string()).unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::testing::{ask, incidents};
    use crate::table::Column;

    #[test]
    fn test_matches_any_term_case_insensitive() {
        let out = ask(&incidents(), "find phishing");

        assert!(out.starts_with("🔍 **Found 2 matching records:**\n\n"));
        assert!(out.contains("**Record 1:**\nid: 1 - Severity: High - status: open\n\n"));
        assert!(out.contains("**Record 3:**\n"));
    }

    #[test]
    fn test_no_terms_gives_hint() {
        let out = ask(&incidents(), "show me");
        assert!(out.starts_with("Please provide specific search terms."));
    }

    #[test]
    fn test_no_matches() {
        let out = ask(&incidents(), "find ransomware");
        assert_eq!(
            out,
            "❌ No records found matching: ransomware\n\nTry different search terms or ask about specific columns or values."
        );
    }

    #[test]
    fn test_duplicate_rows_reported_once() {
        let table = Table::new(vec![
            Column::from_raw("a", &["alpha", "alpha", "beta"]),
            Column::from_raw("b", &["x", "x", "alpha"]),
        ])
        .unwrap();
        assert_eq!(matching_rows(&table, &["alpha".to_string()]), vec![0, 2]);
    }

    #[test]
    fn test_overflow_note() {
        let names: Vec<String> = (0..12).map(|i| format!("host-{}", i)).collect();
        let table = Table::new(vec![Column::from_raw("name", &names)]).unwrap();
        let out = ask(&table, "search host");

        assert!(out.contains("Found 12 matching records"));
        assert!(out.ends_with("... and 2 more results.\n"));
    }

    #[test]
    fn test_search_is_repeatable() {
        let table = incidents();
        assert_eq!(ask(&table, "find open"), ask(&table, "find open"));
    }
}
