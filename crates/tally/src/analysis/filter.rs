//! Filtering by `column value` and numeric threshold constraints.

use tracing::trace;

use super::format::row_line;
use super::{search, AnswerContext};
use crate::table::Column;

const MAX_SHOWN: usize = 10;

/// One applied constraint: its description and the rows it keeps.
struct Constraint {
    label: String,
    rows: Vec<bool>,
}

pub fn answer(ctx: &AnswerContext<'_>) -> String {
    let referenced = ctx.referenced();
    let mut constraints: Vec<Constraint> = Vec::new();

    for column in &referenced {
        if let Some(constraint) = categorical_constraint(ctx, column) {
            constraints.push(constraint);
        }
    }
    for column in referenced.iter().filter(|c| c.is_numeric()) {
        if let Some(constraint) = numeric_constraint(ctx, column) {
            constraints.push(constraint);
        }
    }

    if constraints.is_empty() {
        return search::answer(ctx);
    }

    let rows: Vec<usize> = (0..ctx.table.row_count())
        .filter(|&row| constraints.iter().all(|c| c.rows[row]))
        .collect();

    let labels: Vec<&str> = constraints.iter().map(|c| c.label.as_str()).collect();
    let mut out = format!(
        "🔍 **Filtered Results ({} records):**\n\nFilters applied: {}\n\n",
        rows.len(),
        labels.join(", ")
    );
    for &row in rows.iter().take(MAX_SHOWN) {
        out.push_str(&format!("**Record {}:** {}\n", row + 1, row_line(ctx.table, row)));
    }
    if rows.len() > MAX_SHOWN {
        out.push_str(&format!("\n... and {} more records.\n", rows.len() - MAX_SHOWN));
    }
    out
}

/// First mentioned status value that matches at least one row.
fn categorical_constraint(ctx: &AnswerContext<'_>, column: &Column) -> Option<Constraint> {
    ctx.interpretation
        .status_values_for(column.name())
        .iter()
        .find_map(|value| {
            let matches = column.rows_equal_to(value);
            if matches.is_empty() {
                return None;
            }
            let mut rows = vec![false; column.len()];
            for row in matches {
                rows[row] = true;
            }
            Some(Constraint {
                label: format!("{} = {}", column.name(), value),
                rows,
            })
        })
}

/// Threshold constraint; skipped without a numeric literal or when no row passes.
fn numeric_constraint(ctx: &AnswerContext<'_>, column: &Column) -> Option<Constraint> {
    let threshold = ctx.interpretation.threshold?;
    let Some(limit) = threshold.value else {
        trace!(column = column.name(), "threshold phrase without a number");
        return None;
    };

    let rows: Vec<bool> = column
        .values()
        .iter()
        .map(|v| {
            v.as_f64()
                .is_some_and(|n| threshold.comparison.holds(n, limit))
        })
        .collect();

    if !rows.contains(&true) {
        trace!(column = column.name(), limit, "no rows pass threshold");
        return None;
    }

    Some(Constraint {
        label: format!("{} {} {}", column.name(), threshold.comparison.symbol(), limit),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use crate::analysis::testing::{ask, incidents};

    #[test]
    fn test_categorical_filter() {
        let out = ask(&incidents(), "which status open");

        assert!(out.starts_with("🔍 **Filtered Results (3 records):**\n\nFilters applied: status = open\n\n"));
        assert!(out.contains("**Record 1:** id: 1 | Severity: High | status: open\n"));
        assert!(!out.contains("**Record 2:**"));
    }

    #[test]
    fn test_filters_intersect() {
        let out = ask(&incidents(), "which status open with cost greater than 15");

        assert!(out.contains("Filtered Results (1 records)"));
        assert!(out.contains("Filters applied: status = open, cost > 15"));
        assert!(out.contains("**Record 4:**"));
    }

    #[test]
    fn test_nulls_never_pass_threshold() {
        let out = ask(&incidents(), "which cost less than 100");
        // row 3 has no cost
        assert!(out.contains("Filtered Results (3 records)"));
        assert!(!out.contains("**Record 3:**"));
    }

    #[test]
    fn test_threshold_without_number_is_skipped() {
        let out = ask(&incidents(), "which cost is greater than usual");
        // no filter applies, so the query is searched instead
        assert!(!out.contains("Filtered Results"));
    }

    #[test]
    fn test_without_filters_delegates_to_search() {
        let out = ask(&incidents(), "which malware");
        assert!(out.starts_with("🔍 **Found 1 matching records:**"));
    }
}
