//! Whole-table overview.

use super::format::{min_max_avg, top_values};
use super::AnswerContext;
use crate::schema::Provenance;
use crate::table::Column;

const MAX_COLUMNS: usize = 20;
const MAX_NUMERIC: usize = 5;
const MAX_CATEGORICAL: usize = 3;
/// Distinct-value cap for the categorical section.
const LOW_CARDINALITY: usize = 10;

pub fn answer(ctx: &AnswerContext<'_>) -> String {
    let table = ctx.table;
    let mut out = String::from("📋 **Comprehensive Data Summary:**\n\n");
    out.push_str(&format!("- **Total Records:** {}\n", table.row_count()));
    out.push_str(&format!("- **Total Columns:** {}\n", table.column_count()));
    if ctx.is_multi_source() {
        out.push_str(&format!("- **Data Sources:** {}\n", ctx.sources.join(", ")));
    }

    out.push_str("\n**Column Information:**\n");
    for column in table.columns().take(MAX_COLUMNS) {
        out.push_str(&format!(
            "- **{}:** {}, {} non-null, {} unique values{}\n",
            column.name(),
            column.column_type(),
            column.non_null_count(),
            column.unique_count(),
            source_hint(ctx, column)
        ));
    }
    if table.column_count() > MAX_COLUMNS {
        out.push_str(&format!(
            "\n... and {} more columns.\n",
            table.column_count() - MAX_COLUMNS
        ));
    }

    let numeric: Vec<String> = table
        .numeric_columns()
        .into_iter()
        .filter_map(|c| min_max_avg(c).map(|line| format!("- **{}:** {}\n", c.name(), line)))
        .take(MAX_NUMERIC)
        .collect();
    if !numeric.is_empty() {
        out.push_str("\n**Numeric Column Statistics:**\n");
        out.push_str(&numeric.concat());
    }

    let categorical: Vec<&Column> = table
        .categorical_columns(LOW_CARDINALITY)
        .into_iter()
        .filter(|c| c.non_null_count() > 0)
        .take(MAX_CATEGORICAL)
        .collect();
    if !categorical.is_empty() {
        out.push_str("\n**Categorical Distributions:**\n");
        for column in categorical {
            out.push_str(&format!("- **{}:** {}\n", column.name(), top_values(column, 3)));
        }
    }

    out
}

/// Attribution note for a mostly empty column of a combined table.
fn source_hint(ctx: &AnswerContext<'_>, column: &Column) -> String {
    if !ctx.is_multi_source() || column.is_empty() {
        return String::new();
    }
    let missing = column.values().iter().filter(|v| v.is_blank()).count();
    if missing * 2 <= column.len() {
        return String::new();
    }
    let label = match ctx.provenance.get(column.name()) {
        Some(Provenance::Primary) => &ctx.config.primary_label,
        _ => &ctx.config.secondary_label,
    };
    format!(" (likely from {})", label)
}
