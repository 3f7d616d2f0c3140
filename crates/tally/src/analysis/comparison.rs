//! Side-by-side value breakdowns.

use super::format::{min_max_avg, percent};
use super::AnswerContext;
use crate::table::Column;

const MAX_COLUMNS: usize = 3;

pub fn answer(ctx: &AnswerContext<'_>) -> String {
    let total = ctx.table.row_count();
    let mut out = String::from("📊 **Comparison Analysis:**\n\n");

    let mut categorical = ctx.categorical_columns();
    if !ctx.interpretation.columns.is_empty() {
        categorical.retain(|c| ctx.interpretation.columns.iter().any(|r| r == c.name()));
    }

    if !categorical.is_empty() {
        for column in categorical
            .into_iter()
            .filter(|c| c.non_null_count() > 0)
            .take(MAX_COLUMNS)
        {
            out.push_str(&format!("**{} Comparison:**\n", column.name()));
            for (value, count) in &column.value_counts() {
                out.push_str(&format!(
                    "- **{}:** {} ({}%)\n",
                    value,
                    count,
                    percent(*count, total)
                ));
            }
            out.push('\n');
        }
        return out;
    }

    let numeric: Vec<(&Column, String)> = ctx
        .table
        .numeric_columns()
        .into_iter()
        .filter_map(|c| min_max_avg(c).map(|line| (c, line)))
        .take(MAX_COLUMNS)
        .collect();

    if numeric.is_empty() {
        out.push_str("No categorical or numeric columns are available to compare.\n");
        return out;
    }

    out.push_str("**Numeric Column Comparisons:**\n");
    for (column, line) in numeric {
        out.push_str(&format!("- **{}:** {}\n", column.name(), line));
    }
    out.push('\n');
    out
}
