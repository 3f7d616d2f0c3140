//! Count questions.

use super::format::{distribution, percent, title_case};
use super::AnswerContext;

/// Categorical columns shown in the general breakdown.
const MAX_BREAKDOWN_COLUMNS: usize = 7;
/// Values shown per column in the general breakdown.
const MAX_BREAKDOWN_VALUES: usize = 10;

pub fn answer(ctx: &AnswerContext<'_>) -> String {
    let table = ctx.table;
    let total = table.row_count();
    let threshold = ctx.config.categorical_threshold;
    let referenced = ctx.referenced();
    let mut out = String::new();

    let wants_unique = ctx.interpretation.mentions_any(&["unique", "different"]);

    for column in &referenced {
        if wants_unique {
            out.push_str(&format!(
                "📊 **Unique {} values:** {}\n\n",
                column.name(),
                column.unique_count()
            ));
            continue;
        }

        let counts = column.value_counts();
        if counts.is_empty() || counts.len() > threshold {
            continue;
        }
        out.push_str(&format!("📊 **Count by {}:**\n\n", column.name()));
        for (value, count) in &counts {
            out.push_str(&format!(
                "- **{}:** {} ({}%)\n",
                value,
                count,
                percent(*count, total)
            ));
        }
        out.push('\n');
    }

    // Direct `column value` counts
    for column in &referenced {
        let hit = ctx
            .interpretation
            .status_values_for(column.name())
            .iter()
            .map(|value| (value, column.rows_equal_to(value).len()))
            .find(|(_, count)| *count > 0);

        if let Some((value, count)) = hit {
            out.push_str(&format!(
                "📊 **{} = '{}':** {}\n\n",
                column.name(),
                title_case(value),
                count
            ));
        }
    }

    if out.is_empty() {
        out.push_str(&format!("📊 **Total Records:** {}\n\n", total));

        let mut categorical = ctx.categorical_columns();
        // Fullest columns first; the sort is stable so table order breaks ties
        categorical.sort_by(|a, b| b.non_null_count().cmp(&a.non_null_count()));

        for column in categorical
            .into_iter()
            .filter(|c| c.non_null_count() > 0)
            .take(MAX_BREAKDOWN_COLUMNS)
        {
            out.push_str(&distribution(column, MAX_BREAKDOWN_VALUES, total));
        }
    }

    if ctx.is_multi_source() {
        out.push_str(&format!("\n*Data from: {}*\n", ctx.sources.join(", ")));
    }

    out
}
