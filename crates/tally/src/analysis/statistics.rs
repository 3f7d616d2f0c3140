//! Descriptive statistics over numeric columns.

use super::format::distribution;
use super::AnswerContext;
use crate::table::Column;

const MAX_COLUMNS: usize = 5;
const MAX_FALLBACK_COLUMNS: usize = 3;
const MAX_FALLBACK_VALUES: usize = 5;

pub fn answer(ctx: &AnswerContext<'_>) -> String {
    let mut out = String::from("📈 **Statistical Analysis:**\n\n");

    let referenced: Vec<&Column> = ctx
        .referenced()
        .into_iter()
        .filter(|c| c.is_numeric())
        .collect();
    let columns = if referenced.is_empty() {
        ctx.table.numeric_columns()
    } else {
        referenced
    };

    if columns.is_empty() {
        out.push_str("No numeric columns found for statistical analysis.\n");

        let categorical: Vec<&Column> = ctx
            .categorical_columns()
            .into_iter()
            .filter(|c| c.non_null_count() > 0)
            .take(MAX_FALLBACK_COLUMNS)
            .collect();

        if categorical.is_empty() {
            out.push_str("No categorical columns are available to summarize either.\n");
        }
        for column in categorical {
            out.push_str(&distribution(
                column,
                MAX_FALLBACK_VALUES,
                ctx.table.row_count(),
            ));
        }
        return out;
    }

    let mut rendered = 0;
    for column in columns.into_iter().take(MAX_COLUMNS) {
        let Some(stats) = column.numeric_summary() else {
            continue;
        };
        rendered += 1;
        out.push_str(&format!("**{} Statistics:**\n", column.name()));
        out.push_str(&format!("- Count: {}\n", stats.count));
        out.push_str(&format!("- Mean: {:.2}\n", stats.mean));
        out.push_str(&format!("- Median: {:.2}\n", stats.median));
        out.push_str(&format!("- Min: {:.2}\n", stats.min));
        out.push_str(&format!("- Max: {:.2}\n", stats.max));
        if let Some(std) = stats.std {
            out.push_str(&format!("- Std Dev: {:.2}\n", std));
        }
        out.push('\n');
    }

    if rendered == 0 {
        out.push_str("The numeric columns hold no values to analyze.\n");
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::analysis::testing::{ask, incidents};
    use crate::table::{Column, Table};

    #[test]
    fn test_mean_ignores_nulls() {
        let table = Table::new(vec![
            Column::from_raw("id", &["1", "2", "3"]),
            Column::from_raw("amount", &["10", "20", ""]),
        ])
        .unwrap();
        let out = ask(&table, "average amount");

        assert!(out.contains("**amount Statistics:**\n- Count: 2\n- Mean: 15.00\n"));
        assert!(out.contains("- Median: 15.00\n- Min: 10.00\n- Max: 20.00\n"));
        assert!(out.contains("- Std Dev: 7.07\n"));
        // only the referenced column
        assert!(!out.contains("id Statistics"));
    }

    #[test]
    fn test_without_reference_uses_all_numeric() {
        let out = ask(&incidents(), "stats please");
        assert!(out.contains("**id Statistics:**"));
        assert!(out.contains("**cost Statistics:**"));
    }

    #[test]
    fn test_single_value_has_no_std() {
        let table = Table::new(vec![Column::from_raw("score", &["4"])]).unwrap();
        let out = ask(&table, "mean score");
        assert!(out.contains("- Count: 1\n"));
        assert!(!out.contains("Std Dev"));
    }

    #[test]
    fn test_no_numeric_columns() {
        let table = Table::new(vec![Column::from_raw("team", &["red", "blue", "red"])]).unwrap();
        let out = ask(&table, "statistics");

        assert!(out.contains("No numeric columns found for statistical analysis.\n"));
        assert!(out.contains("**team Distribution:**\n- red: 2 (66.7%)\n- blue: 1 (33.3%)\n"));
    }

    #[test]
    fn test_nothing_to_analyze() {
        let table = Table::new(vec![Column::from_raw("empty", &["", ""])]).unwrap();
        let out = ask(&table, "stats");
        assert!(out.contains("No categorical columns are available"));
    }

    #[test]
    fn test_at_most_five_columns() {
        let columns: Vec<Column> = (0..6)
            .map(|i| Column::from_raw(format!("n{}", i), &["1", "2"]))
            .collect();
        let table = Table::new(columns).unwrap();
        let out = ask(&table, "stats please");

        assert_eq!(out.matches(" Statistics:**").count(), 5);
        assert!(out.contains("**n4 Statistics:**"));
        assert!(!out.contains("**n5 Statistics:**"));
    }
}
