//! Answers for queries that match no intent keyword.

use super::format::top_values;
use super::AnswerContext;
use crate::query::extract::substring_columns;

const MAX_COLUMNS: usize = 5;
const MAX_LISTED_NAMES: usize = 10;

pub fn answer(ctx: &AnswerContext<'_>) -> String {
    let table = ctx.table;
    let names = table.column_names();
    let mentioned = substring_columns(ctx.query(), &names);

    if !mentioned.is_empty() {
        let mut out = String::from("📊 **Information about mentioned columns:**\n\n");
        for column in mentioned
            .iter()
            .filter_map(|name| table.column(name))
            .take(MAX_COLUMNS)
        {
            out.push_str(&format!("**{}:**\n", column.name()));
            out.push_str(&format!("- Unique values: {}\n", column.unique_count()));
            out.push_str(&format!("- Non-null records: {}\n", column.non_null_count()));
            match column.numeric_summary() {
                Some(stats) => out.push_str(&format!(
                    "- Min: {}, Max: {}, Avg: {:.2}\n",
                    stats.min, stats.max, stats.mean
                )),
                None if !column.is_numeric() => out.push_str(&format!(
                    "- Top values: {}\n",
                    top_values(column, 5)
                )),
                None => {}
            }
            out.push('\n');
        }
        return out;
    }

    let noun = ctx.role.record_noun();
    let mut out = String::from("💡 **I can help you with:**\n\n");
    out.push_str(&format!("• **Counts:** 'How many {} are there?'\n", noun));
    out.push_str("• **Statistics:** 'What's the average of [column]?'\n");
    out.push_str(&format!("• **Search:** 'Find {} with [value]'\n", noun));
    out.push_str(&format!("• **Filters:** 'Show {} where [column] = [value]'\n", noun));
    out.push_str("• **Comparisons:** 'Compare [column] values'\n");
    out.push_str(&format!("• **Trends:** 'Show me recent {}'\n", noun));
    out.push_str("• **Lists:** 'List all [column] values'\n");
    out.push_str("• **Summaries:** 'Give me an overview'\n\n");

    let shown: Vec<&str> = names.iter().take(MAX_LISTED_NAMES).copied().collect();
    out.push_str(&format!("**Available columns:** {}", shown.join(", ")));
    if names.len() > MAX_LISTED_NAMES {
        out.push_str(&format!(" ... and {} more", names.len() - MAX_LISTED_NAMES));
    }
    out.push_str(&format!("\n\n**Total records:** {}", table.row_count()));
    if ctx.is_multi_source() {
        out.push_str(&format!("\n**Data sources:** {}", ctx.sources.join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::analysis::testing::{ask, incidents};
    use crate::table::{Column, Table};

    #[test]
    fn test_capability_menu() {
        let out = ask(&incidents(), "hello there");

        assert!(out.starts_with("💡 **I can help you with:**\n\n"));
        assert!(out.contains("• **Counts:** 'How many records are there?'\n"));
        assert!(out.contains("**Available columns:** id, Severity, status, vector, cost\n\n**Total records:** 4"));
        assert!(!out.contains("Data sources"));
    }

    #[test]
    fn test_permissive_match_reports_column() {
        let out = ask(&incidents(), "statuss");

        assert!(out.starts_with("📊 **Information about mentioned columns:**\n\n**status:**\n"));
        assert!(out.contains("- Unique values: 2\n- Non-null records: 4\n- Top values: open(3), closed(1)\n"));
    }

    #[test]
    fn test_numeric_column_details() {
        let out = ask(&incidents(), "costs?");
        assert!(out.contains("**cost:**\n- Unique values: 3\n- Non-null records: 3\n- Min: 10, Max: 30, Avg: 20.00\n"));
    }

    #[test]
    fn test_many_columns_overflow() {
        let columns: Vec<Column> = (0..12)
            .map(|i| Column::from_raw(format!("c{}", i), &["x"]))
            .collect();
        let table = Table::new(columns).unwrap();
        let out = ask(&table, "hello");
        assert!(out.contains("c9 ... and 2 more\n\n"));
    }

    #[test]
    fn test_at_most_five_mentioned_columns() {
        let table = Table::new(
            ["aa", "bb", "cc", "dd", "ee", "ff"]
                .into_iter()
                .map(|name| Column::from_raw(name, &["x"]))
                .collect(),
        )
        .unwrap();
        let out = ask(&table, "aa bb cc dd ee ff");

        assert_eq!(out.matches("- Unique values: ").count(), 5);
        assert!(out.contains("**ee:**\n"));
        assert!(!out.contains("**ff:**"));
    }
}
