//! Text rendering shared by the handlers.

use crate::table::{Column, Table};

/// Percentage of `count` over `total`, one decimal place.
pub fn percent(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", count as f64 / total as f64 * 100.0)
}

/// `name: value` pairs for the first `take` non-blank cells among the
/// first `scan` columns of a row.
pub fn row_fields(table: &Table, row: usize, scan: usize, take: usize) -> Vec<String> {
    table
        .columns()
        .take(scan)
        .filter_map(|column| {
            column
                .get(row)
                .filter(|v| !v.is_blank())
                .map(|v| format!("{}: {}", column.name(), v))
        })
        .take(take)
        .collect()
}

/// Compact one-line rendering used by list, filter and trend output.
pub fn row_line(table: &Table, row: usize) -> String {
    row_fields(table, row, 4, 3).join(" | ")
}

/// `value(count)` pairs for the most frequent values of a column.
pub fn top_values(column: &Column, limit: usize) -> String {
    column
        .value_counts()
        .iter()
        .take(limit)
        .map(|(value, count)| format!("{}({})", value, count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `Min=…, Max=…, Avg=…` for a numeric column; `None` without values.
pub fn min_max_avg(column: &Column) -> Option<String> {
    column.numeric_summary().map(|s| {
        format!("Min={:.2}, Max={:.2}, Avg={:.2}", s.min, s.max, s.mean)
    })
}

/// Distribution block: a bold heading, then up to `limit` values with
/// their share of `total` rows.
pub fn distribution(column: &Column, limit: usize, total: usize) -> String {
    let mut out = format!("**{} Distribution:**\n", column.name());
    for (value, count) in column.value_counts().iter().take(limit) {
        out.push_str(&format!(
            "- {}: {} ({}%)\n",
            value,
            count,
            percent(*count, total)
        ));
    }
    out.push('\n');
    out
}

/// Title-case a word: first letter upper, rest lower.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
