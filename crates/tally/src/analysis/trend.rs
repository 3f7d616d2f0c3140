//! Time-based questions over the first date-like column.

use chrono::NaiveDateTime;
use indexmap::IndexMap;

use super::format::row_line;
use super::AnswerContext;

const MAX_ROWS: usize = 10;
const MAX_PERIODS: usize = 6;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn answer(ctx: &AnswerContext<'_>) -> String {
    let Some(column) = ctx.table.date_columns().into_iter().next() else {
        return "No date/time columns found for trend analysis.".to_string();
    };

    // Parseable rows in chronological order; the sort is stable
    let mut dated: Vec<(usize, NaiveDateTime)> = column
        .dates()
        .iter()
        .enumerate()
        .filter_map(|(row, date)| date.map(|d| (row, d)))
        .collect();
    dated.sort_by_key(|(_, date)| *date);

    // Undated rows trail the dated ones in either view, in table order
    let undated: Vec<usize> = column
        .dates()
        .iter()
        .enumerate()
        .filter(|(_, date)| date.is_none())
        .map(|(row, _)| row)
        .collect();

    let mut out = String::from("📈 **Trend Analysis:**\n\n");

    if ctx.interpretation.mentions_any(&["recent", "latest", "newest"]) {
        out.push_str("**Most Recent Records:**\n\n");
        let rows = dated.iter().rev().map(|(row, _)| *row);
        push_rows(&mut out, ctx, rows.chain(undated.iter().copied()));
    } else if ctx.interpretation.mentions_any(&["oldest", "earliest"]) {
        out.push_str("**Oldest Records:**\n\n");
        let rows = dated.iter().map(|(row, _)| *row);
        push_rows(&mut out, ctx, rows.chain(undated.iter().copied()));
    } else {
        match (dated.first(), dated.last()) {
            (Some((_, first)), Some((_, last))) => out.push_str(&format!(
                "**Date Range:** {} to {}\n\n",
                first.format(TIMESTAMP_FORMAT),
                last.format(TIMESTAMP_FORMAT)
            )),
            _ => out.push_str("**Date Range:** unavailable\n\n"),
        }
        out.push_str(&format!("**Total Records:** {}\n", ctx.table.row_count()));
        out.push_str("**Records per Period:**\n");

        let mut periods: IndexMap<String, usize> = IndexMap::new();
        for (_, date) in &dated {
            *periods.entry(date.format("%Y-%m").to_string()).or_insert(0) += 1;
        }
        let skip = periods.len().saturating_sub(MAX_PERIODS);
        for (period, count) in periods.iter().skip(skip) {
            out.push_str(&format!("- {}: {} records\n", period, count));
        }
    }

    if dated.is_empty() {
        out.push_str(&format!(
            "\nNone of the values in '{}' could be parsed as dates.\n",
            column.name()
        ));
    }

    out
}

fn push_rows(out: &mut String, ctx: &AnswerContext<'_>, rows: impl Iterator<Item = usize>) {
    for row in rows.take(MAX_ROWS) {
        out.push_str(&format!("- {}\n", row_line(ctx.table, row)));
    }
}
