//! Listing records.

use super::format::row_line;
use super::AnswerContext;

const MAX_SHOWN: usize = 20;

pub fn answer(ctx: &AnswerContext<'_>) -> String {
    let total = ctx.table.row_count();
    let mut out = format!("📋 **All Records ({} total):**\n\n", total);

    for row in 0..total.min(MAX_SHOWN) {
        out.push_str(&format!("**Record {}:** {}\n", row + 1, row_line(ctx.table, row)));
    }
    if total > MAX_SHOWN {
        out.push_str(&format!("\n... and {} more records.\n", total - MAX_SHOWN));
    }
    out
}
