//! Distinct values of referenced columns.

use super::{search, AnswerContext};

const MAX_LISTED: usize = 15;
const MAX_SAMPLES: usize = 10;

pub fn answer(ctx: &AnswerContext<'_>) -> String {
    let threshold = ctx.config.categorical_threshold;
    let mut body = String::new();

    for column in ctx.referenced() {
        let unique = column.unique_values();
        if unique.is_empty() {
            continue;
        }

        if unique.len() <= threshold {
            body.push_str(&format!("**{} values:**\n", column.name()));
            for value in unique.iter().take(MAX_LISTED) {
                body.push_str(&format!("- {}\n", value));
            }
            if unique.len() > MAX_LISTED {
                body.push_str(&format!("... and {} more\n", unique.len() - MAX_LISTED));
            }
            body.push('\n');
        } else {
            let samples: Vec<String> = unique
                .iter()
                .take(MAX_SAMPLES)
                .map(|v| v.to_string())
                .collect();
            body.push_str(&format!(
                "**{}:** {} unique values\nSample values: {}\n\n",
                column.name(),
                unique.len(),
                samples.join(", ")
            ));
        }
    }

    if body.is_empty() {
        return search::answer(ctx);
    }

    format!("📋 **Value Query Results:**\n\n{}", body)
}

#[cfg(test)]
mod tests {
    use crate::analysis::testing::{ask, incidents};
    use crate::table::{Column, Table};

    #[test]
    fn test_lists_values_in_first_seen_order() {
        let out = ask(&incidents(), "give me severity");
        assert_eq!(
            out,
            "📋 **Value Query Results:**\n\n**Severity values:**\n- High\n- Low\n- Medium\n\n"
        );
    }

    #[test]
    fn test_overflow_past_fifteen() {
        let codes: Vec<String> = (0..18).map(|i| format!("c{}", i)).collect();
        let table = Table::new(vec![Column::from_raw("code", &codes)]).unwrap();
        let out = ask(&table, "tell me code");

        assert!(out.contains("- c14\n... and 3 more\n"));
        assert!(!out.contains("- c15\n"));
    }

    #[test]
    fn test_wide_column_samples() {
        let users: Vec<String> = (0..30).map(|i| format!("u{}", i)).collect();
        let table = Table::new(vec![Column::from_raw("user", &users)]).unwrap();
        let out = ask(&table, "give me user");

        assert!(out.contains("**user:** 30 unique values\nSample values: u0, u1, u2"));
        assert!(out.contains("u9\n\n"));
    }

    #[test]
    fn test_falls_back_to_search() {
        let out = ask(&incidents(), "give me malware");
        assert!(out.starts_with("🔍 **Found 1 matching records:**"));
    }
}
