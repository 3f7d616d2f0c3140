//! Pattern-based extraction of columns, values and thresholds from a query.
//!
//! Two column extractors exist with different strictness. [`whole_word_columns`]
//! anchors on word boundaries so `status` never matches inside `statistics`;
//! it produces the Reference Set every handler receives.
//! [`substring_columns`] is deliberately looser and only backs the general
//! fallback, where a broader guess is better than none.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::Result;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.?\d*").unwrap());
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Words ignored when building search terms.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "should", "could", "may", "might", "must", "can", "find", "show",
    "search", "get", "display",
];

const GREATER_KEYWORDS: &[&str] = &["greater than", "more than", ">"];
const LESS_KEYWORDS: &[&str] = &["less than", "smaller than", "<"];

/// Direction of a numeric threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Greater,
    Less,
}

impl Comparison {
    /// Operator symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Greater => ">",
            Comparison::Less => "<",
        }
    }

    /// Test a value against a threshold.
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::Greater => value > threshold,
            Comparison::Less => value < threshold,
        }
    }
}

/// A numeric threshold phrase found in the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub comparison: Comparison,
    /// First numeric literal in the query; `None` when the phrase has no number.
    pub value: Option<f64>,
}

/// Status vocabulary words mentioned alongside a referenced column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMention {
    pub column: String,
    /// Mentioned values, in vocabulary order.
    pub values: Vec<String>,
}

/// Case-insensitive pattern matching `word` only as a whole word.
fn whole_word_pattern(word: &str) -> Result<Regex> {
    let pattern = format!(r"\b{}\b", regex::escape(&word.to_lowercase()));
    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}

/// Whether `word` occurs in `query` as a whole word.
pub fn contains_word(query: &str, word: &str) -> bool {
    if word.trim().is_empty() {
        return false;
    }
    match whole_word_pattern(word) {
        Ok(pattern) => pattern.is_match(query),
        Err(err) => {
            trace!(word, %err, "skipping unmatchable word");
            false
        }
    }
}

/// Columns whose name appears in the query as a whole word, in table order.
pub fn whole_word_columns(query: &str, columns: &[&str]) -> Vec<String> {
    columns
        .iter()
        .filter(|name| contains_word(query, name.trim()))
        .map(|name| name.to_string())
        .collect()
}

/// Columns whose name appears anywhere in the query, in table order.
pub fn substring_columns(query: &str, columns: &[&str]) -> Vec<String> {
    let query = query.to_lowercase();
    columns
        .iter()
        .filter(|name| !name.trim().is_empty() && query.contains(&name.to_lowercase()))
        .map(|name| name.to_string())
        .collect()
}

/// Status values mentioned as whole words, grouped per referenced column.
pub fn status_mentions(query: &str, columns: &[String], vocabulary: &[String]) -> Vec<StatusMention> {
    let values: Vec<String> = vocabulary
        .iter()
        .filter(|value| contains_word(query, value))
        .cloned()
        .collect();

    if values.is_empty() {
        return Vec::new();
    }

    columns
        .iter()
        .map(|column| StatusMention {
            column: column.clone(),
            values: values.clone(),
        })
        .collect()
}

/// First numeric literal in the query.
pub fn first_number(query: &str) -> Option<f64> {
    NUMBER
        .find_iter(query)
        .find_map(|m| m.as_str().parse::<f64>().ok())
}

/// Detect a greater-than or less-than phrase. Greater wins if both appear.
pub fn detect_threshold(query: &str) -> Option<Threshold> {
    let comparison = if GREATER_KEYWORDS.iter().any(|k| query.contains(k)) {
        Comparison::Greater
    } else if LESS_KEYWORDS.iter().any(|k| query.contains(k)) {
        Comparison::Less
    } else {
        return None;
    };

    Some(Threshold {
        comparison,
        value: first_number(query),
    })
}

/// Lower-cased words of the query minus stop words and tokens under three letters.
pub fn search_terms(query: &str) -> Vec<String> {
    let lower = query.to_lowercase();
    WORD.find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|term| term.chars().count() > 2 && !STOP_WORDS.contains(term))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_does_not_match_inside_longer_token() {
        let cols = ["status", "severity"];
        assert!(whole_word_columns("show statistics", &cols).is_empty());
        assert!(whole_word_columns("statuss", &cols).is_empty());
        assert_eq!(whole_word_columns("count by status", &cols), vec!["status"]);
    }

    #[test]
    fn test_blank_column_name_is_never_referenced() {
        let cols = ["", "status"];
        assert_eq!(whole_word_columns("count by status", &cols), vec!["status"]);
        assert_eq!(substring_columns("count by status", &cols), vec!["status"]);
        assert!(!contains_word("anything at all", " "));
    }

    #[test]
    fn test_whole_word_preserves_table_casing_and_order() {
        let cols = ["Severity", "Status"];
        assert_eq!(
            whole_word_columns("status and severity", &cols),
            vec!["Severity", "Status"]
        );
    }

    #[test]
    fn test_permissive_matches_substrings() {
        let cols = ["status"];
        assert_eq!(substring_columns("statuss", &cols), vec!["status"]);
    }

    #[test]
    fn test_column_names_with_symbols_are_escaped() {
        let cols = ["unit.cost"];
        assert_eq!(whole_word_columns("unit.cost by team", &cols), vec!["unit.cost"]);
        assert!(whole_word_columns("unitxcost by team", &cols).is_empty());
    }

    #[test]
    fn test_status_mentions() {
        let vocab = vec!["high".to_string(), "open".to_string()];
        let cols = vec!["Severity".to_string()];
        let mentions = status_mentions("severity high and open", &cols, &vocab);
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].values, vec!["high", "open"]);

        assert!(status_mentions("severity highest", &cols, &vocab).is_empty());
    }

    #[test]
    fn test_detect_threshold() {
        let t = detect_threshold("cost greater than 12.5").unwrap();
        assert_eq!(t.comparison, Comparison::Greater);
        assert_eq!(t.value, Some(12.5));

        let t = detect_threshold("cost < 3").unwrap();
        assert_eq!(t.comparison, Comparison::Less);
        assert_eq!(t.value, Some(3.0));

        let t = detect_threshold("cost more than a lot").unwrap();
        assert_eq!(t.value, None);

        assert!(detect_threshold("cost of items").is_none());
    }

    #[test]
    fn test_first_number_takes_first_literal() {
        assert_eq!(first_number("top 5 with cost 100"), Some(5.0));
        assert_eq!(first_number("no digits"), None);
    }

    #[test]
    fn test_search_terms() {
        assert_eq!(
            search_terms("find incidents with a phishing vector in HR"),
            vec!["incidents", "phishing", "vector"]
        );
        assert!(search_terms("show me it").is_empty());
    }
}
