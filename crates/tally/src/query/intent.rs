//! Keyword-based intent classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of question being asked, selecting which handler answers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Count,
    Statistics,
    Search,
    Filter,
    Comparison,
    Trend,
    Value,
    List,
    Summary,
    /// Nothing matched; answered by the general fallback.
    General,
}

impl Intent {
    /// Every intent, in priority order.
    pub const ALL: [Intent; 10] = [
        Intent::Count,
        Intent::Statistics,
        Intent::Search,
        Intent::Filter,
        Intent::Comparison,
        Intent::Trend,
        Intent::Value,
        Intent::List,
        Intent::Summary,
        Intent::General,
    ];

    /// Get a lower-case label.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Count => "count",
            Intent::Statistics => "statistics",
            Intent::Search => "search",
            Intent::Filter => "filter",
            Intent::Comparison => "comparison",
            Intent::Trend => "trend",
            Intent::Value => "value",
            Intent::List => "list",
            Intent::Summary => "summary",
            Intent::General => "general",
        }
    }

    /// Emoji that prefixes this intent's answers.
    pub fn emoji(&self) -> &'static str {
        match self {
            Intent::Count | Intent::Comparison => "📊",
            Intent::Statistics | Intent::Trend => "📈",
            Intent::Search | Intent::Filter => "🔍",
            Intent::Value | Intent::List | Intent::Summary => "📋",
            Intent::General => "💡",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.label() == s.trim().to_lowercase())
            .ok_or_else(|| format!("Unknown intent: {}", s))
    }
}

/// Ordered keyword rules. The first rule with any keyword contained in the
/// query wins, so a query that mentions several categories resolves to the
/// earliest one.
pub const INTENT_RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Count,
        &["how many", "count", "total", "number of", "quantity"],
    ),
    (
        Intent::Statistics,
        &[
            "average",
            "mean",
            "median",
            "min",
            "max",
            "sum",
            "statistics",
            "stats",
            "avg",
        ],
    ),
    (Intent::Search, &["find", "search", "show", "display", "get"]),
    (
        Intent::Filter,
        &["where", "which", "what", "who", "when", "with", "having"],
    ),
    (
        Intent::Comparison,
        &[
            "compare",
            "difference",
            "vs",
            "versus",
            "more than",
            "less than",
            "greater",
            "smaller",
        ],
    ),
    (
        Intent::Trend,
        &[
            "trend",
            "over time",
            "recent",
            "latest",
            "oldest",
            "newest",
            "earliest",
            "last",
        ],
    ),
    (Intent::Value, &["value", "what is", "tell me", "give me"]),
    (Intent::List, &["list", "all", "every", "each"]),
    (
        Intent::Summary,
        &["summary", "overview", "tell me about", "describe"],
    ),
];

/// Maps a normalized query to an [`Intent`].
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: &'static [(Intent, &'static [&'static str])],
}

impl IntentClassifier {
    /// Create a classifier over the built-in rule table.
    pub fn new() -> Self {
        Self {
            rules: INTENT_RULES,
        }
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[(Intent, &'static [&'static str])] {
        self.rules
    }

    /// Classify a lower-cased, trimmed query by substring containment.
    pub fn classify(&self, query: &str) -> Intent {
        self.rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| query.contains(k)))
            .map(|(intent, _)| *intent)
            .unwrap_or(Intent::General)
    }

    /// Every intent whose keywords appear, in priority order.
    pub fn candidates(&self, query: &str) -> Vec<Intent> {
        self.rules
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| query.contains(k)))
            .map(|(intent, _)| *intent)
            .collect()
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
