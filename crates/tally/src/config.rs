//! Engine configuration and cosmetic role hints.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// Status-like values recognized next to a column name.
pub const DEFAULT_STATUS_VALUES: &[&str] = &[
    "critical", "high", "medium", "low", "open", "closed", "resolved", "pending", "active",
    "inactive",
];

/// Configuration for answering questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Categorical values recognized in `column value` phrases.
    pub status_values: Vec<String>,
    /// Maximum distinct values for a text column to count as categorical.
    pub categorical_threshold: usize,
    /// Label of the primary table in narrative output.
    pub primary_label: String,
    /// Label of the secondary table in narrative output.
    pub secondary_label: String,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            status_values: DEFAULT_STATUS_VALUES.iter().map(|s| s.to_string()).collect(),
            categorical_threshold: 20,
            primary_label: "primary source".to_string(),
            secondary_label: "secondary source".to_string(),
        }
    }
}

impl TallyConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON configuration file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| TallyError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: TallyConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.categorical_threshold == 0 {
            return Err(TallyError::Config(
                "categorical_threshold must be at least 1".to_string(),
            ));
        }
        if let Some(bad) = self
            .status_values
            .iter()
            .find(|v| v.trim().is_empty() || v.trim() != v.as_str())
        {
            return Err(TallyError::Config(format!(
                "status value '{}' must be non-empty without surrounding whitespace",
                bad
            )));
        }
        Ok(())
    }

    /// Replace the status vocabulary.
    pub fn with_status_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.status_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Add one value to the status vocabulary.
    pub fn with_status_value(mut self, value: impl Into<String>) -> Self {
        self.status_values.push(value.into());
        self
    }

    /// Set the categorical threshold.
    pub fn with_categorical_threshold(mut self, threshold: usize) -> Self {
        self.categorical_threshold = threshold;
        self
    }

    /// Set the narrative labels for the two sources.
    pub fn with_source_labels(
        mut self,
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        self.primary_label = primary.into();
        self.secondary_label = secondary.into();
        self
    }
}

/// Kind of data being questioned. Only changes phrasing, never analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleHint {
    CyberIncident,
    ItTicket,
    #[default]
    Dataset,
}

impl RoleHint {
    /// Plural noun for the rows of this kind of data.
    pub fn record_noun(&self) -> &'static str {
        match self {
            RoleHint::CyberIncident => "incidents",
            RoleHint::ItTicket => "tickets",
            RoleHint::Dataset => "records",
        }
    }

    /// Example search phrasing shown in usage hints.
    pub fn search_example(&self) -> &'static str {
        match self {
            RoleHint::CyberIncident => "Find incidents with high severity",
            RoleHint::ItTicket => "Find tickets with pending status",
            RoleHint::Dataset => "Find records with a specific value",
        }
    }
}

impl FromStr for RoleHint {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "cyber_incident" | "incident" | "cyber" => Ok(RoleHint::CyberIncident),
            "it_ticket" | "ticket" | "it" => Ok(RoleHint::ItTicket),
            "dataset" | "data" | "default" => Ok(RoleHint::Dataset),
            _ => Err(format!(
                "Unknown role: {}. Use: cyber-incident, it-ticket, or dataset.",
                s
            )),
        }
    }
}

impl fmt::Display for RoleHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleHint::CyberIncident => write!(f, "cyber-incident"),
            RoleHint::ItTicket => write!(f, "it-ticket"),
            RoleHint::Dataset => write!(f, "dataset"),
        }
    }
}
