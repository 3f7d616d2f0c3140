//! Column profiles and numeric summaries.

use serde::{Deserialize, Serialize};

use super::types::{ColumnType, Provenance};

// =============================================================================
// STREAMING STATISTICS
// =============================================================================
// Welford's online algorithm for computing mean and variance in a single pass.

/// Streaming accumulator for count, mean, variance and extrema.
#[derive(Debug, Clone)]
struct StreamingStats {
    count: usize,
    mean: f64,
    m2: f64, // Sum of squared differences from mean
    min: f64,
    max: f64,
}

impl StreamingStats {
    fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn add(&mut self, value: f64) {
        self.count += 1;

        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        let delta2 = value - self.mean;
        self.m2 += delta * delta2;

        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Sample standard deviation; undefined below two observations.
    fn sample_std(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some((self.m2 / (self.count - 1) as f64).sqrt())
        }
    }
}

/// Describe-style summary of the non-null values of a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    /// Number of non-null values.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    /// Sample standard deviation, absent for a single value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std: Option<f64>,
}

impl NumericSummary {
    /// Summarize a set of values. Returns `None` when there are none.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut stats = StreamingStats::new();
        for &value in values {
            stats.add(value);
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let mid = sorted.len() / 2;
        let median = if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(Self {
            count: stats.count,
            mean: stats.mean,
            median,
            min: stats.min,
            max: stats.max,
            std: stats.sample_std(),
        })
    }
}

/// Profile of a single column of a loaded table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Zero-based position in the table.
    pub position: usize,
    /// Storage type.
    pub column_type: ColumnType,
    /// Source attribution, when tables were combined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
    /// Total number of values (including nulls).
    pub count: usize,
    /// Number of null/missing values.
    pub null_count: usize,
    /// Number of unique non-null values.
    pub unique_count: usize,
    /// Whether the column looks like a date column.
    pub temporal: bool,
    /// Numeric summary (for numeric columns with data).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
}

impl ColumnProfile {
    /// Number of non-null values.
    pub fn non_null_count(&self) -> usize {
        self.count - self.null_count
    }

    /// Get the null percentage.
    pub fn null_percentage(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            (self.null_count as f64 / self.count as f64) * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_empty_is_none() {
        assert!(NumericSummary::from_values(&[]).is_none());
    }

    #[test]
    fn test_summary_basic() {
        let summary = NumericSummary::from_values(&[10.0, 20.0]).unwrap();
        assert_eq!(summary.count, 2);
        assert!((summary.mean - 15.0).abs() < 1e-9);
        assert!((summary.median - 15.0).abs() < 1e-9);
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 20.0);
        let std = summary.std.unwrap();
        assert!((std - 7.0710678).abs() < 1e-6);
    }

    #[test]
    fn test_single_value_has_no_std() {
        let summary = NumericSummary::from_values(&[4.0]).unwrap();
        assert_eq!(summary.median, 4.0);
        assert!(summary.std.is_none());
    }

    #[test]
    fn test_odd_median() {
        let summary = NumericSummary::from_values(&[9.0, 1.0, 5.0]).unwrap();
        assert_eq!(summary.median, 5.0);
    }

    #[test]
    fn test_null_percentage() {
        let profile = ColumnProfile {
            name: "x".to_string(),
            position: 0,
            column_type: ColumnType::Float,
            provenance: None,
            count: 4,
            null_count: 3,
            unique_count: 1,
            temporal: false,
            numeric: None,
        };
        assert_eq!(profile.non_null_count(), 1);
        assert_eq!(profile.null_percentage(), 75.0);
    }
}
