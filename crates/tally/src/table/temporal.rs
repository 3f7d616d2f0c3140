//! Date detection and parsing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// LAZY STATIC PATTERNS
// =============================================================================

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}").unwrap(), // ISO date
        Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}").unwrap(), // US date
        Regex::new(r"^\d{1,2}-\d{1,2}-\d{4}").unwrap(), // European date
        Regex::new(r"^\d{4}/\d{1,2}/\d{1,2}").unwrap(), // Alt ISO
    ]
});

/// Column-name fragments that mark a column as temporal.
pub const DATE_NAME_HINTS: &[&str] = &["date", "time", "timestamp", "created", "updated"];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Check if a value looks like a date.
pub fn looks_like_date(value: &str) -> bool {
    let trimmed = value.trim();
    DATE_PATTERNS.iter().any(|pattern| pattern.is_match(trimmed))
}

/// Check if a date-like value also carries a time of day.
pub fn has_time_component(value: &str) -> bool {
    value.contains(':') || value.contains('T')
}

/// Check if a column name suggests date content.
pub fn name_suggests_date(name: &str) -> bool {
    let lower = name.to_lowercase();
    DATE_NAME_HINTS.iter().any(|hint| lower.contains(hint))
}

/// Parse a value into a timestamp. Dates without a time are taken at midnight;
/// offsets are dropped after conversion to UTC.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_iso_date() {
        let dt = parse_datetime("2024-03-05").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 5));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_datetime_variants() {
        assert!(parse_datetime("2024-03-05 14:30:00").is_some());
        assert!(parse_datetime("2024-03-05T14:30:00Z").is_some());
        assert!(parse_datetime("03/05/2024").is_some());
        assert!(parse_datetime("Mar 5, 2024").is_some());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_datetime("").is_none());
        assert!(parse_datetime("yesterday").is_none());
        assert!(parse_datetime("2024-13-45").is_none());
    }

    #[test]
    fn test_name_hints() {
        assert!(name_suggests_date("Created_At"));
        assert!(name_suggests_date("incident_date"));
        assert!(!name_suggests_date("severity"));
    }

    #[test]
    fn test_looks_like_date() {
        assert!(looks_like_date("2024-01-15"));
        assert!(looks_like_date("01/15/2024"));
        assert!(!looks_like_date("High"));
    }
}
