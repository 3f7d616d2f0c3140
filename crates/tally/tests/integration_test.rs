//! Integration tests for Tally.

use std::io::Write;
use tempfile::NamedTempFile;

use tally::{
    ColumnType, Column, Intent, NO_DATA_MESSAGE, Provenance, RoleHint, Table, Tally, TallyConfig,
};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

const INCIDENTS: &str = "id,Severity,status,vector,cost,created_date\n\
                         1,High,open,phishing email,1200,2024-01-15\n\
                         2,High,closed,malware,800,2024-02-03\n\
                         3,Low,open,phishing site,,2024-02-20\n\
                         4,Critical,resolved,ddos,5000,2024-03-11\n\
                         5,Medium,open,malware,300,2024-03-29\n";

fn load(content: &str) -> Table {
    let file = create_test_file(content);
    let (table, _) = Tally::new().load_table(file.path()).expect("Load failed");
    table
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_csv_types_columns_once() {
    let file = create_test_file(INCIDENTS);
    let (table, source) = Tally::new().load_table(file.path()).unwrap();

    assert_eq!(source.format, "csv");
    assert_eq!(source.row_count, 5);
    assert_eq!(table.column("id").unwrap().column_type(), ColumnType::Integer);
    assert_eq!(table.column("cost").unwrap().column_type(), ColumnType::Integer);
    assert_eq!(table.column("Severity").unwrap().column_type(), ColumnType::Text);
    assert_eq!(table.column("created_date").unwrap().column_type(), ColumnType::Date);
    assert_eq!(table.column("cost").unwrap().null_count(), 1);
}

#[test]
fn test_load_tsv() {
    let table = load("ticket\tpriority\nT1\thigh\nT2\tlow\n");
    assert_eq!(table.column_names(), vec!["ticket", "priority"]);
}

#[test]
fn test_blank_header_is_not_referenced() {
    let table = load("id,,status\n1,x,open\n2,y,closed\n");
    assert_eq!(table.column_names(), vec!["id", "column_2", "status"]);

    let answer = Tally::new().respond(Some(&table), None, "count by status", None);
    assert_eq!(answer.columns, vec!["status"]);
    assert!(answer.text.starts_with("📊 **Count by status:**\n\n"));
    assert!(!answer.text.contains("column_2"));
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_column_value_count() {
    let table = load("Severity\nHigh\nHigh\nLow\n");
    let answer = Tally::new().respond(Some(&table), None, "how many Severity high", None);

    assert_eq!(answer.intent, Some(Intent::Count));
    assert!(answer.text.contains("📊 **Severity = 'High':** 2"));
}

#[test]
fn test_average_ignores_null() {
    let table = load("id,amount\n1,10\n2,20\n3,\n");
    let answer = Tally::new().respond(Some(&table), None, "average amount", None);

    assert_eq!(answer.intent, Some(Intent::Statistics));
    assert!(answer.text.contains("- Count: 2\n- Mean: 15.00\n"));
}

#[test]
fn test_empty_primary_no_secondary() {
    let tally = Tally::new();
    let empty = load("id,amount\n");

    for query in ["how many", "average amount", "hello"] {
        let answer = tally.respond(Some(&empty), None, query, None);
        assert_eq!(answer.text, NO_DATA_MESSAGE);
        assert_eq!(answer.intent, None);
    }
}

#[test]
fn test_whole_word_boundary() {
    let table = load("status,cost\nopen,1\nclosed,2\n");
    let tally = Tally::new();

    let interpretation = tally.interpret(&table, "statuss");
    assert!(interpretation.columns.is_empty());

    // the general fallback is allowed the looser match
    let answer = tally.respond(Some(&table), None, "statuss", None);
    assert_eq!(answer.intent, Some(Intent::General));
    assert!(answer.text.contains("**status:**"));
}

#[test]
fn test_count_keyword_wins() {
    let table = load(INCIDENTS);
    let tally = Tally::new();

    for query in [
        "show the total average cost",
        "count records where status is open",
        "find the number of phishing incidents",
        "list how many each severity",
    ] {
        let answer = tally.respond(Some(&table), None, query, None);
        assert_eq!(answer.intent, Some(Intent::Count), "query: {}", query);
    }
}

// =============================================================================
// Per-intent behaviour
// =============================================================================

#[test]
fn test_search_over_text_columns() {
    let table = load(INCIDENTS);
    let answer = Tally::new().respond(Some(&table), None, "find phishing", None);

    assert_eq!(answer.intent, Some(Intent::Search));
    assert!(answer.text.starts_with("🔍 **Found 2 matching records:**"));
}

#[test]
fn test_yes_no_column_is_categorical_and_searchable() {
    let table = load("ticket,approved\nT1,yes\nT2,no\nT3,yes\n");
    let tally = Tally::new();

    let compared = tally.respond(Some(&table), None, "compare approved", None);
    assert_eq!(compared.intent, Some(Intent::Comparison));
    assert!(compared
        .text
        .contains("**approved Comparison:**\n- **yes:** 2 (66.7%)\n- **no:** 1 (33.3%)\n"));

    let counted = tally.respond(Some(&table), None, "how many records", None);
    assert!(counted.text.contains("**approved Distribution:**\n- yes: 2 (66.7%)\n"));

    let found = tally.respond(Some(&table), None, "find yes", None);
    assert_eq!(found.intent, Some(Intent::Search));
    assert!(found.text.starts_with("🔍 **Found 2 matching records:**"));
}

#[test]
fn test_filter_by_status_and_threshold() {
    let table = load(INCIDENTS);
    let answer = Tally::new().respond(
        Some(&table),
        None,
        "which status open having cost greater than 500",
        None,
    );

    assert_eq!(answer.intent, Some(Intent::Filter));
    assert!(answer.text.contains("Filtered Results (1 records)"));
    assert!(answer.text.contains("Filters applied: status = open, cost > 500"));
}

#[test]
fn test_trend_uses_date_column() {
    let table = load(INCIDENTS);
    let answer = Tally::new().respond(Some(&table), None, "trend over time", None);

    assert_eq!(answer.intent, Some(Intent::Trend));
    assert!(answer.text.contains("**Date Range:** 2024-01-15 00:00:00 to 2024-03-29 00:00:00"));
    assert!(answer.text.contains("- 2024-02: 2 records\n- 2024-03: 2 records\n"));
}

#[test]
fn test_summary_overview() {
    let table = load(INCIDENTS);
    let answer = Tally::new().respond(Some(&table), None, "overview please", None);

    assert_eq!(answer.intent, Some(Intent::Summary));
    assert!(answer.text.contains("- **Total Columns:** 6\n"));
}

#[test]
fn test_role_hint_only_changes_wording() {
    let table = load(INCIDENTS);
    let tally = Tally::new();

    let plain = tally.respond(Some(&table), None, "hello", None);
    let cyber = tally.respond(Some(&table), None, "hello", Some(RoleHint::CyberIncident));

    assert!(cyber.text.contains("'How many incidents are there?'"));
    assert_eq!(plain.intent, cyber.intent);
    assert!(plain.text.ends_with("**Total records:** 5"));
    assert!(cyber.text.ends_with("**Total records:** 5"));
}

// =============================================================================
// Combining sources
// =============================================================================

#[test]
fn test_combined_sources() {
    let primary = load(INCIDENTS);
    let secondary = load("id,owner,cost\n6,dana,75.5\n7,lee,\n");
    let tally = Tally::new();

    let answer = tally.respond(Some(&primary), Some(&secondary), "how many records", None);
    assert!(answer.text.starts_with("📊 **Total Records:** 7\n\n"));
    assert_eq!(answer.sources, vec!["primary source", "secondary source"]);

    let stats = tally.respond(Some(&primary), Some(&secondary), "mean cost", None);
    assert!(stats.text.contains("**cost Statistics:**\n- Count: 5\n"));

    let profile = tally.describe(Some(&primary), Some(&secondary)).unwrap();
    assert_eq!(profile.get_column("owner").unwrap().provenance, Some(Provenance::Secondary));
    assert_eq!(profile.get_column("cost").unwrap().provenance, Some(Provenance::Both));
    assert_eq!(profile.get_column("cost").unwrap().column_type, ColumnType::Float);
}

#[test]
fn test_empty_secondary_is_identity() {
    let primary = load(INCIDENTS);
    let empty = load("id,owner\n");
    let tally = Tally::new();

    for query in ["how many records", "find malware", "overview", "hello"] {
        assert_eq!(
            tally.respond(Some(&primary), Some(&empty), query, None),
            tally.respond(Some(&primary), None, query, None)
        );
    }
}

#[test]
fn test_only_secondary_has_rows() {
    let empty = Table::default();
    let secondary = Table::new(vec![Column::from_raw("team", &["red", "blue"])]).unwrap();
    let answer = Tally::new().respond(Some(&empty), Some(&secondary), "list all", None);

    assert_eq!(answer.sources, vec!["secondary source"]);
    assert!(answer.text.starts_with("📋 **All Records (2 total):**"));
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_config_file_extends_vocabulary() {
    let config_file = create_test_file(r#"{"status_values": ["blocked", "open"]}"#);
    let config = TallyConfig::from_json_file(config_file.path()).unwrap();
    let table = load("state\nblocked\nopen\nblocked\n");

    let answer = Tally::with_config(config).respond(Some(&table), None, "how many state blocked", None);
    assert!(answer.text.contains("📊 **state = 'Blocked':** 2"));
}

#[test]
fn test_answer_serializes() {
    let table = load(INCIDENTS);
    let answer = Tally::new().respond(Some(&table), None, "count by severity", None);
    let json = serde_json::to_value(&answer).unwrap();

    assert_eq!(json["intent"], "count");
    assert_eq!(json["columns"][0], "Severity");
}
