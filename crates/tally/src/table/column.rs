//! Typed columns with a storage tag decided once at construction.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use once_cell::sync::OnceCell;

use super::temporal;
use super::value::Value;
use crate::input::DataTable;
use crate::schema::{ColumnType, NumericSummary};

/// Number of leading values probed when sniffing date content.
const DATE_SNIFF_ROWS: usize = 10;

/// A named column of typed values.
#[derive(Debug, Clone)]
pub struct Column {
    name: String,
    column_type: ColumnType,
    values: Vec<Value>,
    name_suggests_date: bool,
    content_parses_as_date: bool,
    /// Parsed timestamps, filled on first use and reused afterwards.
    dates: OnceCell<Vec<Option<NaiveDateTime>>>,
}

impl Column {
    /// Build a column from raw cell text, inferring its storage type.
    ///
    /// A column is numeric only if every non-null cell is a finite number,
    /// boolean only if every non-null cell is `true` or `false`, and temporal only
    /// if every non-null cell looks like a date. Anything else is text.
    pub fn from_raw<S: AsRef<str>>(name: impl Into<String>, raw: &[S]) -> Self {
        let cells: Vec<Option<&str>> = raw
            .iter()
            .map(|s| {
                let s = s.as_ref();
                if DataTable::is_null_value(s) { None } else { Some(s) }
            })
            .collect();

        let column_type = infer_type(cells.iter().flatten().copied());

        let values = cells
            .into_iter()
            .map(|cell| match cell {
                None => Value::Null,
                Some(s) => match column_type {
                    ColumnType::Integer | ColumnType::Float => s
                        .trim()
                        .parse::<f64>()
                        .map(Value::Number)
                        .unwrap_or(Value::Null),
                    ColumnType::Boolean => parse_bool(s).map(Value::Bool).unwrap_or(Value::Null),
                    _ => Value::Text(s.to_string()),
                },
            })
            .collect();

        Self::with_type(name, column_type, values)
    }

    /// Build a column from typed values, inferring the tag from their variants.
    pub fn from_values(name: impl Into<String>, values: Vec<Value>) -> Self {
        let mut numbers = 0;
        let mut integral = true;
        let mut bools = 0;
        let mut texts = 0;

        for value in &values {
            match value {
                Value::Null => {}
                Value::Number(n) => {
                    numbers += 1;
                    integral &= n.fract() == 0.0;
                }
                Value::Bool(_) => bools += 1,
                Value::Text(_) => texts += 1,
            }
        }

        let present = numbers + bools + texts;
        let column_type = if present == 0 {
            ColumnType::Unknown
        } else if numbers == present {
            if integral { ColumnType::Integer } else { ColumnType::Float }
        } else if bools == present {
            ColumnType::Boolean
        } else if texts == present {
            infer_text_type(values.iter().filter_map(Value::as_text))
        } else {
            ColumnType::Text
        };

        let values = if column_type.is_textual() {
            values.into_iter().map(Value::into_text).collect()
        } else {
            values
        };

        Self::with_type(name, column_type, values)
    }

    /// Numeric column; `None` entries are missing.
    pub fn numeric(name: impl Into<String>, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self::from_values(name, values.into_iter().map(Value::from).collect())
    }

    /// Text column; `None` entries are missing.
    pub fn text<S: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<S>>,
    ) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.map(|s| Value::Text(s.into())).unwrap_or(Value::Null))
            .collect();
        Self::with_type(name, ColumnType::Text, values)
    }

    /// Assemble a column with a known storage type and compute its hints.
    pub(crate) fn with_type(
        name: impl Into<String>,
        column_type: ColumnType,
        values: Vec<Value>,
    ) -> Self {
        let name = name.into();
        let name_suggests_date = temporal::name_suggests_date(&name);
        let content_parses_as_date = column_type.is_textual() && sniff_dates(&values);

        Self {
            name,
            column_type,
            values,
            name_suggests_date,
            content_parses_as_date,
            dates: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at a row.
    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    pub fn is_numeric(&self) -> bool {
        self.column_type.is_numeric()
    }

    pub fn is_textual(&self) -> bool {
        self.column_type.is_textual()
    }

    /// Textual column with at most `threshold` distinct values.
    pub fn is_categorical(&self, threshold: usize) -> bool {
        self.is_textual() && self.unique_count() <= threshold
    }

    /// Whether the column name marks it as temporal.
    pub fn name_suggests_date(&self) -> bool {
        self.name_suggests_date
    }

    /// Whether the leading values of a textual column all parse as dates.
    pub fn content_parses_as_date(&self) -> bool {
        self.content_parses_as_date
    }

    /// Number of non-null values.
    pub fn non_null_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_null()).count()
    }

    /// Number of null values.
    pub fn null_count(&self) -> usize {
        self.values.len() - self.non_null_count()
    }

    /// Distinct non-null values in order of first appearance.
    pub fn unique_values(&self) -> Vec<&Value> {
        let mut seen = std::collections::HashSet::new();
        self.values
            .iter()
            .filter(|v| !v.is_null())
            .filter(|v| seen.insert(v.to_string()))
            .collect()
    }

    /// Number of distinct non-null values.
    pub fn unique_count(&self) -> usize {
        self.value_counts().len()
    }

    /// Frequency of each non-null value, most frequent first.
    /// Ties keep the order in which values first appear.
    pub fn value_counts(&self) -> IndexMap<String, usize> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for value in self.values.iter().filter(|v| !v.is_null()) {
            *counts.entry(value.to_string()).or_insert(0) += 1;
        }
        // IndexMap's sort is stable
        counts.sort_by(|_, a, _, b| b.cmp(a));
        counts
    }

    /// Non-null numeric values.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.values.iter().filter_map(Value::as_f64).collect()
    }

    /// Describe-style summary of the numeric values, if any.
    pub fn numeric_summary(&self) -> Option<NumericSummary> {
        if !self.is_numeric() {
            return None;
        }
        NumericSummary::from_values(&self.numeric_values())
    }

    /// Rows whose normalized value equals `needle` (already lower-cased).
    pub fn rows_equal_to(&self, needle: &str) -> Vec<usize> {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.normalized().as_deref() == Some(needle))
            .map(|(row, _)| row)
            .collect()
    }

    /// Parsed timestamps, one per row. Unparseable cells are `None`.
    pub fn dates(&self) -> &[Option<NaiveDateTime>] {
        self.dates.get_or_init(|| {
            self.values
                .iter()
                .map(|v| v.as_text().and_then(temporal::parse_datetime))
                .collect()
        })
    }
}

/// Infer the storage type from non-null raw cells.
fn infer_type<'a>(cells: impl Iterator<Item = &'a str> + Clone) -> ColumnType {
    let mut type_counts: HashMap<ColumnType, usize> = HashMap::new();
    let mut total = 0;

    for cell in cells.clone() {
        total += 1;
        *type_counts.entry(detect_value_type(cell)).or_insert(0) += 1;
    }

    if total == 0 {
        return ColumnType::Unknown;
    }

    let count = |t: ColumnType| type_counts.get(&t).copied().unwrap_or(0);

    if count(ColumnType::Integer) == total {
        ColumnType::Integer
    } else if count(ColumnType::Integer) + count(ColumnType::Float) == total {
        ColumnType::Float
    } else if count(ColumnType::Boolean) == total {
        ColumnType::Boolean
    } else {
        infer_text_type(cells)
    }
}

/// Decide between Date, DateTime and Text for text cells.
fn infer_text_type<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnType {
    let mut any = false;
    let mut with_time = false;

    for cell in cells {
        if cell.trim().is_empty() {
            continue;
        }
        if !temporal::looks_like_date(cell) {
            return ColumnType::Text;
        }
        any = true;
        with_time |= temporal::has_time_component(cell);
    }

    match (any, with_time) {
        (false, _) => ColumnType::Text,
        (true, true) => ColumnType::DateTime,
        (true, false) => ColumnType::Date,
    }
}

/// Detect the type of a single value.
fn detect_value_type(value: &str) -> ColumnType {
    let trimmed = value.trim();

    if parse_bool(trimmed).is_some() {
        return ColumnType::Boolean;
    }

    if trimmed.parse::<i64>().is_ok() {
        return ColumnType::Integer;
    }

    if trimmed.parse::<f64>().map(f64::is_finite).unwrap_or(false) {
        return ColumnType::Float;
    }

    ColumnType::Text
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Check whether the first rows of a column all parse as dates.
fn sniff_dates(values: &[Value]) -> bool {
    let mut parsed_any = false;
    for value in values.iter().take(DATE_SNIFF_ROWS) {
        if value.is_blank() {
            continue;
        }
        match value.as_text().and_then(temporal::parse_datetime) {
            Some(_) => parsed_any = true,
            None => return false,
        }
    }
    parsed_any
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_integer_type() {
        let col = Column::from_raw("count", &["1", "2", "3", "100"]);
        assert_eq!(col.column_type(), ColumnType::Integer);
    }

    #[test]
    fn test_infer_float_type() {
        let col = Column::from_raw("value", &["1.5", "2", "NA", "0.5"]);
        assert_eq!(col.column_type(), ColumnType::Float);
        assert_eq!(col.null_count(), 1);
    }

    #[test]
    fn test_mixed_values_are_text() {
        let col = Column::from_raw("code", &["1", "A2", "3"]);
        assert_eq!(col.column_type(), ColumnType::Text);
        assert_eq!(col.get(0), Some(&Value::from("1")));
    }

    #[test]
    fn test_infer_boolean_type() {
        let col = Column::from_raw("active", &["true", "FALSE", "True"]);
        assert_eq!(col.column_type(), ColumnType::Boolean);
    }

    #[test]
    fn test_yes_no_stays_text() {
        let col = Column::from_raw("approved", &["yes", "no", "yes"]);
        assert_eq!(col.column_type(), ColumnType::Text);
        assert!(col.is_categorical(20));
        assert_eq!(col.get(1), Some(&Value::from("no")));
    }

    #[test]
    fn test_infer_date_type() {
        let col = Column::from_raw("when", &["2024-01-15", "2024-02-20"]);
        assert_eq!(col.column_type(), ColumnType::Date);
        assert!(col.content_parses_as_date());
        assert!(!col.name_suggests_date());
    }

    #[test]
    fn test_all_null_is_unknown() {
        let col = Column::from_raw("empty", &["", "NA"]);
        assert_eq!(col.column_type(), ColumnType::Unknown);
    }

    #[test]
    fn test_value_counts_order() {
        let col = Column::from_raw("sev", &["Low", "High", "High", "Medium", "Low", "High"]);
        let counts: Vec<(String, usize)> = col.value_counts().into_iter().collect();
        assert_eq!(
            counts,
            vec![
                ("High".to_string(), 3),
                ("Low".to_string(), 2),
                ("Medium".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_value_counts_tie_keeps_first_appearance() {
        let col = Column::from_raw("x", &["b", "a", "a", "b"]);
        let keys: Vec<String> = col.value_counts().into_keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_unique_values_skip_nulls() {
        let col = Column::from_raw("x", &["a", "", "b", "a"]);
        assert_eq!(col.unique_values().len(), 2);
        assert_eq!(col.unique_count(), 2);
    }

    #[test]
    fn test_rows_equal_to_normalizes() {
        let col = Column::from_raw("Severity", &["High", " high ", "Low", ""]);
        assert_eq!(col.rows_equal_to("high"), vec![0, 1]);
    }

    #[test]
    fn test_dates_are_cached() {
        let col = Column::from_raw("created", &["2024-01-01", "bad", "2024-03-01"]);
        let first = col.dates().as_ptr();
        assert!(col.dates()[1].is_none());
        assert_eq!(first, col.dates().as_ptr());
    }

    #[test]
    fn test_from_values_integer() {
        let col = Column::numeric("amount", [Some(10.0), Some(20.0), None]);
        assert_eq!(col.column_type(), ColumnType::Integer);
        assert_eq!(col.numeric_values(), vec![10.0, 20.0]);
    }
}
