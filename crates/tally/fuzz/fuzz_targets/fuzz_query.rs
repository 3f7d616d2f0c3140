//! Fuzz target for question answering.
//!
//! Arbitrary questions against a fixed table must always produce text.

#![no_main]

use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;
use tally::{Column, Table, Tally};

static TABLE: Lazy<Table> = Lazy::new(|| {
    Table::new(vec![
        Column::from_raw("id", &["1", "2", "3"]),
        Column::from_raw("status", &["open", "closed", ""]),
        Column::from_raw("cost", &["10.5", "", "3"]),
        Column::from_raw("created", &["2024-01-01", "2024-02-10", "soon"]),
    ])
    .unwrap()
});

fuzz_target!(|query: &str| {
    if query.len() > 4_096 {
        return;
    }

    let answer = Tally::new().respond(Some(&*TABLE), None, query, None);
    assert!(!answer.text.is_empty());
});
