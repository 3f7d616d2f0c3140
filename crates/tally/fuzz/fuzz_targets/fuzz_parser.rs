//! Fuzz target for the data parser and column typing.
//!
//! This fuzzer tests that loading:
//! 1. Never panics on malformed input
//! 2. Handles all delimiter combinations
//! 3. Always yields columns of equal length

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;
use tally::{Parser, Table};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            let parser = Parser::new();
            if let Ok((raw, _)) = parser.parse_file(temp_file.path()) {
                let table = Table::from_data_table(&raw);
                assert!(table.columns().all(|c| c.len() == table.row_count()));
            }
        }
    }
});
