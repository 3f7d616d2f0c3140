//! CLI command implementations.

pub mod ask;
pub mod chat;
pub mod describe;

use colored::Colorize;
use tally::{SourceMetadata, Table, Tally};

use crate::cli::Sources;

/// Tables loaded for a command.
pub struct LoadedTables {
    pub primary: Table,
    pub secondary: Option<Table>,
}

/// Load the primary and optional secondary file.
pub fn load(tally: &Tally, sources: &Sources) -> Result<LoadedTables, Box<dyn std::error::Error>> {
    if !sources.file.exists() {
        return Err(format!("File not found: {}", sources.file.display()).into());
    }

    let (primary, meta) = tally.load_table(&sources.file)?;
    report(&meta);

    let secondary = match &sources.secondary {
        Some(path) => {
            if !path.exists() {
                return Err(format!("File not found: {}", path.display()).into());
            }
            let (table, meta) = tally.load_table(path)?;
            report(&meta);
            Some(table)
        }
        None => None,
    };

    Ok(LoadedTables { primary, secondary })
}

fn report(meta: &SourceMetadata) {
    eprintln!(
        "{} {} ({} rows, {} columns, {})",
        "Loaded".cyan().bold(),
        meta.file.white(),
        meta.row_count,
        meta.column_count,
        meta.format
    );
}
