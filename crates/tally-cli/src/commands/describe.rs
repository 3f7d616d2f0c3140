//! Describe command - show the typed, combined table.

use colored::Colorize;
use tally::{Provenance, Tally};

use super::load;
use crate::cli::Sources;

pub fn run(tally: &Tally, sources: Sources, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tables = load(tally, &sources)?;
    let profile = tally
        .describe(Some(&tables.primary), tables.secondary.as_ref())
        .map_err(|e| format!("{}: every input table is empty", e))?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&profile)?);
        return Ok(());
    }

    println!(
        "{} {} rows, {} columns",
        "Table:".yellow().bold(),
        profile.row_count.to_string().white().bold(),
        profile.column_count().to_string().white().bold()
    );
    if !profile.sources.is_empty() {
        println!("{} {}", "Sources:".yellow().bold(), profile.sources.join(", "));
    }
    println!();

    let config = tally.config();
    for col in &profile.columns {
        let origin = match col.provenance {
            Some(Provenance::Primary) => config.primary_label.as_str(),
            Some(Provenance::Secondary) => config.secondary_label.as_str(),
            Some(Provenance::Both) => "both",
            None => "",
        };
        let temporal = if col.temporal { "date-like" } else { "" };
        println!(
            "  {:24} {:10} {:>8} null {:>8} unique  {} {}",
            col.name,
            col.column_type.to_string(),
            col.null_count,
            col.unique_count,
            origin.dimmed(),
            temporal.cyan()
        );
    }

    Ok(())
}
