//! Ask command - answer one question.

use colored::Colorize;
use tally::{RoleHint, Tally};

use super::load;
use crate::cli::Sources;

pub fn run(
    tally: &Tally,
    sources: Sources,
    role: Option<RoleHint>,
    json_output: bool,
    question: String,
) -> Result<(), Box<dyn std::error::Error>> {
    let tables = load(tally, &sources)?;
    let answer = tally.respond(
        Some(&tables.primary),
        tables.secondary.as_ref(),
        &question,
        role,
    );

    if json_output {
        println!("{}", serde_json::to_string_pretty(&answer)?);
        return Ok(());
    }

    if let Some(intent) = answer.intent {
        eprintln!("{} {}", "Intent:".dimmed(), intent.label().yellow());
    }
    println!("{}", answer.text);
    Ok(())
}
