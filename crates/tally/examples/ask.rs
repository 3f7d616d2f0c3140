//! Example: Ask a few questions about a data file with Tally.
//!
//! Usage:
//!   cargo run --example ask -- <file_path> [question...]
//!
//! Example:
//!   cargo run --example ask -- incidents.csv how many severity high

use std::env;
use std::path::Path;

use tally::Tally;

const DEFAULT_QUESTIONS: &[&str] = &[
    "give me an overview",
    "how many records are there",
    "show statistics",
    "trend over time",
];

fn main() -> tally::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example ask -- <file_path> [question...]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example ask -- incidents.csv how many severity high");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let tally = Tally::new();
    let (table, source) = tally.load_table(path)?;

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Tally: {} ({} rows, {} columns)", source.file, source.row_count, source.column_count);
    println!("{}", separator);

    let questions: Vec<String> = if args.len() > 2 {
        vec![args[2..].join(" ")]
    } else {
        DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect()
    };

    for question in &questions {
        let answer = tally.respond(Some(&table), None, question, None);
        let intent = answer.intent.map(|i| i.label()).unwrap_or("none");
        println!();
        println!("## {} [{}]", question, intent);
        println!();
        println!("{}", answer.text);
    }

    Ok(())
}
