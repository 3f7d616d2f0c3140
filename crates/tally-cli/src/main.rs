//! Tally CLI - question answering over CSV/TSV files.

mod cli;
mod commands;
mod session;

use clap::Parser;
use cli::{Cli, Commands};
use tally::{Tally, TallyConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = build_engine(&cli).and_then(|tally| match cli.command {
        Commands::Ask {
            sources,
            role,
            json,
            question,
        } => commands::ask::run(&tally, sources, role, json, question.join(" ")),

        Commands::Chat { sources, role } => commands::chat::run(&tally, sources, role),

        Commands::Describe { sources, json } => commands::describe::run(&tally, sources, json),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_engine(cli: &Cli) -> Result<Tally, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => TallyConfig::from_json_file(path)?,
        None => TallyConfig::default(),
    };
    Ok(Tally::with_config(config))
}
