//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use tally::RoleHint;

/// Tally: ask questions about tabular data
#[derive(Parser)]
#[command(name = "tally")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON configuration file (status vocabulary, labels, thresholds)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Tables a command works on.
#[derive(Args, Clone, Debug)]
pub struct Sources {
    /// Path to the primary data file (CSV/TSV)
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Optional secondary data file merged with the primary one
    #[arg(short, long, value_name = "FILE")]
    pub secondary: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a single question
    Ask {
        #[command(flatten)]
        sources: Sources,

        /// Kind of data (cyber-incident, it-ticket, dataset); changes wording only
        #[arg(short, long)]
        role: Option<RoleHint>,

        /// Output the answer as JSON
        #[arg(long)]
        json: bool,

        /// The question to ask
        #[arg(required = true, trailing_var_arg = true)]
        question: Vec<String>,
    },

    /// Ask questions interactively
    Chat {
        #[command(flatten)]
        sources: Sources,

        /// Kind of data (cyber-incident, it-ticket, dataset); changes wording only
        #[arg(short, long)]
        role: Option<RoleHint>,
    },

    /// Show column types, null counts and provenance
    Describe {
        #[command(flatten)]
        sources: Sources,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
