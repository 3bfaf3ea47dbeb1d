//! envdiff CLI
//!
//! Command-line interface for comparing environment dumps

use clap::{Parser, Subcommand};
use envdiff_core::logging_facility::{self, Profile};

mod commands;
mod render;

#[derive(Debug, Parser)]
#[command(name = "envdiff")]
#[command(about = "envdiff - Compare two environment variable dumps", long_about = None)]
struct Cli {
    /// Log human-readable diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log JSON diagnostics to stderr
    #[arg(long, global = true, conflicts_with = "verbose")]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the edits that turn OLD into NEW
    Diff(commands::diff::DiffArgs),
    /// Print a single dump as parsed
    Parse(commands::parse::ParseArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        logging_facility::init(Profile::Development);
    } else if cli.log_json {
        logging_facility::init(Profile::Production);
    }

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Parse(args) => commands::parse::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
