//! # vesreg CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vesreg_cli::check::{run_check, CheckArgs};
use vesreg_cli::import::{run_import, ImportArgs};
use vesreg_cli::list::{run_list, ListArgs};

/// VESREG — vessel registry and navigation-license tooling.
#[derive(Parser, Debug)]
#[command(name = "vesreg", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Bulk-import a CSV ledger export into the registry database.
    Import(ImportArgs),

    /// Evaluate a navigation license by code or from explicit dates.
    Check(CheckArgs),

    /// List registered vessels with optional search and category filter.
    List(ListArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Import(args) => run_import(&args).await,
        Commands::Check(args) => run_check(&args).await,
        Commands::List(args) => run_list(&args).await,
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
