//! shtml CLI - server-side include expansion.
//!
//! Provides commands for:
//! - `expand`: expand a document's directives against a set of request
//!   variables

mod error;
mod expand;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expand::ExpandArgs;
use output::Output;

/// shtml - expand server-side include directives.
#[derive(Parser)]
#[command(name = "shtml", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a document's directives.
    Expand(ExpandArgs),
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let output = Output::new();

    let result = match cli.command {
        Commands::Expand(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
