mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use args::{EditArgs, ExtractArgs, InspectArgs};
use commands::{edit, extract, inspect};

/// codonseq: edit nucleotide sequences stored three bases to a byte.
///
/// Reads FASTA records into codon-packed sequences, applies base-level
/// edits and writes the result back out.
#[derive(Parser, Debug)]
#[command(name = "codonseq")]
#[command(author, version, about = "Inspect, edit and extract FASTA records", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the length and codon layout of every record.
    Inspect(InspectArgs),

    /// Apply a JSON edit script and write the edited records.
    Edit(EditArgs),

    /// Write the bases between two locators as a new record.
    Extract(ExtractArgs),
}

fn init_logging(verbose: u8) -> Result<()> {
    let directive = format!("{}={}", defaults::LOG_TARGET, defaults::log_level(verbose));
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Inspect(args) => {
            inspect::show_records(&args.input, args.json)?;
        }
        Commands::Edit(args) => {
            edit::edit_records(&args)?;
        }
        Commands::Extract(args) => {
            extract::extract_span(&args)?;
        }
    }

    Ok(())
}
