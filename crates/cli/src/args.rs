use clap::Args;
use codonseq_core::Locator;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Input FASTA file
    pub input: PathBuf,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Input FASTA file
    pub input: PathBuf,

    /// JSON edit script
    ///
    /// A list of edits applied in order, e.g.
    /// {"edits": [{"op": "insert_seq", "at": "3:2", "seq": "ACG"}]}
    #[arg(short, long)]
    pub script: PathBuf,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Bases per output line (0 = no wrapping)
    #[arg(long, default_value_t = defaults::LINE_WIDTH)]
    pub line_width: usize,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Input FASTA file
    pub input: PathBuf,

    /// Name of the record to extract from
    #[arg(short, long)]
    pub record: String,

    /// First base to extract, as index:shift
    #[arg(long)]
    pub start: Locator,

    /// Last base to extract (inclusive), as index:shift
    #[arg(long)]
    pub end: Locator,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Bases per output line (0 = no wrapping)
    #[arg(long, default_value_t = defaults::LINE_WIDTH)]
    pub line_width: usize,
}
