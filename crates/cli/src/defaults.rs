//! Shared default values for the command-line surface.

use codonseq_fasta::DEFAULT_LINE_WIDTH;

/// Bases per line when writing FASTA.
pub const LINE_WIDTH: usize = DEFAULT_LINE_WIDTH;

/// Log target prefix shared by every crate in the workspace.
pub const LOG_TARGET: &str = "codonseq";

/// Level used when no `-v` flag is given.
pub const LOG_LEVEL: &str = "warn";

/// Log level for a given number of `-v` flags.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => LOG_LEVEL,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
