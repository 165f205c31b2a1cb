use codonseq_core::SeqError;
use thiserror::Error;

/// Error type for FASTA input and output.
#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("record '{name}', line {line}: {source}")]
    Sequence {
        name: String,
        line: usize,
        #[source]
        source: SeqError,
    },
}

pub type Result<T> = std::result::Result<T, FastaError>;
