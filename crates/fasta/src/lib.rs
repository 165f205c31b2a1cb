//! FASTA reading and writing on top of [`codonseq_core::Seq`].
//!
//! Records are `>` headers followed by sequence lines, with optional `;`
//! comment lines. Sequence text is validated by the core parser, so any
//! symbol outside A, C, G, T is reported with the record and line it came
//! from.

mod error;
mod reader;
mod record;
mod writer;

pub use error::{FastaError, Result};
pub use reader::{read_path, read_records};
pub use record::Record;
pub use writer::{write_path, write_records, WriterOptions, DEFAULT_LINE_WIDTH};
