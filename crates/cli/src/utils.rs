use anyhow::{Context, Result};
use codonseq_fasta::{write_records, Record, WriterOptions};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write `records` to `output`, or to stdout when no path is given.
pub fn emit_records(records: &[Record], output: Option<&Path>, line_width: usize) -> Result<()> {
    let options = WriterOptions { line_width };
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    write_records(writer, records, &options).context("Failed to write FASTA output")
}

/// Find a record by exact name.
pub fn find_record<'a>(records: &'a [Record], name: &str) -> Result<&'a Record> {
    records
        .iter()
        .find(|r| r.name == name)
        .with_context(|| format!("No record named '{name}'"))
}
