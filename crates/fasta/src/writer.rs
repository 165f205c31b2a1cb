use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::record::Record;

/// Default number of bases per sequence line.
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Output formatting for [`write_records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Bases per sequence line; 0 writes each sequence on one line.
    pub line_width: usize,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// Write `records` to `writer` as FASTA.
pub fn write_records<W: Write>(
    mut writer: W,
    records: &[Record],
    options: &WriterOptions,
) -> Result<()> {
    for record in records {
        writeln!(writer, ">{}", record.name)?;
        for comment in &record.comments {
            writeln!(writer, ";{comment}")?;
        }

        let text = record.seq.to_string();
        if options.line_width == 0 {
            if !text.is_empty() {
                writeln!(writer, "{text}")?;
            }
        } else {
            for line in text.as_bytes().chunks(options.line_width) {
                writer.write_all(line)?;
                writer.write_all(b"\n")?;
            }
        }
        debug!(name = %record.name, bp = text.len(), "wrote record");
    }
    writer.flush()?;
    Ok(())
}

/// Write `records` to a new file at `path`, replacing any existing file.
pub fn write_path(
    path: impl AsRef<Path>,
    records: &[Record],
    options: &WriterOptions,
) -> Result<()> {
    let file = File::create(path)?;
    write_records(BufWriter::new(file), records, options)
}
