use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use codonseq_core::Seq;
use tracing::debug;

use crate::error::{FastaError, Result};
use crate::record::Record;

/// Read every record from `reader`.
///
/// ```text
/// >chr1 assembled
/// ;first pass
/// ATGGTATACA
/// CATA
/// ```
///
/// Blank lines are skipped. Sequence lines are appended to the current
/// record in order; sequence data before the first header is an error.
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records: Vec<Record> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let line_no = idx + 1;

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(done) = records.last() {
                debug!(name = %done.name, bp = done.len(), "read record");
            }
            records.push(Record::new(header.trim(), Seq::new()));
            continue;
        }

        let Some(current) = records.last_mut() else {
            return Err(FastaError::Parse {
                line: line_no,
                message: "sequence data before the first '>' header".to_string(),
            });
        };

        if let Some(comment) = line.strip_prefix(';') {
            current.comments.push(comment.to_string());
            continue;
        }

        let chunk: Seq = line.parse().map_err(|source| FastaError::Sequence {
            name: current.name.clone(),
            line: line_no,
            source,
        })?;
        current.seq.push_back_seq(chunk);
    }

    if let Some(done) = records.last() {
        debug!(name = %done.name, bp = done.len(), "read record");
    }
    Ok(records)
}

/// Read every record from the file at `path`.
pub fn read_path(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let file = File::open(path)?;
    read_records(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_simple() {
        let input = ">seq1\nACGTACGT\n>seq2 second record\nTGCATGCA\n";
        let records = read_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "seq1");
        assert_eq!(records[0].seq.to_string(), "ACGTACGT");
        assert_eq!(records[1].name, "seq2 second record");
        assert_eq!(records[1].seq.to_string(), "TGCATGCA");
    }

    #[test]
    fn test_read_multiline_keeps_layout_settled() {
        let input = ">chr1\nATGGTATACA\nCATA\nG\n\nGATTACA\n";
        let records = read_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        let seq = &records[0].seq;
        assert_eq!(seq.to_string(), "ATGGTATACACATAGGATTACA");
        assert!(seq.is_settled());
        assert_eq!(records[0].len(), 22);
    }

    #[test]
    fn test_read_comments() {
        let input = ">chr1\n;first pass\n;  second\nACGT\n";
        let records = read_records(input.as_bytes()).unwrap();
        assert_eq!(records[0].comments, vec!["first pass", "  second"]);
        assert_eq!(records[0].seq.to_string(), "ACGT");
    }

    #[test]
    fn test_read_empty_record() {
        let records = read_records(">empty\n>full\nAC\n".as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_empty());
        assert_eq!(records[1].seq.to_string(), "AC");
    }

    #[test]
    fn test_data_before_header_is_error() {
        let err = read_records("ACGT\n>late\n".as_bytes()).unwrap_err();
        assert!(matches!(err, FastaError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_bad_symbol_names_record_and_line() {
        let err = read_records(">chr7\nACGT\nACNT\n".as_bytes()).unwrap_err();
        match err {
            FastaError::Sequence { name, line, .. } => {
                assert_eq!(name, "chr7");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">a").unwrap();
        writeln!(file, "GATTACA").unwrap();
        let records = read_path(file.path()).unwrap();
        assert_eq!(records[0].seq.to_string(), "GATTACA");

        assert!(matches!(
            read_path("/nonexistent/input.fa"),
            Err(FastaError::Io(_))
        ));
    }

    #[test]
    fn test_read_empty_input() {
        assert!(read_records("".as_bytes()).unwrap().is_empty());
    }
}
