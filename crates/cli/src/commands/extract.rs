use anyhow::{Context, Result};
use codonseq_fasta::{read_path, Record};
use tracing::info;

use crate::args::ExtractArgs;
use crate::utils::{emit_records, find_record};

pub fn extract_span(args: &ExtractArgs) -> Result<()> {
    let records = read_path(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let source = find_record(&records, &args.record)?;

    let span = source
        .seq
        .subseq(args.start, args.end)
        .with_context(|| format!("Cannot extract {}..{} from '{}'", args.start, args.end, source.name))?;
    info!(record = %source.name, start = %args.start, end = %args.end, "extracted span");

    let name = format!("{}:{}-{}", source.name, args.start, args.end);
    emit_records(&[Record::new(name, span)], args.output.as_deref(), args.line_width)
}
