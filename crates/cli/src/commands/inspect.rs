use anyhow::{Context, Result};
use codonseq_core::{LengthUnit, Locator};
use codonseq_fasta::{read_path, Record};
use serde::Serialize;
use std::path::Path;

use crate::printing::print_summaries;

/// Layout summary of one record.
#[derive(Debug, Serialize)]
pub struct RecordSummary {
    pub name: String,
    pub bp: usize,
    pub codons: usize,
    pub first: Option<Locator>,
    pub last: Option<Locator>,
    pub comments: usize,
}

impl From<&Record> for RecordSummary {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            bp: record.seq.trulen(LengthUnit::Bp),
            codons: record.seq.trulen(LengthUnit::Codons),
            first: record.seq.first_loc(),
            last: record.seq.last_loc(),
            comments: record.comments.len(),
        }
    }
}

pub fn show_records(input: &Path, json: bool) -> Result<()> {
    let records =
        read_path(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let summaries: Vec<RecordSummary> = records.iter().map(RecordSummary::from).collect();

    if json {
        let text = serde_json::to_string_pretty(&summaries)
            .context("Failed to serialize summary")?;
        println!("{text}");
    } else if summaries.is_empty() {
        println!("No records found.");
    } else {
        print_summaries(&summaries);
    }
    Ok(())
}
