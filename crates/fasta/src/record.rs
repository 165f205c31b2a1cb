use codonseq_core::{LengthUnit, Seq};
use serde::{Deserialize, Serialize};

/// One named FASTA record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Header text after `>`, trimmed.
    pub name: String,
    /// Comment lines, without the leading `;`.
    pub comments: Vec<String>,
    pub seq: Seq,
}

impl Record {
    pub fn new(name: impl Into<String>, seq: Seq) -> Self {
        Self {
            name: name.into(),
            comments: Vec::new(),
            seq,
        }
    }

    /// Length of the sequence in bases.
    pub fn len(&self) -> usize {
        self.seq.trulen(LengthUnit::Bp)
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}
