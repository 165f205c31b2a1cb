use anyhow::{Context, Result};
use codonseq_core::{Base, Locator, Seq};
use codonseq_fasta::{read_path, Record};
use serde::{Deserialize, Deserializer};
use std::fs;
use tracing::{debug, info};

use crate::args::EditArgs;
use crate::utils::emit_records;

/// A JSON edit script.
///
/// ```json
/// {
///   "edits": [
///     {"op": "insert_seq", "at": "3:2", "seq": "ACG"},
///     {"op": "pop_base", "at": "0:1", "record": "chr2"}
///   ]
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    pub edits: Vec<Step>,
}

/// One edit, applied to the named record or to every record.
#[derive(Debug, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub record: Option<String>,
    #[serde(flatten)]
    pub edit: Edit,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    InsertBase {
        #[serde(deserialize_with = "locator_text")]
        at: Locator,
        base: Base,
    },
    InsertSeq {
        #[serde(deserialize_with = "locator_text")]
        at: Locator,
        seq: Seq,
    },
    PopBase {
        #[serde(deserialize_with = "locator_text")]
        at: Locator,
    },
    PopSeq {
        #[serde(deserialize_with = "locator_text")]
        at: Locator,
        len: usize,
    },
    PushBack {
        seq: Seq,
    },
}

fn locator_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Locator, D::Error> {
    let text = String::deserialize(deserializer)?;
    text.parse().map_err(serde::de::Error::custom)
}

impl Script {
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Invalid edit script")
    }
}

impl Edit {
    /// Apply to one sequence. Removed bases are returned as text.
    pub fn apply(&self, seq: &mut Seq) -> codonseq_core::Result<Option<String>> {
        match self {
            Edit::InsertBase { at, base } => seq.insert_base(*base, *at).map(|()| None),
            Edit::InsertSeq { at, seq: other } => seq.insert_seq(other.clone(), *at).map(|()| None),
            Edit::PopBase { at } => seq.pop_base(*at).map(|b| Some(b.to_string())),
            Edit::PopSeq { at, len } => seq.pop_seq(*at, *len).map(|s| Some(s.to_string())),
            Edit::PushBack { seq: other } => {
                seq.push_back_seq(other.clone());
                Ok(None)
            }
        }
    }
}

/// Apply every step of `script` to `records`, in order.
pub fn apply_script(records: &mut [Record], script: &Script) -> Result<()> {
    for (idx, step) in script.edits.iter().enumerate() {
        let mut matched = false;
        for record in records.iter_mut() {
            if step.record.as_ref().is_some_and(|name| *name != record.name) {
                continue;
            }
            matched = true;
            let removed = step
                .edit
                .apply(&mut record.seq)
                .with_context(|| format!("Edit #{} failed on record '{}'", idx + 1, record.name))?;
            debug!(step = idx + 1, record = %record.name, edit = ?step.edit, "applied edit");
            if let Some(text) = removed {
                info!(step = idx + 1, record = %record.name, removed = %text, "removed bases");
            }
        }
        if !matched {
            anyhow::bail!(
                "Edit #{} names record '{}' which is not in the input",
                idx + 1,
                step.record.as_deref().unwrap_or_default()
            );
        }
    }
    Ok(())
}

pub fn edit_records(args: &EditArgs) -> Result<()> {
    let mut records = read_path(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let text = fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script = Script::parse(&text)?;

    apply_script(&mut records, &script)?;
    info!(edits = script.edits.len(), records = records.len(), "edits applied");

    emit_records(&records, args.output.as_deref(), args.line_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![
            Record::new("chr1", "ATGGTATACACATA".parse().unwrap()),
            Record::new("chr2", "GATTACA".parse().unwrap()),
        ]
    }

    #[test]
    fn test_parse_script() {
        let script = Script::parse(
            r#"{"edits": [
                {"op": "insert_base", "at": "1:2", "base": "C"},
                {"op": "insert_seq", "at": "0:1", "seq": "GG", "record": "chr2"},
                {"op": "pop_base", "at": "0:1"},
                {"op": "pop_seq", "at": "1:1", "len": 4},
                {"op": "push_back", "seq": "TTT"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(script.edits.len(), 5);
        assert_eq!(script.edits[1].record.as_deref(), Some("chr2"));
        assert!(matches!(
            script.edits[0].edit,
            Edit::InsertBase { at, base: Base::C } if at == Locator::new(1, 2)
        ));
    }

    #[test]
    fn test_parse_script_errors() {
        assert!(Script::parse(r#"{"edits": [{"op": "rotate", "at": "0:1"}]}"#).is_err());
        assert!(Script::parse(r#"{"edits": [{"op": "pop_base", "at": "x"}]}"#).is_err());
        assert!(Script::parse(r#"{"edits": [{"op": "push_back", "seq": "ACNT"}]}"#).is_err());
    }

    #[test]
    fn test_apply_script_to_named_record() {
        let mut recs = records();
        let script = Script::parse(
            r#"{"edits": [
                {"op": "insert_seq", "at": "1:1", "seq": "CCCC", "record": "chr2"},
                {"op": "pop_base", "at": "0:1"}
            ]}"#,
        )
        .unwrap();
        apply_script(&mut recs, &script).unwrap();
        assert_eq!(recs[0].seq.to_string(), "TGGTATACACATA");
        assert_eq!(recs[1].seq.to_string(), "ATCCCCTACA");
    }

    #[test]
    fn test_apply_script_unknown_record() {
        let mut recs = records();
        let script =
            Script::parse(r#"{"edits": [{"op": "push_back", "seq": "A", "record": "chrX"}]}"#)
                .unwrap();
        let err = apply_script(&mut recs, &script).unwrap_err();
        assert!(err.to_string().contains("chrX"));
    }

    #[test]
    fn test_apply_script_reports_failing_step() {
        let mut recs = records();
        let script =
            Script::parse(r#"{"edits": [{"op": "pop_seq", "at": "2:1", "len": 10}]}"#).unwrap();
        let err = apply_script(&mut recs, &script).unwrap_err();
        assert!(format!("{err:#}").contains("Edit #1"));
        assert_eq!(recs[0].seq.to_string(), "ATGGTATACACATA");
    }
}
