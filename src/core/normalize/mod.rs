//! Schema normalization
//!
//! Maps each source's native records onto [`HarmonizedRecord`], the common
//! shape the assembler consumes. One decoder per source; each decoder
//! knows its source's field names, row filters, and quirks, and nothing
//! else does. A record that fails its source filter or lacks the mandatory
//! native id is dropped and counted, never an error; only an
//! unrecognizable RASFF schema era fails the batch.

pub mod caers;
pub mod cdc;
pub mod fda;
pub mod fsis;
pub mod rasff;
pub mod uk_fsa;

use crate::domain::{DropReason, HarmonizedRecord, RasffSchema, Result, Source};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// One raw input row: a JSON object of native fields.
pub type RawRecord = serde_json::Map<String, Value>;

/// A batch of raw records from one source.
#[derive(Debug, Clone)]
pub struct SourceBatch {
    pub source: Source,
    pub records: Vec<RawRecord>,
}

impl SourceBatch {
    pub fn new(source: Source, records: Vec<RawRecord>) -> Self {
        Self { source, records }
    }

    /// Parses a batch from JSON text. Accepts a top-level array of
    /// objects or the envelope forms the agencies publish: FDA wraps the
    /// array in `results`, UK FSA in `items`. Non-object array elements
    /// are ignored.
    pub fn from_json_str(source: Source, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let array = match &value {
            Value::Array(rows) => rows.as_slice(),
            Value::Object(obj) => obj
                .get("results")
                .or_else(|| obj.get("items"))
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default(),
            _ => &[],
        };
        let records = array
            .iter()
            .filter_map(|v| v.as_object().cloned())
            .collect();
        Ok(Self::new(source, records))
    }
}

/// A decoder's verdict on one raw record.
#[derive(Debug, Clone)]
pub enum Decoded {
    Keep(HarmonizedRecord),
    Drop(DropReason),
}

/// The output of normalizing one batch: harmonized records plus drop
/// counts by reason.
#[derive(Debug, Clone)]
pub struct NormalizedBatch {
    pub source: Source,
    pub records: Vec<HarmonizedRecord>,
    pub dropped: BTreeMap<DropReason, u64>,
    /// Which RASFF export era the batch was detected as; `None` for every
    /// other source
    pub rasff_schema: Option<RasffSchema>,
}

impl NormalizedBatch {
    fn new(source: Source) -> Self {
        Self {
            source,
            records: Vec::new(),
            dropped: BTreeMap::new(),
            rasff_schema: None,
        }
    }

    fn push(&mut self, decoded: Decoded) {
        match decoded {
            Decoded::Keep(record) => self.records.push(record),
            Decoded::Drop(reason) => *self.dropped.entry(reason).or_insert(0) += 1,
        }
    }

    /// Total records dropped across all reasons.
    pub fn dropped_total(&self) -> u64 {
        self.dropped.values().sum()
    }
}

/// Normalizes one source batch. Fails only when the RASFF schema era
/// cannot be detected; everything else degrades to per-record drops.
pub fn normalize(batch: &SourceBatch) -> Result<NormalizedBatch> {
    let mut out = NormalizedBatch::new(batch.source);

    match batch.source {
        Source::Rasff => {
            let schema = rasff::detect_schema(&batch.records)?;
            debug!(schema = %schema, "detected RASFF export era");
            out.rasff_schema = Some(schema);
            for record in &batch.records {
                out.push(rasff::decode(record, schema));
            }
        }
        other => {
            let decode: fn(&RawRecord) -> Decoded = match other {
                Source::Fda => fda::decode,
                Source::Fsis => fsis::decode,
                Source::CdcNors => cdc::decode,
                Source::UkFsa => uk_fsa::decode,
                Source::Caers => caers::decode,
                Source::Rasff => unreachable!("handled above"),
            };
            for record in &batch.records {
                out.push(decode(record));
            }
        }
    }

    info!(
        source = %out.source,
        kept = out.records.len(),
        dropped = out.dropped_total(),
        "normalized batch"
    );
    Ok(out)
}

/// Non-empty trimmed string field. Numbers are accepted and rendered as
/// text since the agencies are inconsistent about quoting identifiers.
pub(crate) fn str_field(record: &RawRecord, name: &str) -> Option<String> {
    match record.get(name)? {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Integer field, tolerating quoted numbers and floating-point renderings
/// of whole numbers.
pub(crate) fn i64_field(record: &RawRecord, name: &str) -> Option<i64> {
    match record.get(name)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}

/// Truncates free text to `max` characters on a char boundary, trimming
/// trailing whitespace. Matches the warehouse column widths.
pub(crate) fn clip(text: &str, max: usize) -> String {
    text.chars().take(max).collect::<String>().trim_end().to_string()
}
