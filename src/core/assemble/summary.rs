//! Run accounting
//!
//! [`BuildSummary`] tracks what happened to every input record: per-source
//! input/kept/dropped counts with drop reasons, the detected RASFF era,
//! and final per-table row counts. Emitted through structured logging at
//! the end of a run; the pipeline also returns it so callers can assert
//! on the accounting.

use crate::core::normalize::NormalizedBatch;
use crate::domain::tables::StarSchema;
use crate::domain::{DropReason, RasffSchema, Source};
use std::collections::BTreeMap;
use tracing::info;

/// Input/kept/dropped accounting for one source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceCounts {
    pub input: u64,
    pub kept: u64,
    pub dropped: BTreeMap<DropReason, u64>,
}

impl SourceCounts {
    pub fn dropped_total(&self) -> u64 {
        self.dropped.values().sum()
    }
}

/// Accounting for one full pipeline run.
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    pub sources: BTreeMap<Source, SourceCounts>,
    /// Detected RASFF export era, when a RASFF batch was present
    pub rasff_schema: Option<RasffSchema>,
    /// Final row count per output table
    pub table_rows: BTreeMap<String, u64>,
}

impl BuildSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one normalized batch against its raw input size.
    pub fn record_batch(&mut self, input: usize, batch: &NormalizedBatch) {
        let counts = self.sources.entry(batch.source).or_default();
        counts.input += input as u64;
        counts.kept += batch.records.len() as u64;
        for (reason, n) in &batch.dropped {
            *counts.dropped.entry(*reason).or_insert(0) += n;
        }
        if batch.source == Source::Rasff {
            self.rasff_schema = batch.rasff_schema;
        }
    }

    /// Records cross-batch duplicates removed during assembly. Duplicates
    /// count against `kept` since they entered normalization intact.
    pub fn record_duplicates(&mut self, source: Source, n: u64) {
        if n == 0 {
            return;
        }
        let counts = self.sources.entry(source).or_default();
        counts.kept = counts.kept.saturating_sub(n);
        *counts.dropped.entry(DropReason::Duplicate).or_insert(0) += n;
    }

    /// Captures the final per-table row counts.
    pub fn record_tables(&mut self, schema: &StarSchema) {
        let counts: [(&str, usize); 10] = [
            ("dim_date", schema.dim_date.len()),
            ("dim_geography", schema.dim_geography.len()),
            ("dim_classification", schema.dim_classification.len()),
            ("dim_product", schema.dim_product.len()),
            ("dim_company", schema.dim_company.len()),
            ("fact_recalls", schema.fact_recalls.len()),
            ("fact_health_impact", schema.fact_health_impact.len()),
            ("fact_adverse_events", schema.fact_adverse_events.len()),
            ("fact_fsis_species", schema.fact_fsis_species.len()),
            ("fact_yearly_summary", schema.fact_yearly_summary.len()),
        ];
        for (name, n) in counts {
            self.table_rows.insert(name.to_string(), n as u64);
        }
    }

    pub fn total_kept(&self) -> u64 {
        self.sources.values().map(|c| c.kept).sum()
    }

    pub fn total_dropped(&self) -> u64 {
        self.sources.values().map(SourceCounts::dropped_total).sum()
    }

    /// Emits the run accounting as structured log events.
    pub fn log_summary(&self) {
        for (source, counts) in &self.sources {
            info!(
                source = %source,
                input = counts.input,
                kept = counts.kept,
                dropped = counts.dropped_total(),
                "source processed"
            );
        }
        if let Some(schema) = self.rasff_schema {
            info!(schema = %schema, "RASFF export era");
        }
        for (table, rows) in &self.table_rows {
            info!(table = %table, rows, "table built");
        }
        info!(
            kept = self.total_kept(),
            dropped = self.total_dropped(),
            "harmonization run complete"
        );
    }
}
