//! Pipeline orchestration
//!
//! [`HarmonizationPipeline`] wires the stages into one directed run:
//! normalize every batch, assemble the star schema, account for the run,
//! and validate the result. The pipeline owns the rule configuration and
//! nothing else; each run rebuilds the schema from scratch, and the same
//! input with the same rules yields a byte-identical schema.
//!
//! # Examples
//!
//! ```
//! use starling::config::RulesConfig;
//! use starling::core::pipeline::{HarmonizationPipeline, PipelineInput};
//! use starling::core::normalize::SourceBatch;
//! use starling::domain::Source;
//!
//! let pipeline = HarmonizationPipeline::new(RulesConfig::default());
//! let input = PipelineInput {
//!     batches: vec![SourceBatch::from_json_str(
//!         Source::Fsis,
//!         r#"[{"recall_number": "001-2024", "open_date": "01/15/2024",
//!              "class": "1", "product": "Ground beef",
//!              "problem_type": "Product Contamination"}]"#,
//!     )?],
//!     ..PipelineInput::default()
//! };
//! let output = pipeline.run(input)?;
//! assert_eq!(output.schema.fact_recalls.len(), 1);
//! output.validation.ensure_integrity()?;
//! # Ok::<(), starling::domain::HarmonizerError>(())
//! ```

use crate::config::RulesConfig;
use crate::core::assemble::{AssembleInput, Assembler, BuildSummary};
use crate::core::normalize::fsis::{decode_species_summary, decode_yearly_totals};
use crate::core::normalize::{normalize, RawRecord, SourceBatch};
use crate::core::validate::{validate, ValidationReport};
use crate::domain::tables::StarSchema;
use crate::domain::Result;
use tracing::info;

/// Everything one run consumes.
#[derive(Debug, Clone, Default)]
pub struct PipelineInput {
    /// One batch per source; multiple batches per source are allowed and
    /// are deduplicated across batches
    pub batches: Vec<SourceBatch>,
    /// FSIS species-summary rows (`year`, `species`, `recall_count`,
    /// `pounds_recalled`)
    pub fsis_species_summary: Vec<RawRecord>,
    /// FSIS yearly totals for years without detail records
    pub fsis_yearly_totals: Vec<RawRecord>,
}

/// A finished run: the schema, the accounting, and the validation.
#[derive(Debug, Clone)]
pub struct HarmonizationOutput {
    pub schema: StarSchema,
    pub summary: BuildSummary,
    pub validation: ValidationReport,
}

/// The full harmonization pipeline, configured once and runnable many
/// times.
#[derive(Debug, Clone)]
pub struct HarmonizationPipeline {
    rules: RulesConfig,
}

impl HarmonizationPipeline {
    pub fn new(rules: RulesConfig) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Runs the pipeline over one input set. Fails on an unrecognizable
    /// RASFF schema era or invalid configuration; per-record problems
    /// degrade to counted drops instead.
    pub fn run(&self, input: PipelineInput) -> Result<HarmonizationOutput> {
        self.rules.validate()?;
        info!(batches = input.batches.len(), "starting harmonization run");

        let mut summary = BuildSummary::new();
        let mut normalized = Vec::with_capacity(input.batches.len());
        for batch in &input.batches {
            let out = normalize(batch)?;
            summary.record_batch(batch.records.len(), &out);
            normalized.push(out);
        }

        let assembled = Assembler::new(&self.rules).assemble(AssembleInput {
            batches: normalized,
            species_summary: decode_species_summary(&input.fsis_species_summary),
            yearly_totals: decode_yearly_totals(&input.fsis_yearly_totals),
        });
        for (source, n) in &assembled.duplicates {
            summary.record_duplicates(*source, *n);
        }
        summary.record_tables(&assembled.schema);
        summary.log_summary();

        let validation = validate(
            &assembled.schema,
            &self.rules.validation,
            &self.rules.calendar,
        );
        Ok(HarmonizationOutput {
            schema: assembled.schema,
            summary,
            validation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Source;
    use serde_json::json;

    fn pipeline() -> HarmonizationPipeline {
        HarmonizationPipeline::new(RulesConfig::default())
    }

    #[test]
    fn test_empty_input_still_builds_calendar_and_reference_geography() {
        let output = pipeline().run(PipelineInput::default()).unwrap();
        assert!(output.schema.fact_recalls.is_empty());
        assert!(!output.schema.dim_date.is_empty());
        // Unknown + US + UK + EU + EFTA reference rows
        assert_eq!(output.schema.dim_geography.len(), 34);
        assert!(output.validation.ensure_integrity().is_ok());
    }

    #[test]
    fn test_run_is_deterministic() {
        let input = || PipelineInput {
            batches: vec![
                SourceBatch::from_json_str(
                    Source::Fda,
                    &json!({"results": [
                        {"recall_number": "F-1", "product_type": "Food",
                         "recall_initiation_date": "20240110", "state": "CA",
                         "classification": "Class II",
                         "product_description": "Trail mix",
                         "recalling_firm": "Acme Snacks",
                         "reason_for_recall": "undeclared peanuts"},
                        {"recall_number": "F-2", "product_type": "Food",
                         "recall_initiation_date": "20240111", "state": "OR",
                         "classification": "Class I",
                         "product_description": "Soft cheese",
                         "recalling_firm": "Dairy Co",
                         "reason_for_recall": "Listeria monocytogenes"}
                    ]})
                    .to_string(),
                )
                .unwrap(),
                SourceBatch::from_json_str(
                    Source::Fsis,
                    r#"[{"recall_number": "001-2024", "open_date": "01/15/2024",
                         "class": "1", "product": "Ground beef",
                         "problem_type": "Product Contamination"}]"#,
                )
                .unwrap(),
            ],
            ..PipelineInput::default()
        };

        let a = pipeline().run(input()).unwrap();
        let b = pipeline().run(input()).unwrap();
        let a_json = serde_json::to_string(&a.schema).unwrap();
        let b_json = serde_json::to_string(&b.schema).unwrap();
        assert_eq!(a_json, b_json);
    }

    #[test]
    fn test_invalid_rules_fail_before_processing() {
        let mut rules = RulesConfig::default();
        rules.validation.null_threshold = 2.0;
        let err = HarmonizationPipeline::new(rules)
            .run(PipelineInput::default())
            .unwrap_err();
        assert!(err.to_string().contains("null_threshold"));
    }
}
