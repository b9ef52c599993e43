// Starling - Food-Safety Recall Harmonization Engine
// Copyright (c) 2026 Starling Contributors
// Licensed under the MIT License

//! # Starling - multi-source food-safety recall harmonization
//!
//! Starling merges recall and outbreak records from six independently-run
//! regulatory sources (FDA enforcement, FSIS recalls, CDC NORS outbreaks,
//! EU RASFF alerts, UK FSA alerts, and the CAERS adverse-event registry)
//! into one consistent star schema: five dimension tables and five fact
//! tables connected by integer surrogate keys.
//!
//! ## Overview
//!
//! The crate is the harmonization-and-classification core of a larger
//! pipeline. It consumes per-source batches of already-decoded records and
//! produces the analytical tables; fetching from agency APIs and uploading
//! the results are the job of external collaborators.
//!
//! - **Normalizing** each source's native schema onto one intermediate
//!   record shape, including detection of RASFF's two export eras
//! - **Unifying** three incompatible severity vocabularies onto one
//!   ordinal scale
//! - **Classifying** free-text recall reasons into a three-level taxonomy
//!   with ordered keyword rules
//! - **Assembling** deduplicated fact rows with memoized surrogate keys
//! - **Validating** referential integrity of the finished schema
//!
//! ## Architecture
//!
//! Starling follows a layered architecture:
//!
//! - [`core`] - Business logic (normalize, classify, assemble, validate)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Rule tables and thresholds, loadable from TOML
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use starling::config::RulesConfig;
//! use starling::core::pipeline::{HarmonizationPipeline, PipelineInput};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rules = RulesConfig::default();
//!     let pipeline = HarmonizationPipeline::new(rules);
//!
//!     // Batches come from the external ingestion collaborators.
//!     let input = PipelineInput::default();
//!     let output = pipeline.run(input)?;
//!
//!     println!("fact_recalls: {} rows", output.schema.fact_recalls.len());
//!     output.validation.ensure_integrity()?;
//!     Ok(())
//! }
//! ```
//!
//! ## Determinism
//!
//! Every stage before key assembly is pure given its input and the static
//! rule tables. The assembler is single-threaded over a run-scoped key
//! store, so the same input batches always produce identical tables,
//! including identical surrogate key assignment order. A re-run rebuilds
//! all tables from scratch; there is no incremental path.
//!
//! ## Error Handling
//!
//! Starling uses the [`domain::HarmonizerError`] type for all errors.
//! Missing geography, unknown severity codes, unmatched reason strings,
//! and unparseable dates are data-quality signals resolved to documented
//! fallback values and surfaced via aggregate counts - never errors. Only
//! an unrecognized schema era and a post-build referential-integrity
//! violation are fatal.
//!
//! ## Logging
//!
//! Starling emits structured events with the `tracing` crate; installing
//! a subscriber is the caller's concern.

pub mod config;
pub mod core;
pub mod domain;
