//! Domain error types
//!
//! Starling distinguishes two kinds of trouble. Data-quality problems
//! (unknown countries, unrecognized severity codes, unparseable dates,
//! records without a native id) resolve to documented fallback values and
//! aggregate counts - they never surface here. This module covers the
//! build defects and contract breaches that genuinely stop a run.

use crate::domain::source::Source;
use thiserror::Error;

/// Main Starling error type
///
/// This is the primary error type used throughout the crate. None of the
/// variants expose third-party types.
#[derive(Debug, Error)]
pub enum HarmonizerError {
    /// A source batch matches neither known schema era. Proceeding without
    /// a field mapping would silently mangle every record, so this is
    /// fatal for the batch. The diagnostic names the fields observed.
    #[error("unrecognized {data_source} schema: no known era matches fields [{}]", fields.join(", "))]
    SchemaVersionUnrecognized {
        /// Source whose batch failed detection. Not named `source`: thiserror
        /// would treat that field as the error cause.
        data_source: Source,
        /// Field names observed in the offending batch, sorted
        fields: Vec<String>,
    },

    /// A fact row references a dimension key that does not exist. This is
    /// an assembler defect, not a data-quality issue; callers must treat
    /// it as fatal.
    #[error("referential integrity violation: {violations} unresolved foreign key(s)")]
    ReferentialIntegrity {
        /// Total number of orphaned foreign keys across all fact tables
        violations: usize,
    },

    /// Rule-table configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors (reading a rules file)
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for HarmonizerError {
    fn from(err: std::io::Error) -> Self {
        HarmonizerError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for HarmonizerError {
    fn from(err: serde_json::Error) -> Self {
        HarmonizerError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for HarmonizerError {
    fn from(err: toml::de::Error) -> Self {
        HarmonizerError::Configuration(format!("TOML parse error: {err}"))
    }
}
