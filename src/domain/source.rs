//! Source taxonomy and schema-era tags
//!
//! Each regulatory source has its own native schema, date formats, severity
//! vocabulary, and geographic encoding. The [`Source`] enum is the single
//! place where that identity lives; every dimension and fact row records
//! which source it came from using the stable wire names below.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six regulatory sources Starling harmonizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Source {
    /// FDA food enforcement reports (US)
    Fda,
    /// FSIS meat/poultry recalls (US)
    Fsis,
    /// CDC NORS foodborne outbreaks (US)
    CdcNors,
    /// RASFF alerts (EU rapid alert system)
    Rasff,
    /// UK FSA food alerts (post-Brexit UK)
    UkFsa,
    /// FDA CAERS adverse-event reports
    Caers,
}

impl Source {
    /// Stable name used in output tables and lookup keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Fda => "FDA",
            Source::Fsis => "FSIS",
            Source::CdcNors => "CDC_NORS",
            Source::Rasff => "RASFF",
            Source::UkFsa => "UK_FSA",
            Source::Caers => "CAERS",
        }
    }

    /// All sources in fixed processing order.
    pub fn all() -> [Source; 6] {
        [
            Source::Fda,
            Source::Fsis,
            Source::CdcNors,
            Source::Rasff,
            Source::UkFsa,
            Source::Caers,
        ]
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// RASFF has shipped two structurally different export formats over time.
/// The era is detected once per batch from diagnostic field names and then
/// drives the whole field-mapping table; no per-field sniffing downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RasffSchema {
    /// Pre-2021 export: `REFERENCE`, `substance/finding`, `hazard category`
    Legacy,
    /// 2021+ export: `risk_decision`, combined `hazards` string
    Current,
}

impl RasffSchema {
    /// Short label for diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            RasffSchema::Legacy => "legacy",
            RasffSchema::Current => "current",
        }
    }
}

impl fmt::Display for RasffSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a record was excluded during normalization or assembly. Dropped
/// records are counted per source and reason; a drop is never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DropReason {
    /// The mandatory native recall/event id was absent
    MissingNativeId,
    /// Excluded by a source-level row filter (non-food, cosmetics, ...)
    FilteredOut,
    /// A record with the same (source, native id) was already seen;
    /// first occurrence wins
    Duplicate,
}

impl DropReason {
    /// Stable name used in summaries.
    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::MissingNativeId => "missing_native_id",
            DropReason::FilteredOut => "filtered_out",
            DropReason::Duplicate => "duplicate",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
