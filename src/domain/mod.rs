//! Domain models and types for Starling.
//!
//! This module contains the core domain models shared by every pipeline
//! stage: the source taxonomy, the harmonized intermediate record, the
//! star-schema row types, and the error hierarchy.
//!
//! # Type Safety
//!
//! Sources and schema eras are closed enums resolved once per batch, so
//! field-mapping decisions never leak into downstream stages as stringly
//! typed conditionals:
//!
//! ```rust
//! use starling::domain::{RasffSchema, Source};
//!
//! let source = Source::Rasff;
//! assert_eq!(source.as_str(), "RASFF");
//! assert_eq!(RasffSchema::Legacy.as_str(), "legacy");
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, HarmonizerError>`]:
//!
//! ```rust
//! use starling::domain::{HarmonizerError, Result};
//!
//! fn example() -> Result<()> {
//!     let rules = starling::config::RulesConfig::from_toml_str("")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod record;
pub mod result;
pub mod source;
pub mod tables;

// Re-export commonly used types for convenience
pub use errors::HarmonizerError;
pub use record::{AdverseEventDetail, HarmonizedRecord, HealthImpact};
pub use result::Result;
pub use source::{DropReason, RasffSchema, Source};
pub use tables::{
    DimClassificationRow, DimCompanyRow, DimDateRow, DimGeographyRow, DimProductRow,
    FactAdverseEventRow, FactFsisSpeciesRow, FactHealthImpactRow, FactRecallRow,
    FactYearlySummaryRow, StarSchema,
};
