//! Configuration management for Starling.
//!
//! The mappings that drive harmonization - severity tables, keyword
//! dictionaries, the unmatched-reason default, expected per-source count
//! ranges - are data, not logic. They ship with built-in defaults and can
//! be overridden from a TOML rules file so keyword-list or threshold
//! updates never require a code change.

pub mod rules;

pub use rules::{
    CalendarConfig, ClassifyConfig, CountRange, RulesConfig, SeverityConfig, SeverityEntry,
    ValidationConfig,
};
