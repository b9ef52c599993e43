//! Core harmonization logic
//!
//! The pipeline stages in dependency order: [`normalize`] maps native
//! schemas onto the harmonized record shape; [`geography`], [`severity`],
//! [`classify`], and [`dates`] enrich per record (all pure); [`assemble`]
//! deduplicates, assigns surrogate keys, and builds the fact rows;
//! [`validate`] checks the finished schema. [`pipeline`] wires them into
//! one directed run.

pub mod assemble;
pub mod classify;
pub mod dates;
pub mod geography;
pub mod normalize;
pub mod pipeline;
pub mod severity;
pub mod validate;
