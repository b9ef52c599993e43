//! Validation report
//!
//! The outcome of checking an assembled schema: referential integrity,
//! per-source row counts against expected ranges, null-density flags, and
//! observed date ranges. Integrity violations are the only hard failure;
//! count and null findings are quality signals surfaced in the summary.

use crate::config::CountRange;
use crate::domain::{HarmonizerError, Result};
use std::fmt::Write as _;

/// Foreign-key check for one fact column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanCheck {
    pub table: String,
    pub column: String,
    /// Rows whose non-null key has no dimension row
    pub orphans: u64,
}

/// Null-density check for one nullable column.
#[derive(Debug, Clone, PartialEq)]
pub struct NullCheck {
    pub table: String,
    pub column: String,
    pub null_fraction: f64,
    /// True when the fraction exceeds the configured threshold
    pub flagged: bool,
}

/// Row count for one source against its expected range, when configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCountCheck {
    pub source: String,
    pub rows: u64,
    pub expected: Option<CountRange>,
    pub in_range: bool,
}

/// Observed recall-date range for one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeCheck {
    pub source: String,
    pub earliest: Option<String>,
    pub latest: Option<String>,
    /// True when both bounds fall inside the calendar span
    pub in_span: bool,
}

/// Full validation outcome for one run.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub source_counts: Vec<SourceCountCheck>,
    pub orphans: Vec<OrphanCheck>,
    pub nulls: Vec<NullCheck>,
    pub date_ranges: Vec<DateRangeCheck>,
}

impl ValidationReport {
    /// Total orphaned references across all fact columns.
    pub fn orphan_total(&self) -> u64 {
        self.orphans.iter().map(|c| c.orphans).sum()
    }

    /// True when nothing at all was flagged.
    pub fn is_clean(&self) -> bool {
        self.orphan_total() == 0
            && self.source_counts.iter().all(|c| c.in_range)
            && self.nulls.iter().all(|c| !c.flagged)
            && self.date_ranges.iter().all(|c| c.in_span)
    }

    /// Fails when any fact row references a missing dimension row. Count
    /// and null findings never fail the run.
    pub fn ensure_integrity(&self) -> Result<()> {
        let violations = self.orphan_total();
        if violations > 0 {
            return Err(HarmonizerError::ReferentialIntegrity {
                violations: violations as usize,
            });
        }
        Ok(())
    }

    /// Human-readable multi-line summary.
    pub fn format_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "📊 Validation Report");
        let _ = writeln!(out, "====================");

        let _ = writeln!(out, "Rows by source:");
        for check in &self.source_counts {
            let marker = if check.in_range { "✅" } else { "❌" };
            match check.expected {
                Some(range) => {
                    let _ = writeln!(
                        out,
                        "  {marker} {}: {} (expected {}..={})",
                        check.source, check.rows, range.min, range.max
                    );
                }
                None => {
                    let _ = writeln!(out, "  {marker} {}: {}", check.source, check.rows);
                }
            }
        }

        let orphan_total = self.orphan_total();
        if orphan_total == 0 {
            let _ = writeln!(out, "✅ Referential integrity: no orphaned keys");
        } else {
            let _ = writeln!(out, "❌ Referential integrity: {orphan_total} orphaned keys");
            for check in self.orphans.iter().filter(|c| c.orphans > 0) {
                let _ = writeln!(
                    out,
                    "   {}.{}: {} orphans",
                    check.table, check.column, check.orphans
                );
            }
        }

        for check in &self.nulls {
            let marker = if check.flagged { "❌" } else { "✅" };
            let _ = writeln!(
                out,
                "{marker} {}.{}: {:.1}% null",
                check.table,
                check.column,
                check.null_fraction * 100.0
            );
        }

        for range in &self.date_ranges {
            let marker = if range.in_span { "✅" } else { "❌" };
            let _ = writeln!(
                out,
                "{marker} {} dates: {} .. {}",
                range.source,
                range.earliest.as_deref().unwrap_or("-"),
                range.latest.as_deref().unwrap_or("-")
            );
        }

        out
    }
}
