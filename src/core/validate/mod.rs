//! Schema validation
//!
//! Checks the assembled star schema before it is handed to the caller:
//! every non-null foreign key must resolve to a dimension row, per-source
//! row counts are compared to configured expectations, nullable columns
//! are checked against the null-density threshold, and observed date
//! ranges against the calendar span. Validation reads the schema and
//! writes nothing.

pub mod report;

pub use report::{
    DateRangeCheck, NullCheck, OrphanCheck, SourceCountCheck, ValidationReport,
};

use crate::config::{CalendarConfig, ValidationConfig};
use crate::domain::tables::StarSchema;
use std::collections::{BTreeMap, HashSet};
use tracing::warn;

/// Validates an assembled schema against the configured expectations.
pub fn validate(
    schema: &StarSchema,
    config: &ValidationConfig,
    calendar: &CalendarConfig,
) -> ValidationReport {
    let report = ValidationReport {
        source_counts: source_counts(schema, config),
        orphans: orphan_checks(schema),
        nulls: null_checks(schema, config),
        date_ranges: date_ranges(schema, calendar),
    };

    if !report.is_clean() {
        warn!(
            orphans = report.orphan_total(),
            "validation found issues\n{}",
            report.format_summary()
        );
    }
    report
}

fn source_counts(schema: &StarSchema, config: &ValidationConfig) -> Vec<SourceCountCheck> {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for row in &schema.fact_recalls {
        *counts.entry(row.source.clone()).or_insert(0) += 1;
    }
    counts.insert(
        "CDC_NORS".to_string(),
        schema.fact_health_impact.len() as u64,
    );
    counts.insert("CAERS".to_string(), schema.fact_adverse_events.len() as u64);

    counts
        .into_iter()
        .map(|(source, rows)| {
            let expected = config.expected_counts.get(&source).copied();
            let in_range = expected.map_or(true, |range| range.contains(rows));
            SourceCountCheck {
                source,
                rows,
                expected,
                in_range,
            }
        })
        .collect()
}

fn orphan_checks(schema: &StarSchema) -> Vec<OrphanCheck> {
    let date_keys: HashSet<u32> = schema.dim_date.iter().map(|r| r.date_key).collect();
    let geo_keys: HashSet<u32> = schema
        .dim_geography
        .iter()
        .map(|r| r.geography_key)
        .collect();
    let class_keys: HashSet<u32> = schema
        .dim_classification
        .iter()
        .map(|r| r.classification_key)
        .collect();
    let product_keys: HashSet<u32> = schema.dim_product.iter().map(|r| r.product_key).collect();
    let company_keys: HashSet<u32> = schema.dim_company.iter().map(|r| r.company_key).collect();

    let count = |check: &dyn Fn(&crate::domain::tables::FactRecallRow) -> bool| {
        schema.fact_recalls.iter().filter(|r| check(r)).count() as u64
    };

    let recalls = [
        (
            "GeographyKey",
            count(&|r| !geo_keys.contains(&r.geography_key)),
        ),
        (
            "OriginGeographyKey",
            count(&|r| {
                r.origin_geography_key
                    .map_or(false, |k| !geo_keys.contains(&k))
            }),
        ),
        (
            "ClassificationKey",
            count(&|r| !class_keys.contains(&r.classification_key)),
        ),
        (
            "ProductKey",
            count(&|r| !product_keys.contains(&r.product_key)),
        ),
        (
            "CompanyKey",
            count(&|r| !company_keys.contains(&r.company_key)),
        ),
        (
            "DateKey",
            count(&|r| r.date_key.map_or(false, |k| !date_keys.contains(&k))),
        ),
    ];

    let mut checks: Vec<OrphanCheck> = recalls
        .into_iter()
        .map(|(column, orphans)| OrphanCheck {
            table: "fact_recalls".to_string(),
            column: column.to_string(),
            orphans,
        })
        .collect();

    checks.push(OrphanCheck {
        table: "fact_health_impact".to_string(),
        column: "DateKey".to_string(),
        orphans: schema
            .fact_health_impact
            .iter()
            .filter(|r| r.date_key.map_or(false, |k| !date_keys.contains(&k)))
            .count() as u64,
    });
    checks.push(OrphanCheck {
        table: "fact_adverse_events".to_string(),
        column: "DateKey".to_string(),
        orphans: schema
            .fact_adverse_events
            .iter()
            .filter(|r| r.date_key.map_or(false, |k| !date_keys.contains(&k)))
            .count() as u64,
    });

    checks
}

fn null_checks(schema: &StarSchema, config: &ValidationConfig) -> Vec<NullCheck> {
    let mut checks = Vec::new();
    let mut push = |table: &str, column: &str, nulls: usize, total: usize| {
        if total == 0 {
            return;
        }
        let fraction = nulls as f64 / total as f64;
        checks.push(NullCheck {
            table: table.to_string(),
            column: column.to_string(),
            null_fraction: fraction,
            flagged: fraction > config.null_threshold,
        });
    };

    let recalls = schema.fact_recalls.len();
    push(
        "fact_recalls",
        "DateKey",
        schema.fact_recalls.iter().filter(|r| r.date_key.is_none()).count(),
        recalls,
    );
    push(
        "fact_recalls",
        "ReasonForRecall",
        schema
            .fact_recalls
            .iter()
            .filter(|r| r.reason_for_recall.is_none())
            .count(),
        recalls,
    );
    push(
        "fact_adverse_events",
        "DateKey",
        schema
            .fact_adverse_events
            .iter()
            .filter(|r| r.date_key.is_none())
            .count(),
        schema.fact_adverse_events.len(),
    );
    checks
}

fn date_ranges(schema: &StarSchema, calendar: &CalendarConfig) -> Vec<DateRangeCheck> {
    let mut by_source: BTreeMap<String, (Option<String>, Option<String>)> = BTreeMap::new();
    for row in &schema.fact_recalls {
        let entry = by_source.entry(row.source.clone()).or_default();
        if let Some(date) = &row.recall_date {
            // ISO text compares chronologically
            if entry.0.as_deref().map_or(true, |min| date.as_str() < min) {
                entry.0 = Some(date.clone());
            }
            if entry.1.as_deref().map_or(true, |max| date.as_str() > max) {
                entry.1 = Some(date.clone());
            }
        }
    }

    let in_span = |bound: &Option<String>| {
        bound.as_deref().map_or(true, |date| {
            iso_year(date)
                .map_or(false, |y| y >= calendar.start_year && y <= calendar.end_year)
        })
    };

    by_source
        .into_iter()
        .map(|(source, (earliest, latest))| {
            let in_span = in_span(&earliest) && in_span(&latest);
            DateRangeCheck {
                source,
                earliest,
                latest,
                in_span,
            }
        })
        .collect()
}

fn iso_year(date: &str) -> Option<i32> {
    date.get(..4)?.parse().ok()
}
