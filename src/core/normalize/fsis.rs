//! FSIS recall decoder and summary-sheet rows
//!
//! FSIS recalls are US-only meat/poultry/egg actions with no state,
//! company, or origin detail; the recall number doubles as the event id.
//! The `class` field ships either numeric (`1`) or spelled out
//! (`Class I`) across vintages and is normalized at assembly.
//!
//! FSIS also publishes two tabular supplements that become their own fact
//! tables: a per-species recall summary and, for years where detail-level
//! records stop, yearly totals that enter the yearly summary as
//! `Summary Only` rows.

use super::{clip, i64_field, str_field, Decoded, RawRecord};
use crate::domain::{DropReason, HarmonizedRecord, Source};

pub(crate) fn decode(record: &RawRecord) -> Decoded {
    let Some(native_id) = str_field(record, "recall_number") else {
        return Decoded::Drop(DropReason::MissingNativeId);
    };

    let mut rec = HarmonizedRecord::new(Source::Fsis, native_id.clone());
    rec.event_id = Some(native_id);
    rec.raw_date = str_field(record, "open_date");
    rec.country_text = Some("United States".to_string());
    rec.native_severity_code = str_field(record, "class");
    rec.product_text = str_field(record, "product").map(|s| clip(&s, 200));
    rec.product_category_text = str_field(record, "species");
    rec.reason_text = str_field(record, "problem_type").map(|s| clip(&s, 500));
    Decoded::Keep(rec)
}

/// One cell of the per-species summary sheet, prior to key assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesSummary {
    pub year: i32,
    pub species: String,
    pub recall_count: i64,
    /// Null when the sheet carried no positive figure
    pub pounds_recalled: Option<i64>,
}

/// Decodes species-summary rows (`year`, `species`, `recall_count`,
/// `pounds_recalled`). Rows without a year or species are skipped; a
/// missing count is zero; non-positive pounds are null.
pub fn decode_species_summary(rows: &[RawRecord]) -> Vec<SpeciesSummary> {
    rows.iter()
        .filter_map(|row| {
            let year = i64_field(row, "year")? as i32;
            let species = str_field(row, "species")?;
            Some(SpeciesSummary {
                year,
                species,
                recall_count: i64_field(row, "recall_count").unwrap_or(0),
                pounds_recalled: i64_field(row, "pounds_recalled").filter(|p| *p > 0),
            })
        })
        .collect()
}

/// One yearly total from the summary sheets, for years the detail feed no
/// longer covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearlyTotal {
    pub year: i32,
    pub recall_count: i64,
    pub pounds_recalled: Option<i64>,
}

/// Decodes yearly-total rows (`year`, `recall_count`, `pounds_recalled`).
/// Rows without a year or a positive count are skipped.
pub fn decode_yearly_totals(rows: &[RawRecord]) -> Vec<YearlyTotal> {
    rows.iter()
        .filter_map(|row| {
            let year = i64_field(row, "year")? as i32;
            let recall_count = i64_field(row, "recall_count").filter(|c| *c > 0)?;
            Some(YearlyTotal {
                year,
                recall_count,
                pounds_recalled: i64_field(row, "pounds_recalled").filter(|p| *p > 0),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawRecord {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_decodes_recall_with_event_id_mirroring_recall_number() {
        let record = raw(json!({
            "recall_number": "021-2024",
            "open_date": "01/15/2024",
            "class": "1",
            "product": "Raw ground beef",
            "species": "Beef",
            "problem_type": "Product Contamination"
        }));
        let Decoded::Keep(rec) = decode(&record) else {
            panic!("expected keep");
        };
        assert_eq!(rec.native_id, "021-2024");
        assert_eq!(rec.event_id.as_deref(), Some("021-2024"));
        assert_eq!(rec.country_text.as_deref(), Some("United States"));
        assert_eq!(rec.native_severity_code.as_deref(), Some("1"));
        assert_eq!(rec.product_category_text.as_deref(), Some("Beef"));
        assert!(rec.origin_country_text.is_none());
    }

    #[test]
    fn test_missing_recall_number_is_dropped() {
        let record = raw(json!({"open_date": "01/15/2024"}));
        assert!(matches!(
            decode(&record),
            Decoded::Drop(DropReason::MissingNativeId)
        ));
    }

    #[test]
    fn test_species_summary_nulls_non_positive_pounds() {
        let rows = [
            raw(json!({"year": 2023, "species": "Beef", "recall_count": 12, "pounds_recalled": 50000})),
            raw(json!({"year": 2023, "species": "Turkey", "recall_count": 3, "pounds_recalled": 0})),
            raw(json!({"year": 2023, "species": "Mixed"})),
            raw(json!({"species": "no year"})),
        ];
        let decoded = decode_species_summary(&rows);
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded[0].pounds_recalled, Some(50000));
        assert_eq!(decoded[1].pounds_recalled, None);
        assert_eq!(decoded[2].recall_count, 0);
    }

    #[test]
    fn test_yearly_totals_require_positive_count() {
        let rows = [
            raw(json!({"year": 2023, "recall_count": 65, "pounds_recalled": 2000000})),
            raw(json!({"year": 2024, "recall_count": 0})),
        ];
        let decoded = decode_yearly_totals(&rows);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].year, 2023);
        assert_eq!(decoded[0].pounds_recalled, Some(2000000));
    }
}
