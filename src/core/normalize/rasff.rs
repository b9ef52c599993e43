//! RASFF alert decoder
//!
//! RASFF has shipped two structurally different exports: the pre-2021
//! archive (ALL-CAPS `REFERENCE`, split `substance/finding` and
//! `hazard category` columns) and the 2021+ portal export (lowercase
//! names, a `risk_decision` column, and one combined `hazards` string).
//! The era is detected once per batch from diagnostic field names and
//! selects the whole field mapping; a batch matching neither era is the
//! one normalization failure that aborts the run, since decoding it
//! field-by-field would silently produce garbage.
//!
//! Both eras carry a product `type` (food/feed/food contact material);
//! only food rows are kept. The notifying country is the reporting
//! location and `origin` the product origin.

use super::{clip, str_field, Decoded, RawRecord};
use crate::domain::{DropReason, HarmonizedRecord, HarmonizerError, RasffSchema, Result, Source};

const LEGACY_MARKERS: &[&str] = &["REFERENCE", "substance/finding", "hazard category"];
const CURRENT_MARKERS: &[&str] = &["risk_decision", "hazards"];

/// Detects the export era from the first record's field names.
pub fn detect_schema(records: &[RawRecord]) -> Result<RasffSchema> {
    let Some(first) = records.first() else {
        // An empty batch decodes to nothing either way
        return Ok(RasffSchema::Current);
    };

    if LEGACY_MARKERS.iter().any(|m| first.contains_key(*m)) {
        return Ok(RasffSchema::Legacy);
    }
    if CURRENT_MARKERS.iter().any(|m| first.contains_key(*m)) {
        return Ok(RasffSchema::Current);
    }

    let mut fields: Vec<String> = first.keys().cloned().collect();
    fields.sort();
    Err(HarmonizerError::SchemaVersionUnrecognized {
        data_source: Source::Rasff,
        fields,
    })
}

pub(crate) fn decode(record: &RawRecord, schema: RasffSchema) -> Decoded {
    match schema {
        RasffSchema::Legacy => decode_legacy(record),
        RasffSchema::Current => decode_current(record),
    }
}

fn is_food(product_type: Option<String>) -> bool {
    product_type.is_some_and(|t| t.eq_ignore_ascii_case("food"))
}

fn decode_legacy(record: &RawRecord) -> Decoded {
    if !is_food(str_field(record, "Type")) {
        return Decoded::Drop(DropReason::FilteredOut);
    }
    let Some(native_id) = str_field(record, "REFERENCE") else {
        return Decoded::Drop(DropReason::MissingNativeId);
    };

    let mut rec = HarmonizedRecord::new(Source::Rasff, native_id.clone());
    rec.event_id = Some(native_id);
    rec.raw_date = str_field(record, "Date");
    rec.country_text = str_field(record, "notifying");
    rec.origin_country_text = str_field(record, "origin");
    rec.native_notification_type = str_field(record, "type2");
    rec.product_text = str_field(record, "subject").map(|s| clip(&s, 200));
    rec.product_category_text = str_field(record, "product category");
    rec.distribution_text = str_field(record, "distribution status").map(|s| clip(&s, 200));
    rec.action_text = str_field(record, "Action taken").map(|s| clip(&s, 200));

    // The split hazard columns are re-encoded in the current export's
    // "substance - {category}" notation so both eras hit the same
    // classifier path
    let substance = str_field(record, "substance/finding");
    let category = str_field(record, "hazard category");
    rec.reason_text = match (substance, category) {
        (Some(sub), Some(cat)) => Some(clip(&format!("{sub} - {{{cat}}}"), 500)),
        (Some(sub), None) => Some(clip(&sub, 500)),
        (None, Some(cat)) => Some(clip(&cat, 500)),
        (None, None) => None,
    };

    Decoded::Keep(rec)
}

fn decode_current(record: &RawRecord) -> Decoded {
    if !is_food(str_field(record, "type")) {
        return Decoded::Drop(DropReason::FilteredOut);
    }
    let Some(native_id) = str_field(record, "reference") else {
        return Decoded::Drop(DropReason::MissingNativeId);
    };

    let mut rec = HarmonizedRecord::new(Source::Rasff, native_id.clone());
    rec.event_id = Some(native_id);
    rec.raw_date = str_field(record, "date");
    rec.country_text = str_field(record, "notifying_country");
    rec.origin_country_text = str_field(record, "origin");
    rec.native_notification_type = str_field(record, "classification");
    rec.native_risk_decision = str_field(record, "risk_decision");
    rec.product_text = str_field(record, "subject").map(|s| clip(&s, 200));
    rec.product_category_text = str_field(record, "category");
    // The combined "substance - {category}" string carries the whole
    // hazard; the classifier parses the bracketed notation itself
    rec.reason_text = str_field(record, "hazards").map(|s| clip(&s, 500));

    Decoded::Keep(rec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawRecord {
        value.as_object().unwrap().clone()
    }

    fn legacy_record() -> RawRecord {
        raw(json!({
            "REFERENCE": "2019.1234",
            "Date": "2019-03-04",
            "notifying": "GERMANY",
            "origin": "TURKEY",
            "Type": "food",
            "type2": "alert",
            "subject": "aflatoxins in pistachios from Turkey",
            "product category": "nuts, nut products and seeds",
            "substance/finding": "aflatoxins",
            "hazard category": "mycotoxins",
            "Action taken": "withdrawal from the market",
            "distribution status": "distribution to other member countries"
        }))
    }

    fn current_record() -> RawRecord {
        raw(json!({
            "reference": "2024.0456",
            "date": "15-01-2024 10:30:00",
            "notifying_country": "Netherlands",
            "origin": "Spain",
            "type": "food",
            "classification": "alert notification",
            "risk_decision": "serious",
            "subject": "Listeria monocytogenes in smoked salmon",
            "category": "fish and fish products",
            "hazards": "Listeria monocytogenes - {pathogenic micro-organisms}"
        }))
    }

    #[test]
    fn test_detects_legacy_era() {
        assert_eq!(
            detect_schema(&[legacy_record()]).unwrap(),
            RasffSchema::Legacy
        );
    }

    #[test]
    fn test_detects_current_era() {
        assert_eq!(
            detect_schema(&[current_record()]).unwrap(),
            RasffSchema::Current
        );
    }

    #[test]
    fn test_unrecognized_era_is_an_error_naming_fields() {
        let record = raw(json!({"b_field": 1, "a_field": 2}));
        let err = detect_schema(&[record]).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("RASFF"), "{msg}");
        assert!(msg.contains("a_field, b_field"), "{msg}");
    }

    #[test]
    fn test_legacy_hazard_columns_reencode_to_current_notation() {
        let Decoded::Keep(rec) = decode(&legacy_record(), RasffSchema::Legacy) else {
            panic!("expected keep");
        };
        assert_eq!(rec.native_id, "2019.1234");
        assert_eq!(
            rec.reason_text.as_deref(),
            Some("aflatoxins - {mycotoxins}")
        );
        assert_eq!(rec.country_text.as_deref(), Some("GERMANY"));
        assert_eq!(rec.origin_country_text.as_deref(), Some("TURKEY"));
        assert_eq!(rec.native_notification_type.as_deref(), Some("alert"));
        assert!(rec.native_risk_decision.is_none());
    }

    #[test]
    fn test_current_reason_is_raw_hazards_string() {
        let Decoded::Keep(rec) = decode(&current_record(), RasffSchema::Current) else {
            panic!("expected keep");
        };
        assert_eq!(
            rec.reason_text.as_deref(),
            Some("Listeria monocytogenes - {pathogenic micro-organisms}")
        );
        assert_eq!(rec.native_risk_decision.as_deref(), Some("serious"));
        assert_eq!(
            rec.native_notification_type.as_deref(),
            Some("alert notification")
        );
    }

    #[test]
    fn test_feed_rows_are_filtered_in_both_eras() {
        let mut legacy = legacy_record();
        legacy.insert("Type".into(), json!("feed"));
        assert!(matches!(
            decode(&legacy, RasffSchema::Legacy),
            Decoded::Drop(DropReason::FilteredOut)
        ));

        let mut current = current_record();
        current.insert("type".into(), json!("food contact material"));
        assert!(matches!(
            decode(&current, RasffSchema::Current),
            Decoded::Drop(DropReason::FilteredOut)
        ));
    }

    #[test]
    fn test_missing_reference_is_dropped() {
        let mut record = current_record();
        record.remove("reference");
        assert!(matches!(
            decode(&record, RasffSchema::Current),
            Decoded::Drop(DropReason::MissingNativeId)
        ));
    }
}
