//! UK FSA food-alert decoder
//!
//! UK FSA alerts are linked-data JSON with nested structures: the alert
//! type is a list of ontology URIs, product details and problem
//! statements are arrays of objects, and countries are labelled nodes.
//! The reporting location is always the United Kingdom; the per-nation
//! labels (England, Wales, ...) describe distribution, not geography.

use super::{clip, str_field, Decoded, RawRecord};
use crate::domain::{DropReason, HarmonizedRecord, Source};
use serde_json::Value;

pub(crate) fn decode(record: &RawRecord) -> Decoded {
    let Some(native_id) = str_field(record, "notation") else {
        return Decoded::Drop(DropReason::MissingNativeId);
    };

    let mut rec = HarmonizedRecord::new(Source::UkFsa, native_id.clone());
    rec.event_id = Some(native_id);
    rec.raw_date = str_field(record, "created");
    rec.country_text = Some("United Kingdom".to_string());
    rec.native_notification_type = Some(alert_type(record));
    rec.product_text = product_name(record)
        .or_else(|| str_field(record, "shortTitle"))
        .map(|s| clip(&s, 200));
    rec.reason_text = reason(record).map(|s| clip(&s, 500));
    rec.distribution_text = Some(clip(&countries(record), 200));
    Decoded::Keep(rec)
}

/// Maps the ontology URIs in `type` to the alert-type vocabulary. The
/// last recognized URI wins; anything unrecognized stays a plain `Alert`.
fn alert_type(record: &RawRecord) -> String {
    let mut alert = "Alert";
    if let Some(types) = record.get("type").and_then(Value::as_array) {
        for uri in types.iter().filter_map(Value::as_str) {
            if uri.contains("/AA") {
                alert = "Allergy Alert";
            } else if uri.contains("/PRIN") {
                alert = "Product Recall";
            } else if uri.contains("/FAFA") {
                alert = "Food Alert For Action";
            }
        }
    }
    alert.to_string()
}

fn product_name(record: &RawRecord) -> Option<String> {
    let details = record.get("productDetails")?.as_array()?;
    let name = details.first()?.get("productName")?.as_str()?.trim();
    (!name.is_empty()).then(|| name.to_string())
}

/// The recall reason: the last non-empty risk statement, or the collected
/// allergen labels when no statement is given.
fn reason(record: &RawRecord) -> Option<String> {
    let problems = record.get("problem").and_then(Value::as_array)?;

    let mut risk_statement = None;
    let mut allergens = Vec::new();
    for problem in problems {
        if let Some(rs) = problem.get("riskStatement").and_then(Value::as_str) {
            if !rs.trim().is_empty() {
                risk_statement = Some(rs.trim().to_string());
            }
        }
        if let Some(list) = problem.get("allergen").and_then(Value::as_array) {
            for allergen in list {
                if let Some(label) = allergen.get("label").and_then(Value::as_str) {
                    if !label.trim().is_empty() {
                        allergens.push(label.trim().to_string());
                    }
                }
            }
        }
    }

    risk_statement.or_else(|| {
        (!allergens.is_empty()).then(|| format!("Allergens: {}", allergens.join(", ")))
    })
}

/// Joined country labels for the distribution column. A label node may
/// carry its label as a string or a singleton list.
fn countries(record: &RawRecord) -> String {
    let mut labels = Vec::new();
    if let Some(list) = record.get("country").and_then(Value::as_array) {
        for country in list {
            let label = match country.get("label") {
                Some(Value::String(s)) => Some(s.as_str()),
                Some(Value::Array(items)) => items.first().and_then(Value::as_str),
                _ => None,
            };
            if let Some(label) = label {
                if !label.trim().is_empty() {
                    labels.push(label.trim().to_string());
                }
            }
        }
    }
    if labels.is_empty() {
        "United Kingdom".to_string()
    } else {
        labels.join(", ")
    }
}
