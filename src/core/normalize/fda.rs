//! FDA enforcement-report decoder
//!
//! FDA enforcement reports cover food, drugs, and devices; only food rows
//! are kept. The reporting location is always the US plus the `state`
//! field; the separate `country` field is the product origin and is
//! resolved independently downstream. `recall_initiation_date` is the
//! recall date, with `report_date` as the fallback.

use super::{clip, str_field, Decoded, RawRecord};
use crate::domain::{DropReason, HarmonizedRecord, Source};

pub(crate) fn decode(record: &RawRecord) -> Decoded {
    let is_food = str_field(record, "product_type")
        .is_some_and(|t| t.eq_ignore_ascii_case("food"));
    if !is_food {
        return Decoded::Drop(DropReason::FilteredOut);
    }

    let Some(native_id) = str_field(record, "recall_number") else {
        return Decoded::Drop(DropReason::MissingNativeId);
    };

    let mut rec = HarmonizedRecord::new(Source::Fda, native_id);
    rec.event_id = str_field(record, "event_id");
    rec.raw_date =
        str_field(record, "recall_initiation_date").or_else(|| str_field(record, "report_date"));
    rec.country_text = Some("United States".to_string());
    rec.state_text = str_field(record, "state");
    rec.origin_country_text = str_field(record, "country");
    rec.native_severity_code = str_field(record, "classification");
    rec.product_text = str_field(record, "product_description").map(|s| clip(&s, 200));
    rec.company_text = str_field(record, "recalling_firm").map(|s| clip(&s, 200));
    rec.company_city = str_field(record, "city");
    rec.reason_text = str_field(record, "reason_for_recall").map(|s| clip(&s, 500));
    rec.distribution_text = str_field(record, "distribution_pattern").map(|s| clip(&s, 200));
    Decoded::Keep(rec)
}
