//! CDC NORS outbreak decoder
//!
//! NORS covers every transmission mode; only `Food` outbreaks are kept.
//! An outbreak carries year/month granularity rather than a full date,
//! plus the health-impact counts that feed the dedicated fact table.

use super::{clip, i64_field, str_field, Decoded, RawRecord};
use crate::domain::{DropReason, HarmonizedRecord, HealthImpact, Source};

pub(crate) fn decode(record: &RawRecord) -> Decoded {
    let is_food = str_field(record, "primary_mode").is_some_and(|m| m.eq_ignore_ascii_case("food"));
    if !is_food {
        return Decoded::Drop(DropReason::FilteredOut);
    }

    let Some(native_id) = str_field(record, "cdcid") else {
        return Decoded::Drop(DropReason::MissingNativeId);
    };

    let mut rec = HarmonizedRecord::new(Source::CdcNors, native_id);
    rec.country_text = Some("United States".to_string());
    rec.state_text = str_field(record, "state");
    rec.health_impact = Some(HealthImpact {
        year: i64_field(record, "year").map(|y| y as i32),
        month: i64_field(record, "month").and_then(|m| u32::try_from(m).ok()),
        illnesses: i64_field(record, "illnesses"),
        hospitalizations: i64_field(record, "hospitalizations"),
        deaths: i64_field(record, "deaths"),
        pathogen: str_field(record, "etiology").map(|s| clip(&s, 200)),
        serotype: str_field(record, "serotype_or_genotype").map(|s| clip(&s, 200)),
        food_vehicle: str_field(record, "food_vehicle").map(|s| clip(&s, 200)),
        ifsac_category: str_field(record, "ifsac_category").map(|s| clip(&s, 200)),
        setting: str_field(record, "setting").map(|s| clip(&s, 200)),
        primary_mode: str_field(record, "primary_mode").map(|s| clip(&s, 100)),
    });
    Decoded::Keep(rec)
}
