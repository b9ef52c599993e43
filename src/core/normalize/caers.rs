//! FDA CAERS adverse-event decoder
//!
//! CAERS reports cover food, supplements, and cosmetics; cosmetic reports
//! and reports without any product are filtered out. Only the first
//! reported product identifies the report. Consumer age ships in mixed
//! units (years, months, days) and is converted to whole years; outcomes
//! and reactions are free lists whose lengths are carried as counts.

use super::{clip, str_field, Decoded, RawRecord};
use crate::domain::{AdverseEventDetail, DropReason, HarmonizedRecord, Source};
use serde_json::Value;

/// FDA industry categories mapped to the broad product type. Exact-match;
/// anything unlisted is `Other`.
const INDUSTRY_PRODUCT_TYPES: &[(&str, &str)] = &[
    ("Vit/Min/Prot/Unconv Diet(Human/Animal)", "Supplement"),
    ("Dietary Conventional Foods/Meal Replacements", "Supplement"),
    ("Powder Formula", "Supplement"),
    ("Vegetables/Vegetable Products", "Fresh Produce"),
    ("Fruit/Fruit Prod", "Fresh Produce"),
    ("Prep Salad Prod", "Fresh Produce"),
    ("Nuts/Edible Seed", "Nuts/Seeds"),
    ("Fishery/Seafood Prod", "Seafood"),
    ("Milk/Butter/Dried Milk Prod", "Dairy"),
    ("Ice Cream Prod", "Dairy"),
    ("Cheese/Cheese Prod", "Dairy"),
    ("Egg/Egg Prod", "Fresh Protein"),
    ("Meat, Meat Products And Poultry", "Fresh Protein"),
    ("Bakery Prod/Dough/Mix/Icing", "Bakery/Grains"),
    ("Cereal Prep/Breakfast Food", "Bakery/Grains"),
    ("Whole Grain/Milled Grain Prod/Starch", "Bakery/Grains"),
    ("Soft Drink/Water", "Beverage"),
    ("Coffee/Tea", "Beverage"),
    ("Candy W/O Choc/Special/Chew Gum", "Confectionery"),
    ("Choc/Cocoa Prod", "Confectionery"),
    ("Mult Food Dinner/Grav/Sauce/Special", "Ready-to-Eat"),
    ("Soup", "Ready-to-Eat"),
    ("Baby Food Products", "Ready-to-Eat"),
    ("Snack Food Item", "Ready-to-Eat"),
    ("Spices, Flavors And Salts", "Ingredients"),
    ("Food Additives (Human Use)", "Ingredients"),
    ("Dressings/Condiments", "Ingredients"),
    ("Food Service/Convnce Store", "Processed"),
    ("Macaroni/Noodle Prod", "Processed"),
];

/// Broad product type for an FDA industry category.
pub fn product_type_for_industry(industry_category: Option<&str>) -> &'static str {
    let Some(category) = industry_category else {
        return "Other";
    };
    INDUSTRY_PRODUCT_TYPES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, product_type)| *product_type)
        .unwrap_or("Other")
}

pub(crate) fn decode(record: &RawRecord) -> Decoded {
    let Some(product) = first_product(record) else {
        return Decoded::Drop(DropReason::FilteredOut);
    };

    let industry_name = product
        .get("industry_name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty());
    if industry_name.is_some_and(|name| name.contains("Cosmetic")) {
        return Decoded::Drop(DropReason::FilteredOut);
    }

    let Some(native_id) = str_field(record, "report_number") else {
        return Decoded::Drop(DropReason::MissingNativeId);
    };

    let mut rec = HarmonizedRecord::new(Source::Caers, native_id);
    rec.raw_date = str_field(record, "date_created");
    rec.product_text = product
        .get("name_brand")
        .and_then(Value::as_str)
        .map(|s| clip(s, 200));

    let consumer = record.get("consumer").and_then(Value::as_object);
    let outcomes = string_list(record.get("outcomes"));
    let reaction_count = record
        .get("reactions")
        .and_then(Value::as_array)
        .map_or(0, |r| r.len() as i64);

    rec.adverse_event = Some(AdverseEventDetail {
        industry_code: product
            .get("industry_code")
            .and_then(Value::as_str)
            .map(str::to_string),
        industry_category: industry_name.map(str::to_string),
        consumer_age_years: consumer.and_then(age_in_years),
        consumer_gender: consumer
            .and_then(|c| c.get("gender"))
            .and_then(Value::as_str)
            .map(str::to_string),
        outcomes,
        reaction_count,
    });
    Decoded::Keep(rec)
}

fn first_product(record: &RawRecord) -> Option<&serde_json::Map<String, Value>> {
    record
        .get("products")?
        .as_array()?
        .first()?
        .as_object()
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Converts the mixed-unit consumer age to whole years. Month and day
/// units divide down; non-positive results are null.
fn age_in_years(consumer: &serde_json::Map<String, Value>) -> Option<i64> {
    let age: f64 = match consumer.get("age")? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    let unit = consumer
        .get("age_unit")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_lowercase();

    let years = if unit.contains("month") {
        age / 12.0
    } else if unit.contains("day") {
        age / 365.0
    } else {
        age
    };
    // Truncate first so a fractional year (e.g. 3 months) nulls out
    let whole = years as i64;
    (whole > 0).then_some(whole)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn raw(value: serde_json::Value) -> RawRecord {
        value.as_object().unwrap().clone()
    }

    fn report_record() -> RawRecord {
        raw(json!({
            "report_number": "2024-CFS-001234",
            "date_created": "20240115",
            "products": [
                {
                    "industry_name": "Vit/Min/Prot/Unconv Diet(Human/Animal)",
                    "industry_code": "54",
                    "name_brand": "MEGA ENERGY BOOST"
                },
                {"industry_name": "Soft Drink/Water", "industry_code": "29"}
            ],
            "consumer": {"age": "34", "age_unit": "year(s)", "gender": "F"},
            "outcomes": ["Hospitalization", "Visited Emergency Room"],
            "reactions": ["NAUSEA", "VOMITING", "DIZZINESS"]
        }))
    }

    #[test]
    fn test_decodes_report_from_first_product() {
        let Decoded::Keep(rec) = decode(&report_record()) else {
            panic!("expected keep");
        };
        assert_eq!(rec.native_id, "2024-CFS-001234");
        assert_eq!(rec.raw_date.as_deref(), Some("20240115"));
        assert_eq!(rec.product_text.as_deref(), Some("MEGA ENERGY BOOST"));

        let detail = rec.adverse_event.unwrap();
        assert_eq!(detail.industry_code.as_deref(), Some("54"));
        assert_eq!(
            detail.industry_category.as_deref(),
            Some("Vit/Min/Prot/Unconv Diet(Human/Animal)")
        );
        assert_eq!(detail.consumer_age_years, Some(34));
        assert_eq!(detail.consumer_gender.as_deref(), Some("F"));
        assert_eq!(detail.outcomes.len(), 2);
        assert_eq!(detail.reaction_count, 3);
    }

    #[test]
    fn test_cosmetic_reports_are_filtered() {
        let mut record = report_record();
        record.insert(
            "products".into(),
            json!([{"industry_name": "Cosmetics", "industry_code": "53"}]),
        );
        assert!(matches!(
            decode(&record),
            Decoded::Drop(DropReason::FilteredOut)
        ));
    }

    #[test]
    fn test_productless_reports_are_filtered() {
        let mut record = report_record();
        record.insert("products".into(), json!([]));
        assert!(matches!(
            decode(&record),
            Decoded::Drop(DropReason::FilteredOut)
        ));
    }

    #[test]
    fn test_missing_report_number_is_dropped() {
        let mut record = report_record();
        record.remove("report_number");
        assert!(matches!(
            decode(&record),
            Decoded::Drop(DropReason::MissingNativeId)
        ));
    }

    #[test]
    fn test_age_unit_conversion() {
        let months = json!({"age": "18", "age_unit": "month(s)"});
        assert_eq!(age_in_years(months.as_object().unwrap()), Some(1));

        let days = json!({"age": 400, "age_unit": "day(s)"});
        assert_eq!(age_in_years(days.as_object().unwrap()), Some(1));

        // Under one year truncates to zero, which is null
        let newborn = json!({"age": "3", "age_unit": "month(s)"});
        assert_eq!(age_in_years(newborn.as_object().unwrap()), None);

        let bad = json!({"age": "unknown", "age_unit": "year(s)"});
        assert_eq!(age_in_years(bad.as_object().unwrap()), None);
    }

    #[test_case(Some("Fishery/Seafood Prod"), "Seafood")]
    #[test_case(Some("Ice Cream Prod"), "Dairy")]
    #[test_case(Some("Unheard Of Category"), "Other")]
    #[test_case(None, "Other")]
    fn test_industry_product_type(category: Option<&str>, expected: &str) {
        assert_eq!(product_type_for_industry(category), expected);
    }
}
