//! End-to-end pipeline tests over the public API

use serde_json::json;
use starling::config::RulesConfig;
use starling::core::normalize::SourceBatch;
use starling::core::pipeline::{HarmonizationPipeline, PipelineInput};
use starling::domain::{DropReason, HarmonizerError, RasffSchema, Source};

fn pipeline() -> HarmonizationPipeline {
    HarmonizationPipeline::new(RulesConfig::default())
}

fn batch(source: Source, records: serde_json::Value) -> SourceBatch {
    SourceBatch::from_json_str(source, &records.to_string()).unwrap()
}

fn fda_record(number: &str, reason: &str) -> serde_json::Value {
    json!({
        "recall_number": number,
        "product_type": "Food",
        "recall_initiation_date": "20240115",
        "state": "CA",
        "country": "United States",
        "classification": "Class I",
        "product_description": "Ready-to-eat smoked salmon",
        "recalling_firm": "Pacific Smokehouse",
        "city": "Seattle",
        "reason_for_recall": reason,
        "distribution_pattern": "Nationwide"
    })
}

fn rasff_record(reference: &str, notifying: &str, hazards: &str) -> serde_json::Value {
    json!({
        "reference": reference,
        "date": "15-01-2024 10:30:00",
        "notifying_country": notifying,
        "origin": "Spain",
        "type": "food",
        "classification": "alert notification",
        "risk_decision": "serious",
        "subject": "smoked salmon from Spain",
        "category": "fish and fish products",
        "hazards": hazards
    })
}

#[test]
fn test_listeria_converges_across_fda_and_rasff() {
    let input = PipelineInput {
        batches: vec![
            batch(
                Source::Fda,
                json!([fda_record("F-0001-2024", "Possible Listeria monocytogenes contamination")]),
            ),
            batch(
                Source::Rasff,
                json!([rasff_record(
                    "2024.0456",
                    "Netherlands",
                    "Listeria monocytogenes - {pathogenic micro-organisms}"
                )]),
            ),
        ],
        ..PipelineInput::default()
    };
    let output = pipeline().run(input).unwrap();

    assert_eq!(output.schema.fact_recalls.len(), 2);
    for row in &output.schema.fact_recalls {
        assert_eq!(row.recall_category, "Product Contaminant");
        assert_eq!(row.recall_group, "Biological Contamination");
        assert_eq!(row.recall_subgroup, "Listeria monocytogenes");

        // Class I and a serious risk decision both land on High severity
        let dim = output
            .schema
            .dim_classification
            .iter()
            .find(|c| c.classification_key == row.classification_key)
            .unwrap();
        assert_eq!(dim.severity_level, "High");
        assert_eq!(dim.severity_score, 10);
    }

    assert_eq!(output.summary.rasff_schema, Some(RasffSchema::Current));
    output.validation.ensure_integrity().unwrap();
}

#[test]
fn test_country_spellings_share_one_geography_row() {
    let input = PipelineInput {
        batches: vec![batch(
            Source::Rasff,
            json!([
                rasff_record("2024.0001", "THE NETHERLANDS", "salmonella - {pathogenic micro-organisms}"),
                rasff_record("2024.0002", "Netherlands", "salmonella - {pathogenic micro-organisms}"),
            ]),
        )],
        ..PipelineInput::default()
    };
    let output = pipeline().run(input).unwrap();

    let rows = &output.schema.fact_recalls;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].geography_key, rows[1].geography_key);

    let netherlands: Vec<_> = output
        .schema
        .dim_geography
        .iter()
        .filter(|g| g.country == "Netherlands")
        .collect();
    assert_eq!(netherlands.len(), 1);
    assert!(netherlands[0].is_eu_member);
    assert_eq!(netherlands[0].region, "EU");
}

#[test]
fn test_duplicate_native_ids_first_occurrence_wins() {
    let input = PipelineInput {
        batches: vec![
            batch(Source::Fda, json!([fda_record("F-0001-2024", "first reason")])),
            batch(Source::Fda, json!([fda_record("F-0001-2024", "second reason")])),
        ],
        ..PipelineInput::default()
    };
    let output = pipeline().run(input).unwrap();

    assert_eq!(output.schema.fact_recalls.len(), 1);
    assert_eq!(
        output.schema.fact_recalls[0].reason_for_recall.as_deref(),
        Some("first reason")
    );

    let counts = &output.summary.sources[&Source::Fda];
    assert_eq!(counts.input, 2);
    assert_eq!(counts.kept, 1);
    assert_eq!(counts.dropped[&DropReason::Duplicate], 1);
}

#[test]
fn test_unparseable_date_keeps_row_with_null_date_key() {
    let input = PipelineInput {
        batches: vec![batch(
            Source::Fsis,
            json!([{
                "recall_number": "021-2024",
                "open_date": "pending",
                "class": "1",
                "product": "Raw ground beef",
                "species": "Beef",
                "problem_type": "Product Contamination"
            }]),
        )],
        ..PipelineInput::default()
    };
    let output = pipeline().run(input).unwrap();

    let row = &output.schema.fact_recalls[0];
    assert_eq!(row.date_key, None);
    assert_eq!(row.recall_date, None);
    // a null key is never an orphan
    output.validation.ensure_integrity().unwrap();
}

#[test]
fn test_out_of_span_date_keeps_iso_text_but_nulls_key() {
    let mut record = fda_record("F-0002-2024", "undeclared milk");
    record["recall_initiation_date"] = json!("20050601");
    let input = PipelineInput {
        batches: vec![batch(Source::Fda, json!([record]))],
        ..PipelineInput::default()
    };
    let output = pipeline().run(input).unwrap();

    let row = &output.schema.fact_recalls[0];
    assert_eq!(row.recall_date.as_deref(), Some("2005-06-01"));
    assert_eq!(row.date_key, None);
    output.validation.ensure_integrity().unwrap();
}

#[test]
fn test_unrecognized_rasff_export_aborts_the_run() {
    let input = PipelineInput {
        batches: vec![batch(
            Source::Rasff,
            json!([{"some_field": 1, "another_field": "x"}]),
        )],
        ..PipelineInput::default()
    };
    let err = pipeline().run(input).unwrap_err();
    assert!(matches!(
        err,
        HarmonizerError::SchemaVersionUnrecognized { data_source: Source::Rasff, .. }
    ));
}

#[test]
fn test_legacy_and_current_rasff_eras_converge() {
    let legacy = batch(
        Source::Rasff,
        json!([{
            "REFERENCE": "2019.1234",
            "Date": "2019-03-04",
            "notifying": "GERMANY",
            "origin": "TURKEY",
            "Type": "food",
            "type2": "alert",
            "subject": "aflatoxins in pistachios",
            "product category": "nuts, nut products and seeds",
            "substance/finding": "aflatoxins",
            "hazard category": "mycotoxins"
        }]),
    );
    let current = batch(
        Source::Rasff,
        json!([rasff_record("2024.0456", "Germany", "aflatoxins - {mycotoxins}")]),
    );

    let legacy_out = pipeline()
        .run(PipelineInput {
            batches: vec![legacy],
            ..PipelineInput::default()
        })
        .unwrap();
    let current_out = pipeline()
        .run(PipelineInput {
            batches: vec![current],
            ..PipelineInput::default()
        })
        .unwrap();

    assert_eq!(legacy_out.summary.rasff_schema, Some(RasffSchema::Legacy));
    assert_eq!(current_out.summary.rasff_schema, Some(RasffSchema::Current));

    let legacy_row = &legacy_out.schema.fact_recalls[0];
    let current_row = &current_out.schema.fact_recalls[0];
    assert_eq!(legacy_row.recall_group, "Chemical Contamination");
    assert_eq!(legacy_row.recall_group, current_row.recall_group);
    assert_eq!(legacy_row.recall_subgroup, current_row.recall_subgroup);
}

#[test]
fn test_cdc_outbreaks_route_to_health_impact() {
    let input = PipelineInput {
        batches: vec![batch(
            Source::CdcNors,
            json!([{
                "cdcid": "2019-12345",
                "year": 2019,
                "month": 7,
                "state": "Ohio",
                "primary_mode": "Food",
                "etiology": "Salmonella enterica",
                "illnesses": 45,
                "hospitalizations": 8,
                "deaths": 0,
                "food_vehicle": "shell eggs",
                "ifsac_category": "Eggs"
            }]),
        )],
        ..PipelineInput::default()
    };
    let output = pipeline().run(input).unwrap();

    assert!(output.schema.fact_recalls.is_empty());
    let row = &output.schema.fact_health_impact[0];
    assert_eq!(row.outbreak_id, "2019-12345");
    assert_eq!(row.date_key, Some(20190701));
    assert_eq!(row.illnesses, 45);
    assert_eq!(row.hospitalizations, 8);
    assert_eq!(row.deaths, 0);
    output.validation.ensure_integrity().unwrap();
}

#[test]
fn test_caers_reports_route_to_adverse_events() {
    let input = PipelineInput {
        batches: vec![batch(
            Source::Caers,
            json!([{
                "report_number": "2024-CFS-001234",
                "date_created": "01/15/2024",
                "products": [{
                    "name_brand": "MEGA ENERGY GUMMIES",
                    "industry_code": "54",
                    "industry_name": "Vit/Min/Prot/Unconv Diet(Human/Animal)"
                }],
                "consumer": {"age": 34, "age_unit": "year(s)", "gender": "Female"},
                "outcomes": ["Hospitalization", "Visited Emergency Room"],
                "reactions": ["NAUSEA", "VOMITING", "DIZZINESS"]
            }]),
        )],
        ..PipelineInput::default()
    };
    let output = pipeline().run(input).unwrap();

    let row = &output.schema.fact_adverse_events[0];
    assert_eq!(row.report_number, "2024-CFS-001234");
    assert_eq!(row.date_key, Some(20240115));
    assert_eq!(row.year, Some(2024));
    assert_eq!(row.product_type, "Supplement");
    assert!(row.has_hospitalization);
    assert!(row.has_emergency_room);
    assert!(!row.has_death);
    assert_eq!(row.reaction_count, 3);
    assert_eq!(row.outcome_count, 2);
    output.validation.ensure_integrity().unwrap();
}

#[test]
fn test_fsis_totals_replace_detail_years_in_yearly_summary() {
    let input = PipelineInput {
        batches: vec![
            batch(
                Source::Fsis,
                json!([{
                    "recall_number": "021-2024",
                    "open_date": "01/15/2024",
                    "class": "1",
                    "product": "Raw ground beef",
                    "species": "Beef",
                    "problem_type": "Product Contamination"
                }]),
            ),
            batch(Source::Fda, json!([fda_record("F-0001-2024", "undeclared milk")])),
        ],
        fsis_species_summary: vec![
            json!({"year": 2024, "species": "Beef", "recall_count": 12, "pounds_recalled": 50000})
                .as_object()
                .unwrap()
                .clone(),
        ],
        fsis_yearly_totals: vec![
            json!({"year": 2024, "recall_count": 65, "pounds_recalled": 2000000})
                .as_object()
                .unwrap()
                .clone(),
        ],
        ..PipelineInput::default()
    };
    let output = pipeline().run(input).unwrap();

    // the FSIS detail aggregate for 2024 yields to the official total
    let fsis_rows: Vec<_> = output
        .schema
        .fact_yearly_summary
        .iter()
        .filter(|r| r.source == "FSIS" && r.year == 2024)
        .collect();
    assert_eq!(fsis_rows.len(), 1);
    assert_eq!(fsis_rows[0].recall_category, "Summary Only");
    assert_eq!(fsis_rows[0].recall_count, 65);
    assert_eq!(fsis_rows[0].pounds_recalled, Some(2000000));

    // other sources keep their detail aggregates
    assert!(output
        .schema
        .fact_yearly_summary
        .iter()
        .any(|r| r.source == "FDA" && r.year == 2024 && r.pounds_recalled.is_none()));

    let species = &output.schema.fact_fsis_species[0];
    assert_eq!(species.year, 2024);
    assert_eq!(species.species, "Beef");
    assert_eq!(species.pounds_recalled, Some(50000));
}

#[test]
fn test_uk_fsa_alerts_enter_fact_recalls() {
    let input = PipelineInput {
        batches: vec![batch(
            Source::UkFsa,
            json!([{
                "notation": "FSA-PRIN-05-2024",
                "created": "2024-02-01T09:00:00",
                "shortTitle": "Chicken pasta salad",
                "type": ["http://data.food.gov.uk/food-alerts/def/PRIN"],
                "productDetails": [{"productName": "Chicken pasta salad 300g"}],
                "problem": [{"riskStatement": "Salmonella has been found in the product"}],
                "country": [{"label": "England"}, {"label": "Wales"}]
            }]),
        )],
        ..PipelineInput::default()
    };
    let output = pipeline().run(input).unwrap();

    let row = &output.schema.fact_recalls[0];
    assert_eq!(row.source, "UK_FSA");
    assert_eq!(row.recall_subgroup, "Salmonella");
    assert_eq!(row.distribution_scope.as_deref(), Some("England, Wales"));

    let dim = output
        .schema
        .dim_classification
        .iter()
        .find(|c| c.classification_key == row.classification_key)
        .unwrap();
    assert_eq!(dim.notification_type.as_deref(), Some("Product Recall"));
    assert_eq!(dim.severity_level, "High");
    assert_eq!(dim.severity_score, 9);

    let geo = output
        .schema
        .dim_geography
        .iter()
        .find(|g| g.geography_key == row.geography_key)
        .unwrap();
    assert_eq!(geo.country, "United Kingdom");
    assert_eq!(geo.region, "UK");
}

#[test]
fn test_full_run_accounting_and_validation() {
    let input = PipelineInput {
        batches: vec![
            batch(
                Source::Fda,
                json!([
                    fda_record("F-0001-2024", "Listeria monocytogenes"),
                    {"recall_number": "D-0002-2024", "product_type": "Drugs"},
                ]),
            ),
            batch(
                Source::Rasff,
                json!([
                    rasff_record("2024.0456", "Spain", "salmonella - {pathogenic micro-organisms}"),
                    {"reference": "2024.0457", "type": "feed", "hazards": "x"},
                ]),
            ),
        ],
        ..PipelineInput::default()
    };
    let output = pipeline().run(input).unwrap();

    let fda = &output.summary.sources[&Source::Fda];
    assert_eq!(fda.input, 2);
    assert_eq!(fda.kept, 1);
    assert_eq!(fda.dropped[&DropReason::FilteredOut], 1);

    let rasff = &output.summary.sources[&Source::Rasff];
    assert_eq!(rasff.kept, 1);
    assert_eq!(rasff.dropped[&DropReason::FilteredOut], 1);

    assert_eq!(output.summary.total_kept(), 2);
    assert_eq!(output.summary.total_dropped(), 2);
    assert_eq!(output.summary.table_rows["fact_recalls"], 2);

    assert!(output.validation.is_clean());
    assert_eq!(output.validation.orphan_total(), 0);
}
