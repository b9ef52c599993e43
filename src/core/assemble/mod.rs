//! Star-schema assembly
//!
//! Consumes the harmonized records, deduplicates on (source, native id)
//! with first occurrence winning, resolves every dimension reference
//! through the memoizing [`store`], and emits the five fact tables.
//! Record processing order is the input order, so surrogate keys and row
//! order are identical across runs over the same input.

pub mod store;
pub mod summary;

pub use store::{
    ClassificationAttrs, CompanyAttrs, DimensionStore, GeographyAttrs, ProductAttrs, SurrogateMap,
};
pub use summary::{BuildSummary, SourceCounts};

use crate::config::RulesConfig;
use crate::core::classify::Classifier;
use crate::core::dates::{build_dim_date, date_key, in_calendar_span, iso_date, parse_native_date};
use crate::core::geography;
use crate::core::normalize::caers::product_type_for_industry;
use crate::core::normalize::fsis::{SpeciesSummary, YearlyTotal};
use crate::core::normalize::NormalizedBatch;
use crate::core::severity::{self, format_us_class, normalize_notification_type};
use crate::domain::tables::{
    DimClassificationRow, DimCompanyRow, DimGeographyRow, DimProductRow, FactAdverseEventRow,
    FactFsisSpeciesRow, FactHealthImpactRow, FactRecallRow, FactYearlySummaryRow, StarSchema,
};
use crate::domain::{HarmonizedRecord, Source};
use chrono::Datelike;
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Everything the assembler consumes for one run.
#[derive(Debug, Clone, Default)]
pub struct AssembleInput {
    pub batches: Vec<NormalizedBatch>,
    /// FSIS per-species summary rows
    pub species_summary: Vec<SpeciesSummary>,
    /// FSIS yearly totals for years without detail records
    pub yearly_totals: Vec<YearlyTotal>,
}

/// The assembled schema plus cross-batch duplicate counts per source.
#[derive(Debug, Clone)]
pub struct Assembled {
    pub schema: StarSchema,
    pub duplicates: BTreeMap<Source, u64>,
}

pub struct Assembler<'a> {
    rules: &'a RulesConfig,
    classifier: Classifier,
    store: DimensionStore,
    duplicates: BTreeMap<Source, u64>,
}

impl<'a> Assembler<'a> {
    pub fn new(rules: &'a RulesConfig) -> Self {
        Self {
            rules,
            classifier: Classifier::new(&rules.classify),
            store: DimensionStore::new(),
            duplicates: BTreeMap::new(),
        }
    }

    /// Assembles the full star schema. Consumes the assembler: the key
    /// store is run-scoped by construction.
    pub fn assemble(mut self, input: AssembleInput) -> Assembled {
        let mut schema = StarSchema {
            dim_date: build_dim_date(&self.rules.calendar),
            ..StarSchema::default()
        };

        let mut seen: HashSet<(Source, String)> = HashSet::new();
        for batch in &input.batches {
            for record in &batch.records {
                if !seen.insert((record.source, record.native_id.clone())) {
                    *self.duplicates.entry(record.source).or_insert(0) += 1;
                    debug!(source = %record.source, id = %record.native_id, "duplicate dropped");
                    continue;
                }
                match record.source {
                    Source::Fda | Source::Fsis | Source::Rasff | Source::UkFsa => {
                        let key = schema.fact_recalls.len() as u32 + 1;
                        schema.fact_recalls.push(self.recall_row(key, record));
                    }
                    Source::CdcNors => {
                        let key = schema.fact_health_impact.len() as u32 + 1;
                        schema.fact_health_impact.push(self.health_impact_row(key, record));
                    }
                    Source::Caers => {
                        let key = schema.fact_adverse_events.len() as u32 + 1;
                        schema.fact_adverse_events.push(self.adverse_event_row(key, record));
                    }
                }
            }
        }

        schema.fact_fsis_species = species_rows(&input.species_summary);
        schema.fact_yearly_summary = self.yearly_summary(&schema.fact_recalls, &input.yearly_totals);
        self.build_dimensions(&mut schema);

        Assembled {
            schema,
            duplicates: self.duplicates,
        }
    }

    fn recall_row(&mut self, key: u32, rec: &HarmonizedRecord) -> FactRecallRow {
        let parsed = rec.raw_date.as_deref().and_then(parse_native_date);
        let (recall_date, dkey) = match parsed {
            Some(date) => {
                let k = date_key(date);
                (
                    Some(iso_date(date)),
                    in_calendar_span(&self.rules.calendar, k).then_some(k),
                )
            }
            None => (None, None),
        };

        let country = rec
            .country_text
            .as_deref()
            .and_then(geography::canonical_country_name)
            .unwrap_or_else(|| "Unknown".to_string());
        let state = match rec.source {
            Source::Fda => rec.state_text.clone(),
            _ => None,
        };
        let geo_attrs = GeographyAttrs {
            country: country.clone(),
            state,
        };
        let geography_key = self.store.geography.resolve(geo_attrs);

        // Origin is resolved country-only; a US origin on an FDA record
        // reuses the recall geography so the state detail is kept
        let origin_geography_key = rec
            .origin_country_text
            .as_deref()
            .filter(|o| !geography::is_country_list(o))
            .and_then(geography::canonical_country_name)
            .map(|origin| {
                if rec.source == Source::Fda && origin == "United States" {
                    geography_key
                } else {
                    self.store.geography.resolve(GeographyAttrs::country(&origin))
                }
            });

        let original = match rec.source {
            Source::Fda | Source::Fsis => {
                rec.native_severity_code.as_deref().map(format_us_class)
            }
            _ => rec.native_notification_type.clone(),
        };
        let classification_key = self.store.classification.resolve(ClassificationAttrs {
            source: rec.source,
            original,
            risk_decision: rec.native_risk_decision.clone(),
        });

        let product_name = rec
            .product_text
            .clone()
            .unwrap_or_else(|| "Unknown".to_string());
        let product_category = rec.product_category_text.clone().or_else(|| {
            rec.product_text
                .as_deref()
                .map(|desc| self.classifier.categorize_product(desc))
        });
        let product_key = self.store.product.resolve(ProductAttrs {
            source: rec.source,
            name: product_name,
            category: product_category,
        });

        let company_attrs = match &rec.company_text {
            Some(name) => CompanyAttrs {
                name: name.clone(),
                city: rec.company_city.clone(),
                state: rec.state_text.clone(),
                country: Some(country),
            },
            None => CompanyAttrs::unknown(),
        };
        let company_key = self.store.company.resolve(company_attrs);

        let classification = self.classifier.classify(rec.reason_text.as_deref());

        FactRecallRow {
            recall_key: key,
            recall_id: rec.native_id.clone(),
            event_id: rec.event_id.clone(),
            recall_date,
            source: rec.source.as_str().to_string(),
            geography_key,
            origin_geography_key,
            classification_key,
            product_key,
            company_key,
            date_key: dkey,
            reason_for_recall: rec.reason_text.clone(),
            recall_category: classification.category,
            recall_group: classification.group,
            recall_subgroup: classification.subgroup,
            distribution_scope: rec.distribution_text.clone(),
            action_taken: rec.action_text.clone(),
        }
    }

    fn health_impact_row(&self, key: u32, rec: &HarmonizedRecord) -> FactHealthImpactRow {
        let impact = rec.health_impact.clone().unwrap_or_default();

        // Outbreaks carry year/month granularity; the date key anchors to
        // the first of the month
        let dkey = impact
            .year
            .filter(|y| *y > 0)
            .map(|y| y as u32 * 10_000 + impact.month.unwrap_or(1) * 100 + 1)
            .filter(|k| in_calendar_span(&self.rules.calendar, *k));

        FactHealthImpactRow {
            health_impact_key: key,
            outbreak_id: rec.native_id.clone(),
            year: impact.year,
            month: impact.month,
            date_key: dkey,
            state: rec.state_text.clone(),
            illnesses: impact.illnesses.unwrap_or(0),
            hospitalizations: impact.hospitalizations.unwrap_or(0),
            deaths: impact.deaths.unwrap_or(0),
            pathogen: impact.pathogen,
            serotype: impact.serotype,
            food_vehicle: impact.food_vehicle,
            ifsac_category: impact.ifsac_category,
            setting: impact.setting,
            primary_mode: impact.primary_mode,
        }
    }

    fn adverse_event_row(&self, key: u32, rec: &HarmonizedRecord) -> FactAdverseEventRow {
        let detail = rec.adverse_event.clone().unwrap_or_default();
        let parsed = rec.raw_date.as_deref().and_then(parse_native_date);
        let dkey = parsed
            .map(date_key)
            .filter(|k| in_calendar_span(&self.rules.calendar, *k));
        let has = |label: &str| detail.outcomes.iter().any(|o| o == label);

        FactAdverseEventRow {
            adverse_event_key: key,
            report_number: rec.native_id.clone(),
            date_key: dkey,
            year: parsed.map(|d| d.year()),
            month: parsed.map(|d| d.month()),
            industry_code: detail.industry_code.clone(),
            industry_category: detail.industry_category.clone(),
            product_type: product_type_for_industry(detail.industry_category.as_deref())
                .to_string(),
            product_name: rec.product_text.clone(),
            consumer_age: detail.consumer_age_years,
            consumer_gender: detail.consumer_gender.clone(),
            has_hospitalization: has("Hospitalization"),
            has_emergency_room: has("Visited Emergency Room"),
            has_death: has("Death"),
            has_life_threatening: has("Life Threatening"),
            has_disability: has("Disability"),
            has_allergic_reaction: has("Allergic Reaction"),
            has_healthcare_visit: has("Visited a Health Care Provider"),
            reaction_count: detail.reaction_count,
            outcome_count: detail.outcomes.len() as i64,
        }
    }

    /// Aggregates fact_recalls by (year, source, classification triple),
    /// then swaps detail-level FSIS years for the official yearly totals
    /// where those exist (the totals floor year and later). Summary-only
    /// rows carry the `Summary Only` classification.
    fn yearly_summary(
        &self,
        fact_recalls: &[FactRecallRow],
        totals: &[YearlyTotal],
    ) -> Vec<FactYearlySummaryRow> {
        type GroupKey = (i32, String, String, String, String);
        let mut agg: BTreeMap<GroupKey, i64> = BTreeMap::new();
        for row in fact_recalls {
            let Some(dkey) = row.date_key else { continue };
            let year = (dkey / 10_000) as i32;
            *agg.entry((
                year,
                row.source.clone(),
                row.recall_category.clone(),
                row.recall_group.clone(),
                row.recall_subgroup.clone(),
            ))
            .or_insert(0) += 1;
        }

        let totals_floor = totals.iter().map(|t| t.year).min();
        let mut rows: Vec<(GroupKey, i64, Option<i64>)> = agg
            .into_iter()
            .filter(|((year, source, _, _, _), _)| {
                totals_floor.map_or(true, |floor| !(source == "FSIS" && *year >= floor))
            })
            .map(|(group, count)| (group, count, None))
            .collect();

        for total in totals {
            rows.push((
                (
                    total.year,
                    Source::Fsis.as_str().to_string(),
                    "Summary Only".to_string(),
                    "Summary Only".to_string(),
                    "Summary Only".to_string(),
                ),
                total.recall_count,
                total.pounds_recalled,
            ));
        }

        rows.sort_by(|a, b| a.0.cmp(&b.0));
        rows.retain(|((year, _, _, _, _), _, _)| {
            *year >= self.rules.calendar.start_year && *year <= self.rules.calendar.end_year
        });

        rows.into_iter()
            .enumerate()
            .map(|(i, ((year, source, category, group, subgroup), count, pounds))| {
                FactYearlySummaryRow {
                    yearly_summary_key: i as u32 + 1,
                    year,
                    source,
                    recall_category: category,
                    recall_group: group,
                    recall_subgroup: subgroup,
                    recall_count: count,
                    pounds_recalled: pounds,
                }
            })
            .collect()
    }

    fn build_dimensions(&self, schema: &mut StarSchema) {
        schema.dim_geography = self
            .store
            .geography
            .iter()
            .map(|(key, attrs)| {
                let geo = geography::resolve_canonical(&attrs.country);
                DimGeographyRow {
                    geography_key: key,
                    country: attrs.country.clone(),
                    country_code: geo.country_code,
                    state: attrs.state.clone(),
                    region: geo.region.as_str().to_string(),
                    is_eu_member: geo.is_eu_member,
                    is_efta: geo.is_efta,
                }
            })
            .collect();

        schema.dim_classification = self
            .store
            .classification
            .iter()
            .map(|(key, attrs)| {
                let sev = severity::unify(
                    &self.rules.severity,
                    attrs.source,
                    attrs.original.as_deref(),
                    attrs.risk_decision.as_deref(),
                    attrs.original.as_deref(),
                );
                let usa_class_level = match attrs.source {
                    Source::Fda | Source::Fsis => attrs.original.clone(),
                    _ => None,
                };
                let notification_type = match attrs.source {
                    Source::Rasff => attrs
                        .original
                        .as_deref()
                        .map(normalize_notification_type),
                    Source::UkFsa => attrs.original.clone(),
                    _ => None,
                };
                DimClassificationRow {
                    classification_key: key,
                    source: attrs.source.as_str().to_string(),
                    original_classification: attrs.original.clone(),
                    usa_class_level,
                    notification_type,
                    risk_decision: attrs.risk_decision.clone(),
                    severity_level: sev.level.to_string(),
                    severity_score: sev.score,
                }
            })
            .collect();

        schema.dim_product = self
            .store
            .product
            .iter()
            .map(|(key, attrs)| DimProductRow {
                product_key: key,
                product_name: attrs.name.clone(),
                product_category: attrs.category.clone(),
                product_type: self
                    .classifier
                    .product_type_for(attrs.category.as_deref().unwrap_or("")),
            })
            .collect();

        schema.dim_company = self
            .store
            .company
            .iter()
            .map(|(key, attrs)| DimCompanyRow {
                company_key: key,
                company_name: attrs.name.clone(),
                city: attrs.city.clone(),
                state: attrs.state.clone(),
                country: attrs.country.clone(),
                establishment_number: None,
            })
            .collect();
    }
}

fn species_rows(summary: &[SpeciesSummary]) -> Vec<FactFsisSpeciesRow> {
    summary
        .iter()
        .enumerate()
        .map(|(i, cell)| FactFsisSpeciesRow {
            fsis_species_key: i as u32 + 1,
            year: cell.year,
            species: cell.species.clone(),
            recall_count: cell.recall_count,
            pounds_recalled: cell.pounds_recalled,
        })
        .collect()
}
