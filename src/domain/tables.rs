//! Star-schema row types
//!
//! Five dimension tables and five fact tables, all plain serializable row
//! structs. Column names follow the warehouse convention (PascalCase) via
//! serde renames so an external export collaborator can write them out
//! without a mapping layer.
//!
//! Nullability contract: every column that may be null in source data is
//! an `Option`. Downstream columnar formats store nullable integers as
//! floating point, so nullable numeric columns here are explicit
//! `Option<i64>`/`Option<u32>` rather than sentinel zeros - the exporter
//! must preserve the null, not coerce it. Date columns are ISO calendar
//! date text (not binary date types) for external-table compatibility.
//! Surrogate key columns are non-null positive integers, unique within
//! their table.

use serde::Serialize;

/// One calendar day in the supported span. Precomputed for every day
/// regardless of whether any record references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimDateRow {
    /// `YYYYMMDD` as integer; uniquely identifies exactly one row
    #[serde(rename = "DateKey")]
    pub date_key: u32,
    /// ISO calendar date text
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Year")]
    pub year: i32,
    /// Regulatory fiscal year; FY N runs October N-1 through September N
    #[serde(rename = "FiscalYear")]
    pub fiscal_year: i32,
    #[serde(rename = "Quarter")]
    pub quarter: u32,
    /// Fiscal quarter on the October-September cycle (Q1 = Oct-Dec)
    #[serde(rename = "FiscalQuarter")]
    pub fiscal_quarter: u32,
    #[serde(rename = "Month")]
    pub month: u32,
    #[serde(rename = "MonthName")]
    pub month_name: String,
    #[serde(rename = "Day")]
    pub day: u32,
    /// 1 = Monday
    #[serde(rename = "DayOfWeek")]
    pub day_of_week: u32,
    #[serde(rename = "DayName")]
    pub day_name: String,
    /// ISO week number
    #[serde(rename = "WeekOfYear")]
    pub week_of_year: u32,
}

/// One distinct (Country, State, Region) combination.
///
/// `is_eu_member` and `is_efta` are mutually exclusive or both false,
/// never both true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimGeographyRow {
    #[serde(rename = "GeographyKey")]
    pub geography_key: u32,
    #[serde(rename = "Country")]
    pub country: String,
    /// ISO-ish country code where known (`USA`, `GBR`), else null
    #[serde(rename = "CountryCode")]
    pub country_code: Option<String>,
    /// US state for FDA rows; null elsewhere
    #[serde(rename = "State")]
    pub state: Option<String>,
    /// `USA`, `EU`, `EFTA`, `UK`, or `Other`
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "IsEUMember")]
    pub is_eu_member: bool,
    #[serde(rename = "IsEFTA")]
    pub is_efta: bool,
}

/// One distinct (Source, OriginalClassification, RiskDecision) combination
/// with the unified severity attached.
///
/// `severity_score` is an integer in `1..=10`, monotonic with the level
/// ordering Undecided < Low < Medium < High.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimClassificationRow {
    #[serde(rename = "ClassificationKey")]
    pub classification_key: u32,
    #[serde(rename = "Source")]
    pub source: String,
    /// Native classification string exactly as shipped
    #[serde(rename = "OriginalClassification")]
    pub original_classification: Option<String>,
    /// `Class I|II|III` for the US sources; null elsewhere
    #[serde(rename = "USAClassLevel")]
    pub usa_class_level: Option<String>,
    /// Notification/alert type, normalized to the current RASFF vocabulary
    #[serde(rename = "NotificationType")]
    pub notification_type: Option<String>,
    /// RASFF risk-decision string where present
    #[serde(rename = "RiskDecision")]
    pub risk_decision: Option<String>,
    /// `High`, `Medium`, `Low`, or `Undecided`
    #[serde(rename = "SeverityLevel")]
    pub severity_level: String,
    #[serde(rename = "SeverityScore")]
    pub severity_score: u8,
}

/// One distinct per-source product identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimProductRow {
    #[serde(rename = "ProductKey")]
    pub product_key: u32,
    #[serde(rename = "ProductName")]
    pub product_name: String,
    /// Keyword-derived or source-native category
    #[serde(rename = "ProductCategory")]
    pub product_category: Option<String>,
    /// Broad analytical grouping derived from the category
    #[serde(rename = "ProductType")]
    pub product_type: String,
}

/// One distinct normalized company identity (name + location).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimCompanyRow {
    #[serde(rename = "CompanyKey")]
    pub company_key: u32,
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    /// Regulatory establishment number where known
    #[serde(rename = "EstablishmentNumber")]
    pub establishment_number: Option<String>,
}

/// One recall event (FDA, FSIS, RASFF, UK FSA) with resolved foreign keys.
///
/// Carries dual geography keys: `geography_key` is the reporting location,
/// `origin_geography_key` the product origin; they are resolved
/// independently and may differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactRecallRow {
    #[serde(rename = "RecallKey")]
    pub recall_key: u32,
    /// Source-native recall identifier
    #[serde(rename = "RecallID")]
    pub recall_id: String,
    /// Source-native event grouping id where the source has one
    #[serde(rename = "EventID")]
    pub event_id: Option<String>,
    /// ISO calendar date text; null when the native date was unparseable
    #[serde(rename = "RecallDate")]
    pub recall_date: Option<String>,
    #[serde(rename = "Source")]
    pub source: String,
    /// Reporting-location geography
    #[serde(rename = "GeographyKey")]
    pub geography_key: u32,
    /// Product-origin geography; null when the source carries none
    #[serde(rename = "OriginGeographyKey")]
    pub origin_geography_key: Option<u32>,
    #[serde(rename = "ClassificationKey")]
    pub classification_key: u32,
    #[serde(rename = "ProductKey")]
    pub product_key: u32,
    #[serde(rename = "CompanyKey")]
    pub company_key: u32,
    /// Null when the native date was unparseable or outside the calendar
    #[serde(rename = "DateKey")]
    pub date_key: Option<u32>,
    #[serde(rename = "ReasonForRecall")]
    pub reason_for_recall: Option<String>,
    /// `Product Contaminant` or `Process Issue`
    #[serde(rename = "RecallCategory")]
    pub recall_category: String,
    #[serde(rename = "RecallGroup")]
    pub recall_group: String,
    #[serde(rename = "RecallSubgroup")]
    pub recall_subgroup: String,
    #[serde(rename = "DistributionScope")]
    pub distribution_scope: Option<String>,
    #[serde(rename = "ActionTaken")]
    pub action_taken: Option<String>,
}

/// One CDC NORS foodborne outbreak with its health-impact counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactHealthImpactRow {
    #[serde(rename = "HealthImpactKey")]
    pub health_impact_key: u32,
    #[serde(rename = "OutbreakID")]
    pub outbreak_id: String,
    #[serde(rename = "Year")]
    pub year: Option<i32>,
    #[serde(rename = "Month")]
    pub month: Option<u32>,
    /// First day of the outbreak month; null when the year is missing
    #[serde(rename = "DateKey")]
    pub date_key: Option<u32>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "Illnesses")]
    pub illnesses: i64,
    #[serde(rename = "Hospitalizations")]
    pub hospitalizations: i64,
    #[serde(rename = "Deaths")]
    pub deaths: i64,
    #[serde(rename = "Pathogen")]
    pub pathogen: Option<String>,
    #[serde(rename = "Serotype")]
    pub serotype: Option<String>,
    #[serde(rename = "FoodVehicle")]
    pub food_vehicle: Option<String>,
    #[serde(rename = "IFSACCategory")]
    pub ifsac_category: Option<String>,
    #[serde(rename = "Setting")]
    pub setting: Option<String>,
    #[serde(rename = "PrimaryMode")]
    pub primary_mode: Option<String>,
}

/// One CAERS adverse-event report, filtered to food products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactAdverseEventRow {
    #[serde(rename = "AdverseEventKey")]
    pub adverse_event_key: u32,
    #[serde(rename = "ReportNumber")]
    pub report_number: String,
    #[serde(rename = "DateKey")]
    pub date_key: Option<u32>,
    #[serde(rename = "Year")]
    pub year: Option<i32>,
    #[serde(rename = "Month")]
    pub month: Option<u32>,
    #[serde(rename = "IndustryCode")]
    pub industry_code: Option<String>,
    #[serde(rename = "IndustryCategory")]
    pub industry_category: Option<String>,
    #[serde(rename = "ProductType")]
    pub product_type: String,
    #[serde(rename = "ProductName")]
    pub product_name: Option<String>,
    #[serde(rename = "ConsumerAge")]
    pub consumer_age: Option<i64>,
    #[serde(rename = "ConsumerGender")]
    pub consumer_gender: Option<String>,
    #[serde(rename = "HasHospitalization")]
    pub has_hospitalization: bool,
    #[serde(rename = "HasEmergencyRoom")]
    pub has_emergency_room: bool,
    #[serde(rename = "HasDeath")]
    pub has_death: bool,
    #[serde(rename = "HasLifeThreatening")]
    pub has_life_threatening: bool,
    #[serde(rename = "HasDisability")]
    pub has_disability: bool,
    #[serde(rename = "HasAllergicReaction")]
    pub has_allergic_reaction: bool,
    #[serde(rename = "HasHealthcareVisit")]
    pub has_healthcare_visit: bool,
    #[serde(rename = "ReactionCount")]
    pub reaction_count: i64,
    #[serde(rename = "OutcomeCount")]
    pub outcome_count: i64,
}

/// One (year, species) FSIS recall summary cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactFsisSpeciesRow {
    #[serde(rename = "FsisSpeciesKey")]
    pub fsis_species_key: u32,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Species")]
    pub species: String,
    #[serde(rename = "RecallCount")]
    pub recall_count: i64,
    /// Null when the source sheet carried no positive figure
    #[serde(rename = "PoundsRecalled")]
    pub pounds_recalled: Option<i64>,
}

/// One (year, source, classification triple) recall aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FactYearlySummaryRow {
    #[serde(rename = "YearlySummaryKey")]
    pub yearly_summary_key: u32,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "RecallCategory")]
    pub recall_category: String,
    #[serde(rename = "RecallGroup")]
    pub recall_group: String,
    #[serde(rename = "RecallSubgroup")]
    pub recall_subgroup: String,
    #[serde(rename = "RecallCount")]
    pub recall_count: i64,
    /// Only carried by FSIS summary-only rows
    #[serde(rename = "PoundsRecalled")]
    pub pounds_recalled: Option<i64>,
}

/// The assembled star schema: five dimensions, five facts. Rebuilt from
/// scratch on every run; rows are immutable once written.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StarSchema {
    pub dim_date: Vec<DimDateRow>,
    pub dim_geography: Vec<DimGeographyRow>,
    pub dim_classification: Vec<DimClassificationRow>,
    pub dim_product: Vec<DimProductRow>,
    pub dim_company: Vec<DimCompanyRow>,
    pub fact_recalls: Vec<FactRecallRow>,
    pub fact_health_impact: Vec<FactHealthImpactRow>,
    pub fact_adverse_events: Vec<FactAdverseEventRow>,
    pub fact_fsis_species: Vec<FactFsisSpeciesRow>,
    pub fact_yearly_summary: Vec<FactYearlySummaryRow>,
}
