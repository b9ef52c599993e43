//! The harmonized intermediate record
//!
//! [`HarmonizedRecord`] is the common shape every source batch is mapped
//! onto before key resolution. It is created once per input row by the
//! schema normalizer, is immutable afterwards, and is consumed exactly
//! once by the assembler. Fields a source does not carry are `None` - an
//! explicit missing marker, never an omitted field - so every record has
//! the complete, fixed field set.

use crate::domain::source::Source;

/// One input row after schema normalization, prior to key resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct HarmonizedRecord {
    /// Which regulatory source the row came from
    pub source: Source,
    /// Source-native recall/event/report identifier (mandatory; rows
    /// without one are dropped and counted upstream)
    pub native_id: String,
    /// Source-native event grouping id, where the source has one
    pub event_id: Option<String>,
    /// Raw date string as shipped by the source; parsed later by the
    /// date dimension builder
    pub raw_date: Option<String>,
    /// Free-text product description or name
    pub product_text: Option<String>,
    /// Source-native product category, where the source has one
    pub product_category_text: Option<String>,
    /// Recalling company name (FDA only in practice)
    pub company_text: Option<String>,
    /// Company city
    pub company_city: Option<String>,
    /// Free-text recall reason / hazard statement
    pub reason_text: Option<String>,
    /// Reporting-location country as free text
    pub country_text: Option<String>,
    /// Reporting-location state/subdivision as free text
    pub state_text: Option<String>,
    /// Product-origin country as free text; resolved to a geography key
    /// independently of the reporting location
    pub origin_country_text: Option<String>,
    /// Native severity/classification code (e.g. `Class I`)
    pub native_severity_code: Option<String>,
    /// Native risk-decision string (RASFF current era)
    pub native_risk_decision: Option<String>,
    /// Native notification/alert type string (RASFF, UK FSA)
    pub native_notification_type: Option<String>,
    /// Distribution scope text
    pub distribution_text: Option<String>,
    /// Action-taken text
    pub action_text: Option<String>,
    /// Outbreak health-impact block (CDC NORS)
    pub health_impact: Option<HealthImpact>,
    /// Adverse-event block (CAERS)
    pub adverse_event: Option<AdverseEventDetail>,
}

impl HarmonizedRecord {
    /// Creates a record with the mandatory identity set and every other
    /// field explicitly missing.
    pub fn new(source: Source, native_id: impl Into<String>) -> Self {
        Self {
            source,
            native_id: native_id.into(),
            event_id: None,
            raw_date: None,
            product_text: None,
            product_category_text: None,
            company_text: None,
            company_city: None,
            reason_text: None,
            country_text: None,
            state_text: None,
            origin_country_text: None,
            native_severity_code: None,
            native_risk_decision: None,
            native_notification_type: None,
            distribution_text: None,
            action_text: None,
            health_impact: None,
            adverse_event: None,
        }
    }
}

/// Health-impact counts attached to CDC NORS outbreak records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HealthImpact {
    /// Outbreak year as reported
    pub year: Option<i32>,
    /// Outbreak month as reported (1-12)
    pub month: Option<u32>,
    /// Estimated primary illnesses
    pub illnesses: Option<i64>,
    /// Hospitalizations
    pub hospitalizations: Option<i64>,
    /// Deaths
    pub deaths: Option<i64>,
    /// Confirmed/suspected etiology
    pub pathogen: Option<String>,
    /// Serotype or genotype detail
    pub serotype: Option<String>,
    /// Implicated food vehicle
    pub food_vehicle: Option<String>,
    /// IFSAC commodity category
    pub ifsac_category: Option<String>,
    /// Exposure setting
    pub setting: Option<String>,
    /// Primary transmission mode (always `Food` after filtering)
    pub primary_mode: Option<String>,
}

/// Adverse-event detail attached to CAERS reports.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdverseEventDetail {
    /// FDA industry code of the first reported product
    pub industry_code: Option<String>,
    /// FDA industry category name of the first reported product
    pub industry_category: Option<String>,
    /// Consumer age in whole years (months/days converted; non-positive
    /// ages are null)
    pub consumer_age_years: Option<i64>,
    /// Consumer gender as reported
    pub consumer_gender: Option<String>,
    /// Reported outcome labels (`Hospitalization`, `Death`, ...)
    pub outcomes: Vec<String>,
    /// Number of reported reactions
    pub reaction_count: i64,
}
