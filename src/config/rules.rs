//! Rule tables and thresholds
//!
//! [`RulesConfig`] is the run-scoped configuration the pipeline is built
//! from. Every section has a complete built-in default; a TOML file only
//! needs to name what it changes. Scores and thresholds are validated on
//! load so a bad table fails the run up front rather than producing a
//! quietly wrong schema.

use crate::core::severity::SeverityLevel;
use crate::domain::{HarmonizerError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One native-vocabulary entry in a severity table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SeverityEntry {
    /// Unified ordinal level
    pub level: SeverityLevel,
    /// Numeric score, `1..=10`, monotonic with the level ordering
    pub score: u8,
}

impl SeverityEntry {
    const fn new(level: SeverityLevel, score: u8) -> Self {
        Self { level, score }
    }
}

/// Inclusive expected range for per-source fact counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CountRange {
    pub min: u64,
    pub max: u64,
}

impl CountRange {
    /// Returns true when `count` lies inside the range.
    pub fn contains(&self, count: u64) -> bool {
        count >= self.min && count <= self.max
    }
}

impl Default for CountRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: u64::MAX,
        }
    }
}

/// Calendar span covered by the date dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub start_year: i32,
    pub end_year: i32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            start_year: 2012,
            end_year: 2026,
        }
    }
}

/// Per-source severity vocabularies. Keys are matched after lowercasing
/// for RASFF tables and verbatim for the US/UK tables, mirroring how the
/// agencies publish them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeverityConfig {
    /// US recall classes (FDA and FSIS): `Class I|II|III`
    pub us_class: BTreeMap<String, SeverityEntry>,
    /// RASFF risk-decision strings, lowercased
    pub rasff_risk: BTreeMap<String, SeverityEntry>,
    /// RASFF notification types, lowercased; used when the risk decision
    /// is absent or undecided. Covers both export eras' vocabularies.
    pub rasff_notification: BTreeMap<String, SeverityEntry>,
    /// UK FSA alert types
    pub uk_alert: BTreeMap<String, SeverityEntry>,
}

impl Default for SeverityConfig {
    fn default() -> Self {
        use SeverityLevel::{High, Low, Medium, Undecided};

        let table = |entries: &[(&str, SeverityEntry)]| {
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>()
        };

        Self {
            us_class: table(&[
                ("Class I", SeverityEntry::new(High, 10)),
                ("Class II", SeverityEntry::new(Medium, 5)),
                ("Class III", SeverityEntry::new(Low, 2)),
            ]),
            rasff_risk: table(&[
                ("serious", SeverityEntry::new(High, 10)),
                ("potentially serious", SeverityEntry::new(High, 8)),
                ("potential risk", SeverityEntry::new(Medium, 5)),
                ("not serious", SeverityEntry::new(Low, 2)),
                ("undecided", SeverityEntry::new(Undecided, 1)),
                ("not determined", SeverityEntry::new(Undecided, 1)),
            ]),
            rasff_notification: table(&[
                // 2021+ vocabulary
                ("alert notification", SeverityEntry::new(High, 9)),
                ("border rejection notification", SeverityEntry::new(Medium, 6)),
                (
                    "information notification for attention",
                    SeverityEntry::new(Medium, 5),
                ),
                (
                    "information notification for follow-up",
                    SeverityEntry::new(Medium, 4),
                ),
                ("non-compliance notification", SeverityEntry::new(Medium, 5)),
                // pre-2021 vocabulary
                ("alert", SeverityEntry::new(High, 9)),
                ("border rejection", SeverityEntry::new(Medium, 6)),
                ("information for attention", SeverityEntry::new(Medium, 5)),
                ("information for follow-up", SeverityEntry::new(Medium, 4)),
                ("information", SeverityEntry::new(Low, 3)),
                ("news", SeverityEntry::new(Low, 2)),
            ]),
            uk_alert: table(&[
                ("Food Alert For Action", SeverityEntry::new(High, 10)),
                ("Product Recall", SeverityEntry::new(High, 9)),
                ("Allergy Alert", SeverityEntry::new(High, 8)),
                ("Alert", SeverityEntry::new(Medium, 5)),
            ]),
        }
    }
}

/// Classification engine settings. The keyword dictionaries themselves
/// default to the built-in tables in [`crate::core::classify::keywords`];
/// a rules file may replace any dictionary wholesale with an ordered list
/// of `[keyword, canonical]` pairs (order is evaluation priority).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// RecallCategory assigned when no dictionary matches and no
    /// contamination-adjacent term is present. A documented policy
    /// choice, deliberately configuration rather than code.
    pub default_unmatched_category: String,
    /// Override for the biological-pathogen dictionary
    pub pathogens: Option<Vec<(String, String)>>,
    /// Override for the allergen dictionary
    pub allergens: Option<Vec<(String, String)>>,
    /// Override for the chemical-contaminant dictionary
    pub chemicals: Option<Vec<(String, String)>>,
    /// Override for the foreign-object dictionary
    pub foreign_objects: Option<Vec<(String, String)>>,
    /// Override for the undeclared-color dictionary
    pub colors: Option<Vec<(String, String)>>,
    /// Override for the process/labeling dictionary
    pub process_issues: Option<Vec<(String, String)>>,
    /// Override for the product-category keyword table
    pub product_categories: Option<Vec<(String, String)>>,
    /// Override for the category -> broad product-type table
    pub product_types: Option<Vec<(String, String)>>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            default_unmatched_category: "Process Issue".to_string(),
            pathogens: None,
            allergens: None,
            chemicals: None,
            foreign_objects: None,
            colors: None,
            process_issues: None,
            product_categories: None,
            product_types: None,
        }
    }
}

/// Validator thresholds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Null fraction above which a column is flagged
    pub null_threshold: f64,
    /// Expected fact_recalls row-count range per source name; sources not
    /// listed are reported without range flagging
    pub expected_counts: BTreeMap<String, CountRange>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            null_threshold: 0.05,
            expected_counts: BTreeMap::new(),
        }
    }
}

/// Complete rule-table configuration for one pipeline run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    pub calendar: CalendarConfig,
    pub severity: SeverityConfig,
    pub classify: ClassifyConfig,
    pub validation: ValidationConfig,
}

impl RulesConfig {
    /// Parses a rules file from a TOML string, merging over the built-in
    /// defaults, and validates it.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: RulesConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a rules file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    /// Checks internal consistency: score bounds, calendar ordering,
    /// threshold range, and the unmatched-category vocabulary.
    pub fn validate(&self) -> Result<()> {
        let tables = [
            ("severity.us_class", &self.severity.us_class),
            ("severity.rasff_risk", &self.severity.rasff_risk),
            ("severity.rasff_notification", &self.severity.rasff_notification),
            ("severity.uk_alert", &self.severity.uk_alert),
        ];
        for (name, table) in tables {
            for (code, entry) in table {
                if entry.score < 1 || entry.score > 10 {
                    return Err(HarmonizerError::Configuration(format!(
                        "{name}[\"{code}\"]: score {} outside 1..=10",
                        entry.score
                    )));
                }
            }
        }

        if self.calendar.start_year > self.calendar.end_year {
            return Err(HarmonizerError::Configuration(format!(
                "calendar: start_year {} after end_year {}",
                self.calendar.start_year, self.calendar.end_year
            )));
        }

        if !(0.0..=1.0).contains(&self.validation.null_threshold) {
            return Err(HarmonizerError::Configuration(format!(
                "validation.null_threshold {} outside 0..=1",
                self.validation.null_threshold
            )));
        }

        let category = self.classify.default_unmatched_category.as_str();
        if category != "Process Issue" && category != "Product Contaminant" {
            return Err(HarmonizerError::Configuration(format!(
                "classify.default_unmatched_category must be \"Process Issue\" or \
                 \"Product Contaminant\", got \"{category}\""
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RulesConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.calendar.start_year, 2012);
        assert_eq!(config.calendar.end_year, 2026);
        assert_eq!(config.classify.default_unmatched_category, "Process Issue");
    }

    #[test]
    fn test_default_severity_tables_cover_us_classes() {
        let config = RulesConfig::default();
        let class_i = &config.severity.us_class["Class I"];
        assert_eq!(class_i.level, SeverityLevel::High);
        assert_eq!(class_i.score, 10);
        assert_eq!(config.severity.us_class["Class III"].score, 2);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = RulesConfig::from_toml_str("").unwrap();
        assert_eq!(config.validation.null_threshold, 0.05);
        assert!(config.classify.pathogens.is_none());
    }

    #[test]
    fn test_partial_override_keeps_other_sections() {
        let toml_str = r#"
            [calendar]
            start_year = 2015
            end_year = 2020

            [validation.expected_counts.FDA]
            min = 10
            max = 1000
        "#;
        let config = RulesConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.calendar.start_year, 2015);
        assert!(config.validation.expected_counts["FDA"].contains(500));
        assert!(!config.validation.expected_counts["FDA"].contains(5));
        // untouched sections keep defaults
        assert_eq!(config.severity.us_class["Class II"].score, 5);
    }

    #[test]
    fn test_score_out_of_range_rejected() {
        let toml_str = r#"
            [severity.us_class."Class I"]
            level = "High"
            score = 11
        "#;
        let err = RulesConfig::from_toml_str(toml_str).unwrap_err();
        assert!(err.to_string().contains("outside 1..=10"));
    }

    #[test]
    fn test_bad_unmatched_category_rejected() {
        let toml_str = r#"
            [classify]
            default_unmatched_category = "Mystery"
        "#;
        assert!(RulesConfig::from_toml_str(toml_str).is_err());
    }

    #[test]
    fn test_inverted_calendar_rejected() {
        let toml_str = r#"
            [calendar]
            start_year = 2030
            end_year = 2020
        "#;
        assert!(RulesConfig::from_toml_str(toml_str).is_err());
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        assert!(RulesConfig::from_toml_str("[surprise]\nx = 1").is_err());
    }

    #[test]
    fn test_dictionary_override_shape() {
        let toml_str = r#"
            [classify]
            pathogens = [["listeria", "Listeria monocytogenes"]]
        "#;
        let config = RulesConfig::from_toml_str(toml_str).unwrap();
        let pathogens = config.classify.pathogens.unwrap();
        assert_eq!(pathogens[0].0, "listeria");
        assert_eq!(pathogens[0].1, "Listeria monocytogenes");
    }
}
