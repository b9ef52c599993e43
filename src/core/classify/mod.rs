//! Recall reason classification
//!
//! Assigns every recall reason a three-level taxonomy: RecallCategory
//! (`Product Contaminant` or `Process Issue`), RecallGroup (e.g.
//! `Biological Contamination`, `Mislabeling`), and RecallSubgroup (the
//! specific agent, e.g. `Listeria monocytogenes`). Classification is an
//! ordered rule cascade over lowercased text; the first rule that fires
//! wins, and text that matches nothing lands in the `Unclassified`
//! subgroup under a configurable default category. The function is total:
//! every input, including empty text, yields a classification.
//!
//! # Examples
//!
//! ```
//! use starling::config::ClassifyConfig;
//! use starling::core::classify::Classifier;
//!
//! let classifier = Classifier::new(&ClassifyConfig::default());
//! let c = classifier.classify(Some("Undeclared milk in cookie packaging"));
//! assert_eq!(c.category, "Product Contaminant");
//! assert_eq!(c.group, "Allergens");
//! assert_eq!(c.subgroup, "Milk");
//! ```

pub mod keywords;

use crate::config::ClassifyConfig;
use regex::Regex;

/// Groups that roll up to the `Product Contaminant` category; everything
/// else is a `Process Issue`.
const CONTAMINANT_GROUPS: &[&str] = &[
    "Biological Contamination",
    "Allergens",
    "Chemical Contamination",
    "Foreign Objects",
    "Undeclared Food Colors",
];

/// Labeling-context markers that gate allergen classification. A bare
/// ingredient mention ("contains fish") is not an allergen recall; an
/// undeclared or mislabeled one is.
const LABELING_MARKERS: &[&str] = &[
    "undeclared",
    "label",
    "misbrand",
    "not declared",
    "may contain",
    "allerg",
];

/// A resolved three-level recall classification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classification {
    pub category: String,
    pub group: String,
    pub subgroup: String,
}

impl Classification {
    fn new(category: &str, group: &str, subgroup: &str) -> Self {
        Self {
            category: category.to_string(),
            group: group.to_string(),
            subgroup: subgroup.to_string(),
        }
    }

    fn contaminant(group: &str, subgroup: &str) -> Self {
        Self::new("Product Contaminant", group, subgroup)
    }

    fn process(group: &str, subgroup: &str) -> Self {
        Self::new("Process Issue", group, subgroup)
    }
}

/// The rule cascade, built once per run from [`ClassifyConfig`]. Every
/// keyword table can be replaced from the rules file; absent tables fall
/// back to the built-ins in [`keywords`].
pub struct Classifier {
    pathogens: Vec<(String, String)>,
    allergens: Vec<(String, String)>,
    chemicals: Vec<(String, String)>,
    foreign_objects: Vec<(String, String)>,
    colors: Vec<(String, String)>,
    process_issues: Vec<(String, String)>,
    product_categories: Vec<(String, String)>,
    product_types: Vec<(String, String)>,
    default_unmatched_category: String,
    hazard_notation: Regex,
}

fn table(
    override_table: &Option<Vec<(String, String)>>,
    builtin: &[(&str, &str)],
) -> Vec<(String, String)> {
    match override_table {
        Some(rows) => rows.clone(),
        None => builtin
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

impl Classifier {
    pub fn new(config: &ClassifyConfig) -> Self {
        Self {
            pathogens: table(&config.pathogens, keywords::PATHOGENS),
            allergens: table(&config.allergens, keywords::ALLERGENS),
            chemicals: table(&config.chemicals, keywords::CHEMICALS),
            foreign_objects: table(&config.foreign_objects, keywords::FOREIGN_OBJECTS),
            colors: table(&config.colors, keywords::COLORS),
            process_issues: table(&config.process_issues, keywords::PROCESS_ISSUES),
            product_categories: table(&config.product_categories, keywords::PRODUCT_CATEGORIES),
            product_types: table(&config.product_types, keywords::PRODUCT_TYPES),
            default_unmatched_category: config.default_unmatched_category.clone(),
            hazard_notation: Regex::new(r"^(.+?)\s*-\s*\{(.+?)\}")
                .expect("hazard notation pattern is valid"),
        }
    }

    /// Classifies a recall reason. Total over all inputs.
    pub fn classify(&self, reason: Option<&str>) -> Classification {
        let text = reason.map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return self.unmatched("");
        }
        let lower = text.to_lowercase();

        // Bracketed hazard notation decides group by the bracketed
        // category and subgroup by the substance, when the category is
        // recognized. Otherwise the full text falls through to the
        // keyword cascade.
        if let Some(caps) = self.hazard_notation.captures(text) {
            let substance = caps.get(1).map_or("", |m| m.as_str()).trim();
            let category = caps.get(2).map_or("", |m| m.as_str()).trim().to_lowercase();
            if let Some(classification) = self.classify_bracketed(substance, &category) {
                return classification;
            }
        }

        if let Some(canonical) = find_keyword(&self.pathogens, &lower) {
            return Classification::contaminant("Biological Contamination", canonical);
        }

        let labeling_context = LABELING_MARKERS.iter().any(|m| lower.contains(m));
        if labeling_context {
            if let Some(canonical) = find_keyword(&self.allergens, &lower) {
                return Classification::contaminant("Allergens", canonical);
            }
        }

        if let Some(canonical) = find_keyword(&self.chemicals, &lower) {
            return Classification::contaminant("Chemical Contamination", canonical);
        }

        if let Some(canonical) = find_keyword(&self.foreign_objects, &lower) {
            return Classification::contaminant("Foreign Objects", canonical);
        }

        // RASFF's bare "(allergens)" tag without a recognizable substance
        if lower.contains("(allergens)") {
            let subgroup = if lower.contains("nut") {
                "Tree Nuts"
            } else if lower.contains("milk") || lower.contains("lactoprotein") {
                "Milk"
            } else {
                "Allergens - Other"
            };
            return Classification::contaminant("Allergens", subgroup);
        }

        if labeling_context {
            if let Some(canonical) = find_keyword(&self.colors, &lower) {
                return Classification::contaminant("Undeclared Food Colors", canonical);
            }
        }

        if let Some(group) = find_keyword(&self.process_issues, &lower) {
            let subgroup = format!("{group} - Other");
            return Classification::process(group, &subgroup);
        }

        // Labeling context with no named agent
        if lower.contains("undeclared") {
            return Classification::contaminant("Allergens", "Allergens - Other");
        }
        if labeling_context {
            return Classification::process("Mislabeling", "Mislabeling - Other");
        }

        // Contamination language with no named agent
        const GENERIC_CONTAMINATION: &[&str] = &[
            "contamina",
            "pathogen",
            "bacteria",
            "microbial",
            "micro-organism",
            "microorganism",
        ];
        if GENERIC_CONTAMINATION.iter().any(|t| lower.contains(t)) {
            return Classification::contaminant(
                "Biological Contamination",
                "Biological Contamination - Other",
            );
        }

        self.unmatched(&lower)
    }

    /// Resolves RASFF's `substance - {hazard category}` notation. Returns
    /// `None` for unrecognized bracketed categories so the cascade can
    /// try the full text instead.
    fn classify_bracketed(&self, substance: &str, category: &str) -> Option<Classification> {
        let sub_lower = substance.to_lowercase();

        if category.contains("micro-organism")
            || category.contains("microorganism")
            || category.contains("microbiolog")
            || category.contains("parasit")
            || category.contains("virus")
        {
            let subgroup = find_keyword(&self.pathogens, &sub_lower).unwrap_or(substance);
            return Some(Classification::contaminant(
                "Biological Contamination",
                subgroup,
            ));
        }
        if category.contains("allergen") {
            let subgroup = find_keyword(&self.allergens, &sub_lower).unwrap_or(substance);
            return Some(Classification::contaminant("Allergens", subgroup));
        }
        if category.contains("foreign bod") {
            let subgroup = find_keyword(&self.foreign_objects, &sub_lower).unwrap_or(substance);
            return Some(Classification::contaminant("Foreign Objects", subgroup));
        }
        if category.contains("heavy metal")
            || category.contains("pesticide")
            || category.contains("mycotoxin")
            || category.contains("veterinary")
            || category.contains("industrial contaminant")
            || category.contains("environmental pollutant")
            || category.contains("process contaminant")
            || category.contains("migration")
            || category.contains("natural toxin")
            || category.contains("biotoxin")
            || category.contains("food additive")
            || category.contains("chemical")
        {
            let subgroup = find_keyword(&self.chemicals, &sub_lower).unwrap_or(substance);
            return Some(Classification::contaminant(
                "Chemical Contamination",
                subgroup,
            ));
        }
        if category.contains("labelling") || category.contains("labeling") {
            return Some(Classification::process("Mislabeling", "Mislabeling - Other"));
        }
        if category.contains("packaging") {
            return Some(Classification::process(
                "Packaging Issues",
                "Packaging Issues - Other",
            ));
        }
        if category.contains("composition") {
            return Some(Classification::process(
                "Composition Issues",
                "Composition Issues - Other",
            ));
        }
        if category.contains("genetically modified") || category.contains("gmo") {
            return Some(Classification::process("GMO Issues", "GMO Issues - Other"));
        }
        if category.contains("novel food") {
            return Some(Classification::process(
                "Novel Food Issues",
                "Novel Food Issues - Other",
            ));
        }

        None
    }

    fn unmatched(&self, lower: &str) -> Classification {
        let category = if lower.contains("contamin") {
            "Product Contaminant"
        } else {
            self.default_unmatched_category.as_str()
        };
        Classification::new(category, "Unclassified", "Unclassified")
    }

    /// Derives a coarse product category from a product description.
    pub fn categorize_product(&self, description: &str) -> String {
        let lower = description.to_lowercase();
        find_keyword(&self.product_categories, &lower)
            .map(str::to_string)
            .unwrap_or_else(|| "Other".to_string())
    }

    /// Maps a product category (ours or a source-native one) to the broad
    /// product type.
    pub fn product_type_for(&self, category: &str) -> String {
        let lower = category.trim().to_lowercase();
        if lower.is_empty() {
            return "Other".to_string();
        }
        for (key, product_type) in &self.product_types {
            if lower == *key {
                return product_type.clone();
            }
        }
        for (key, product_type) in &self.product_types {
            if lower.contains(key.as_str()) {
                return product_type.clone();
            }
        }
        "Other".to_string()
    }
}

/// True when the group belongs to the `Product Contaminant` category.
pub fn is_contaminant_group(group: &str) -> bool {
    CONTAMINANT_GROUPS.contains(&group)
}

fn find_keyword<'a>(rows: &'a [(String, String)], lower_text: &str) -> Option<&'a str> {
    rows.iter()
        .find(|(keyword, _)| lower_text.contains(keyword.as_str()))
        .map(|(_, canonical)| canonical.as_str())
}
