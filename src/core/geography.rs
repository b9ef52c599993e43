//! Geography normalization
//!
//! Canonicalizes free-text country names (arbitrary casing, known aliases
//! and transliteration variants) and classifies each into region and
//! EU/EFTA membership. Resolution is pure and total: an unknown country is
//! a data-quality signal, never an error, and resolves to
//! `Unknown`/`Other` with both membership flags false.

use std::fmt;

/// EU member states (post-Brexit set).
pub const EU_MEMBERS: &[&str] = &[
    "Austria",
    "Belgium",
    "Bulgaria",
    "Croatia",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Estonia",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Hungary",
    "Ireland",
    "Italy",
    "Latvia",
    "Lithuania",
    "Luxembourg",
    "Malta",
    "Netherlands",
    "Poland",
    "Portugal",
    "Romania",
    "Slovakia",
    "Slovenia",
    "Spain",
    "Sweden",
];

/// EFTA states, tracked separately from EU membership.
pub const EFTA_COUNTRIES: &[&str] = &["Switzerland", "Norway", "Iceland", "Liechtenstein"];

/// Known variants keyed by the uppercased input. Covers the documented
/// ALL-CAPS exports, transliteration exceptions, and historical names.
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("AUSTRIA", "Austria"),
    ("BELGIUM", "Belgium"),
    ("BULGARIA", "Bulgaria"),
    ("CROATIA", "Croatia"),
    ("CYPRUS", "Cyprus"),
    ("CZECH REPUBLIC", "Czech Republic"),
    ("CZECHIA", "Czech Republic"),
    ("DENMARK", "Denmark"),
    ("ESTONIA", "Estonia"),
    ("FINLAND", "Finland"),
    ("FRANCE", "France"),
    ("GERMANY", "Germany"),
    ("GREECE", "Greece"),
    ("HUNGARY", "Hungary"),
    ("IRELAND", "Ireland"),
    ("ITALY", "Italy"),
    ("LATVIA", "Latvia"),
    ("LITHUANIA", "Lithuania"),
    ("LUXEMBOURG", "Luxembourg"),
    ("MALTA", "Malta"),
    ("NETHERLANDS", "Netherlands"),
    ("THE NETHERLANDS", "Netherlands"),
    ("POLAND", "Poland"),
    ("PORTUGAL", "Portugal"),
    ("ROMANIA", "Romania"),
    ("SLOVAKIA", "Slovakia"),
    ("SLOVENIA", "Slovenia"),
    ("SPAIN", "Spain"),
    ("SWEDEN", "Sweden"),
    ("SWITZERLAND", "Switzerland"),
    ("NORWAY", "Norway"),
    ("ICELAND", "Iceland"),
    ("LIECHTENSTEIN", "Liechtenstein"),
    ("TURKEY", "Türkiye"),
    ("TÜRKİYE", "Türkiye"),
    ("TURKIYE", "Türkiye"),
    ("UNITED KINGDOM", "United Kingdom"),
    ("CHINA", "China"),
    ("INDIA", "India"),
    ("BRAZIL", "Brazil"),
    ("THAILAND", "Thailand"),
    ("VIETNAM", "Vietnam"),
    ("VIET NAM", "Vietnam"),
    ("INDONESIA", "Indonesia"),
    ("EGYPT", "Egypt"),
    ("MOROCCO", "Morocco"),
    ("ARGENTINA", "Argentina"),
    ("UNITED STATES", "United States"),
    ("USA", "United States"),
];

/// Regional grouping used for cross-source comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Usa,
    Eu,
    Efta,
    Uk,
    Other,
}

impl Region {
    /// Stable name used in the geography dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Usa => "USA",
            Region::Eu => "EU",
            Region::Efta => "EFTA",
            Region::Uk => "UK",
            Region::Other => "Other",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Canonical geography attributes for one country.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Geography {
    /// Canonical country name, or `Unknown`
    pub country: String,
    /// Country code where known (`USA`, `GBR`)
    pub country_code: Option<String>,
    pub region: Region,
    pub is_eu_member: bool,
    pub is_efta: bool,
}

impl Geography {
    /// The total fallback: unknown country, `Other` region, no memberships.
    pub fn unknown() -> Self {
        Self {
            country: "Unknown".to_string(),
            country_code: None,
            region: Region::Other,
            is_eu_member: false,
            is_efta: false,
        }
    }
}

/// Canonicalizes a free-text country name.
///
/// Lookup order: trim, check the alias table on the uppercased input,
/// pass already-title-case input through unchanged, else title-case it.
/// Returns `None` for empty input. Idempotent: a canonical name maps to
/// itself.
pub fn canonical_country_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let upper = trimmed.to_uppercase();
    if let Some((_, canonical)) = COUNTRY_ALIASES.iter().find(|(alias, _)| *alias == upper) {
        return Some((*canonical).to_string());
    }

    // Already mixed-case input is assumed canonical
    let first_upper = trimmed.chars().next().is_some_and(|c| c.is_uppercase());
    if first_upper && trimmed != upper {
        return Some(trimmed.to_string());
    }

    Some(title_case(trimmed))
}

/// Resolves a free-text country name to its full geography attributes.
///
/// Pure and total; unknown or empty input resolves to
/// [`Geography::unknown`].
pub fn resolve_country(raw: &str) -> Geography {
    let Some(country) = canonical_country_name(raw) else {
        return Geography::unknown();
    };
    resolve_canonical(&country)
}

/// Resolves an already-canonical country name.
pub fn resolve_canonical(country: &str) -> Geography {
    let is_eu = EU_MEMBERS.contains(&country);
    let is_efta = EFTA_COUNTRIES.contains(&country);

    let (region, code) = if country == "United States" {
        (Region::Usa, Some("USA"))
    } else if country == "United Kingdom" {
        (Region::Uk, Some("GBR"))
    } else if is_eu {
        (Region::Eu, None)
    } else if is_efta {
        (Region::Efta, None)
    } else {
        (Region::Other, None)
    };

    Geography {
        country: country.to_string(),
        country_code: code.map(String::from),
        region,
        is_eu_member: is_eu,
        is_efta: is_efta,
    }
}

/// True when the text looks like a comma-separated country list -
/// distribution data that leaked into an origin field. Such values never
/// resolve to a geography row.
pub fn is_country_list(raw: &str) -> bool {
    raw.contains(',')
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
