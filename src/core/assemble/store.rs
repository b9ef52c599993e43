//! Surrogate key memoization
//!
//! Each dimension hands out dense `u32` surrogate keys, memoized on the
//! full attribute tuple: the first request for a tuple mints the next key
//! (starting at 1, in insertion order), every later request returns the
//! same key. Because insertion order is the record processing order and
//! that order is fixed, two runs over the same input mint identical keys.

use crate::core::geography;
use crate::domain::Source;
use std::collections::HashMap;
use std::hash::Hash;

/// Attribute-tuple to surrogate-key map with insertion-ordered minting.
#[derive(Debug, Clone)]
pub struct SurrogateMap<K> {
    index: HashMap<K, u32>,
    entries: Vec<K>,
}

impl<K: Eq + Hash + Clone> SurrogateMap<K> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Returns the key for an attribute tuple, minting the next key on
    /// first sight.
    pub fn resolve(&mut self, attrs: K) -> u32 {
        if let Some(key) = self.index.get(&attrs) {
            return *key;
        }
        self.entries.push(attrs.clone());
        let key = self.entries.len() as u32;
        self.index.insert(attrs, key);
        key
    }

    /// Key for a tuple that may or may not have been minted.
    pub fn get(&self, attrs: &K) -> Option<u32> {
        self.index.get(attrs).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(key, attrs)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &K)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, attrs)| (i as u32 + 1, attrs))
    }
}

impl<K: Eq + Hash + Clone> Default for SurrogateMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Geography dimension attributes: canonical country plus the US state
/// where the source carries one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeographyAttrs {
    pub country: String,
    pub state: Option<String>,
}

impl GeographyAttrs {
    pub fn unknown() -> Self {
        Self {
            country: "Unknown".to_string(),
            state: None,
        }
    }

    pub fn country(name: &str) -> Self {
        Self {
            country: name.to_string(),
            state: None,
        }
    }
}

/// Classification dimension attributes: the native vocabulary exactly as
/// observed. Severity is derived at row build, not stored here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassificationAttrs {
    pub source: Source,
    /// Native classification (`Class I`, notification type, alert type)
    pub original: Option<String>,
    /// RASFF risk decision where present
    pub risk_decision: Option<String>,
}

/// Product dimension attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductAttrs {
    pub source: Source,
    pub name: String,
    /// Source-native or keyword-derived category
    pub category: Option<String>,
}

/// Company dimension attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanyAttrs {
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl CompanyAttrs {
    /// Placeholder identity for sources that carry no company data.
    pub fn unknown() -> Self {
        Self {
            name: "Unknown".to_string(),
            city: None,
            state: None,
            country: None,
        }
    }
}

/// All four record-driven dimensions for one run.
#[derive(Debug, Clone)]
pub struct DimensionStore {
    pub geography: SurrogateMap<GeographyAttrs>,
    pub classification: SurrogateMap<ClassificationAttrs>,
    pub product: SurrogateMap<ProductAttrs>,
    pub company: SurrogateMap<CompanyAttrs>,
}

impl DimensionStore {
    /// Creates the store with the geography reference set pre-seeded:
    /// the `Unknown` placeholder at key 1, the US and UK, and every EU
    /// and EFTA member, so membership analysis has complete rows even for
    /// countries no record mentions.
    pub fn new() -> Self {
        let mut geography = SurrogateMap::new();
        geography.resolve(GeographyAttrs::unknown());
        geography.resolve(GeographyAttrs::country("United States"));
        geography.resolve(GeographyAttrs::country("United Kingdom"));
        for country in geography::EU_MEMBERS {
            geography.resolve(GeographyAttrs::country(country));
        }
        for country in geography::EFTA_COUNTRIES {
            geography.resolve(GeographyAttrs::country(country));
        }

        Self {
            geography,
            classification: SurrogateMap::new(),
            product: SurrogateMap::new(),
            company: SurrogateMap::new(),
        }
    }
}

impl Default for DimensionStore {
    fn default() -> Self {
        Self::new()
    }
}
