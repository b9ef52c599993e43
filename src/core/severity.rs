//! Severity unification
//!
//! Maps each source's native severity vocabulary - US recall classes,
//! RASFF risk decisions and notification types, UK FSA alert types - onto
//! one ordinal scale: a [`SeverityLevel`] and a numeric score in `1..=10`.
//! The mappings live in [`SeverityConfig`] tables, not code; an
//! unrecognized native code resolves to `Undecided`/1 rather than failing.

use crate::config::SeverityConfig;
use crate::domain::Source;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified ordinal severity. Ordering is `Undecided < Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SeverityLevel {
    Undecided,
    Low,
    Medium,
    High,
}

impl SeverityLevel {
    /// Stable name used in the classification dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::Undecided => "Undecided",
            SeverityLevel::Low => "Low",
            SeverityLevel::Medium => "Medium",
            SeverityLevel::High => "High",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A unified (level, score) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Severity {
    pub level: SeverityLevel,
    /// `1..=10`, monotonic with the level ordering
    pub score: u8,
}

impl Severity {
    /// The fallback for unrecognized native vocabulary.
    pub fn undecided() -> Self {
        Self {
            level: SeverityLevel::Undecided,
            score: 1,
        }
    }
}

/// Legacy RASFF notification names and their current-era equivalents. The
/// dimension stores the current vocabulary regardless of export era.
const NOTIFICATION_TYPE_RENAMES: &[(&str, &str)] = &[
    ("alert", "alert notification"),
    ("border rejection", "border rejection notification"),
    ("information for attention", "information notification for attention"),
    ("information for follow-up", "information notification for follow-up"),
];

/// Normalizes a RASFF notification type to the current (2021+) naming.
pub fn normalize_notification_type(native: &str) -> String {
    let lower = native.trim().to_lowercase();
    for (legacy, current) in NOTIFICATION_TYPE_RENAMES {
        if lower == *legacy {
            return (*current).to_string();
        }
    }
    native.trim().to_string()
}

/// Formats an FSIS class value, which ships either as `1|2|3` or already
/// as `Class I|II|III`, into the US class vocabulary.
pub fn format_us_class(native: &str) -> String {
    match native.trim() {
        "1" => "Class I".to_string(),
        "2" => "Class II".to_string(),
        "3" => "Class III".to_string(),
        other => other.to_string(),
    }
}

/// Unifies a record's native severity signals into one (level, score).
///
/// Per-source inputs:
/// - FDA/FSIS use `class_code` against the US class table
/// - RASFF uses `risk_decision` first; when that is absent, unrecognized,
///   or undecided, the `notification_type` table decides (exact match,
///   then partial containment as a last resort)
/// - UK FSA uses `notification_type` (the alert type) against the UK table
/// - CDC NORS and CAERS carry no severity vocabulary
pub fn unify(
    rules: &SeverityConfig,
    source: Source,
    class_code: Option<&str>,
    risk_decision: Option<&str>,
    notification_type: Option<&str>,
) -> Severity {
    match source {
        Source::Fda | Source::Fsis => class_code
            .map(format_us_class)
            .and_then(|code| rules.us_class.get(&code).copied())
            .map(|entry| Severity {
                level: entry.level,
                score: entry.score,
            })
            .unwrap_or_else(Severity::undecided),
        Source::Rasff => {
            let from_risk = risk_decision
                .map(|r| r.trim().to_lowercase())
                .and_then(|r| rules.rasff_risk.get(&r).copied());
            match from_risk {
                Some(entry) if entry.level != SeverityLevel::Undecided => Severity {
                    level: entry.level,
                    score: entry.score,
                },
                _ => notification_severity(rules, notification_type),
            }
        }
        Source::UkFsa => notification_type
            .map(str::trim)
            .and_then(|alert| rules.uk_alert.get(alert).copied())
            .map(|entry| Severity {
                level: entry.level,
                score: entry.score,
            })
            .unwrap_or_else(Severity::undecided),
        Source::CdcNors | Source::Caers => Severity::undecided(),
    }
}

fn notification_severity(rules: &SeverityConfig, notification_type: Option<&str>) -> Severity {
    let Some(notif) = notification_type else {
        return Severity::undecided();
    };
    let lower = notif.trim().to_lowercase();

    if let Some(entry) = rules.rasff_notification.get(&lower) {
        return Severity {
            level: entry.level,
            score: entry.score,
        };
    }

    // Partial containment for vocabulary drift; table order is
    // deterministic (BTreeMap) so ties resolve stably.
    for (key, entry) in &rules.rasff_notification {
        if lower.contains(key.as_str()) || key.contains(&lower) {
            return Severity {
                level: entry.level,
                score: entry.score,
            };
        }
    }

    Severity::undecided()
}
