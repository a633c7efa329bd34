//! Pure classification functions for RDW surveillance.
//!
//! All thresholds follow the clinical reference values used by the
//! surveillance dashboard: RDW above 14.5% is considered elevated, above
//! 16.0% high.

use serde::{Deserialize, Serialize};

/// Upper bound of the normal RDW range, in percent.
pub const ELEVATED_RDW_THRESHOLD: f64 = 14.5;

/// Upper bound of the elevated RDW range, in percent.
pub const HIGH_RDW_THRESHOLD: f64 = 16.0;

/// Age-group bucket used for demographic aggregation.
///
/// Buckets use half-open upper bounds: age 18 falls in `18-29`, age 75 in
/// `75+`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "0-17")]
    Age0To17,
    #[serde(rename = "18-29")]
    Age18To29,
    #[serde(rename = "30-44")]
    Age30To44,
    #[serde(rename = "45-59")]
    Age45To59,
    #[serde(rename = "60-74")]
    Age60To74,
    #[serde(rename = "75+")]
    Age75Plus,
}

impl AgeGroup {
    /// All buckets in ascending age order. This is the display order for
    /// demographic charts.
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::Age0To17,
        AgeGroup::Age18To29,
        AgeGroup::Age30To44,
        AgeGroup::Age45To59,
        AgeGroup::Age60To74,
        AgeGroup::Age75Plus,
    ];

    /// Human-readable bucket label as exposed to consumers.
    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::Age0To17 => "0-17",
            AgeGroup::Age18To29 => "18-29",
            AgeGroup::Age30To44 => "30-44",
            AgeGroup::Age45To59 => "45-59",
            AgeGroup::Age60To74 => "60-74",
            AgeGroup::Age75Plus => "75+",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when a negative age is passed to [`classify_age_group`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid age: {age} (must be a non-negative integer)")]
pub struct InvalidAgeError {
    pub age: i64,
}

/// Classify an age into one of the six fixed buckets.
///
/// Total over non-negative integers; negative ages are rejected rather than
/// silently bucketed.
pub fn classify_age_group(age: i64) -> Result<AgeGroup, InvalidAgeError> {
    if age < 0 {
        return Err(InvalidAgeError { age });
    }
    Ok(if age < 18 {
        AgeGroup::Age0To17
    } else if age < 30 {
        AgeGroup::Age18To29
    } else if age < 45 {
        AgeGroup::Age30To44
    } else if age < 60 {
        AgeGroup::Age45To59
    } else if age < 75 {
        AgeGroup::Age60To74
    } else {
        AgeGroup::Age75Plus
    })
}

/// Severity classification for an average RDW value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RdwStatus {
    Normal,
    Elevated,
    High,
}

impl std::fmt::Display for RdwStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RdwStatus::Normal => "normal",
            RdwStatus::Elevated => "elevated",
            RdwStatus::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Classify an average RDW value using inclusive lower-bound semantics:
/// exactly 14.5 is still normal, exactly 16.0 is still elevated.
pub fn classify_rdw_status(avg_rdw: f64) -> RdwStatus {
    if avg_rdw <= ELEVATED_RDW_THRESHOLD {
        RdwStatus::Normal
    } else if avg_rdw <= HIGH_RDW_THRESHOLD {
        RdwStatus::Elevated
    } else {
        RdwStatus::High
    }
}

/// A valid RDW measurement is strictly positive. Zero or negative values are
/// treated as missing and excluded from every RDW-based computation.
pub fn is_valid_rdw(value: f64) -> bool {
    value > 0.0
}

/// Patient sex as recognized by the demographic aggregation.
///
/// Only `M` and `F` wire values are recognized; anything else is excluded
/// from sex-keyed aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Parse the wire value (`"M"` / `"F"`); other values are unrecognized.
    pub fn parse(value: &str) -> Option<Sex> {
        match value {
            "M" => Some(Sex::Male),
            "F" => Some(Sex::Female),
            _ => None,
        }
    }

    /// Display label used in demographic charts.
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Male => "Masculino",
            Sex::Female => "Feminino",
        }
    }
}
