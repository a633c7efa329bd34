use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =========================================================
// Demographic distribution types
// =========================================================

/// One demographic bucket (an age group or a sex category).
///
/// Buckets only exist for categories with at least one contributing record,
/// so `avg_rdw` is always defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicBucket {
    /// Bucket label: an age-group range or `Masculino` / `Feminino`.
    pub group: String,
    pub count: usize,
    pub avg_rdw: f64,
}

/// Both demographic groupings of one processed batch.
///
/// `age_groups` follows the fixed bucket order (`0-17` first, `75+` last).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DemographicDistributions {
    pub age_groups: Vec<DemographicBucket>,
    pub sex: Vec<DemographicBucket>,
}

/// Which demographic grouping a consumer is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemographicKind {
    Age,
    Sex,
}

impl FromStr for DemographicKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "age" => Ok(DemographicKind::Age),
            "sex" => Ok(DemographicKind::Sex),
            other => Err(format!("unknown demographic kind: {}", other)),
        }
    }
}
