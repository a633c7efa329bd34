use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::RdwStatus;

// =========================================================
// Municipality summary types
// =========================================================

/// Aggregated summary for one municipality.
///
/// Summaries are produced in first-occurrence order of the city in the input
/// batch. `avg_rdw`, `min_rdw` and `max_rdw` are `None` when the city has no
/// valid RDW measurement; infinities from empty min/max folds never leak out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MunicipalitySummary {
    /// Municipality name (the aggregation key).
    pub name: String,
    /// Number of records for this city, including invalid-RDW records.
    pub patient_count: usize,
    /// Mean of valid RDW values for this city.
    pub avg_rdw: Option<f64>,
    /// Percentage of valid RDW values above 14.5%, in `[0, 100]`.
    pub elevated_rdw_percentage: f64,
    pub min_rdw: Option<f64>,
    pub max_rdw: Option<f64>,
    /// Severity classification of the city's average RDW.
    pub status: RdwStatus,
    /// Record count per age-group label.
    pub age_group_counts: BTreeMap<String, usize>,
    /// Record count per sex label (`Masculino` / `Feminino`).
    pub sex_counts: BTreeMap<String, usize>,
}

/// One row of the ranked city comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub name: String,
    pub avg_rdw: Option<f64>,
    pub patient_count: usize,
    pub elevated_percentage: f64,
    pub status: RdwStatus,
}

/// Sort key for the city comparison view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonSortKey {
    #[default]
    PatientCount,
    AvgRdw,
    ElevatedPercentage,
}

impl FromStr for ComparisonSortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient_count" => Ok(ComparisonSortKey::PatientCount),
            "avg_rdw" => Ok(ComparisonSortKey::AvgRdw),
            "elevated_percentage" => Ok(ComparisonSortKey::ElevatedPercentage),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}
