use serde::{Deserialize, Serialize};

// =========================================================
// Global statistics types
// =========================================================

/// Global statistics over one processed batch.
///
/// `avg_rdw` is `None` when the batch contains no valid RDW measurement;
/// it never carries NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStatistics {
    /// Total number of records in the batch, valid or not.
    pub total_patients: usize,
    /// Mean of all valid RDW values.
    pub avg_rdw: Option<f64>,
    /// Number of valid RDW values above the elevated threshold (14.5%).
    pub elevated_rdw_count: usize,
    /// Number of distinct non-empty municipality names.
    pub active_cities: usize,
}
