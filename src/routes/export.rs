use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::demographics::DemographicDistributions;
use super::histogram::HistogramBin;
use super::municipalities::MunicipalitySummary;
use super::statistics::AggregateStatistics;
use super::temporal::TemporalSeries;
use crate::models::PatientRecord;

// =========================================================
// Export snapshot types
// =========================================================

/// Full serializable snapshot of one processed batch, used for the
/// dashboard's file-download feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    /// Identifier assigned when the batch was processed.
    pub dataset_id: Uuid,
    /// SHA-256 checksum of the uploaded batch.
    pub checksum: String,
    pub ingested_at: DateTime<Utc>,
    pub statistics: AggregateStatistics,
    /// Per-city summaries in first-occurrence order.
    pub municipalities: Vec<MunicipalitySummary>,
    pub temporal: TemporalSeries,
    pub demographics: DemographicDistributions,
    pub histogram: Vec<HistogramBin>,
    /// The original uploaded records.
    pub records: Vec<PatientRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_bundle_serialization() {
        let bundle = ExportBundle {
            dataset_id: Uuid::new_v4(),
            checksum: "abc123".to_string(),
            ingested_at: Utc::now(),
            statistics: AggregateStatistics {
                total_patients: 0,
                avg_rdw: None,
                elevated_rdw_count: 0,
                active_cities: 0,
            },
            municipalities: vec![],
            temporal: TemporalSeries::new(),
            demographics: DemographicDistributions::default(),
            histogram: vec![],
            records: vec![],
        };
        let json = serde_json::to_string(&bundle).unwrap();
        let back: ExportBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(back.checksum, bundle.checksum);
        assert_eq!(back.dataset_id, bundle.dataset_id);
    }
}
