//! Batch processing: validation, checksum, and the atomic aggregate bundle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;
use uuid::Uuid;

use crate::api::{
    AggregateStatistics, ComparisonEntry, ComparisonSortKey, DemographicBucket,
    DemographicDistributions, DemographicKind, ExportBundle, HistogramBin, MunicipalitySummary,
    PatientRecord, TemporalPoint, TemporalSeries,
};

use super::demographics::aggregate_demographics;
use super::histogram::build_histogram;
use super::municipalities::{aggregate_municipalities, comparison_view};
use super::statistics::compute_statistics;
use super::temporal::{aggregate_temporal, series_for_city};

/// How many leading records the structural sample check inspects.
const SAMPLE_CHECK_SIZE: usize = 5;

/// Errors that abort a processing call. Per-record exclusions (missing city,
/// invalid RDW, unrecognized sex) are policy, not failures, and never appear
/// here.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("invalid input format: {reason}")]
    InputFormat { reason: String },
}

/// Calculate the SHA-256 checksum of the uploaded batch content.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// All aggregates derived from one successfully processed batch.
///
/// Built wholesale by [`process_records`]; a bundle is internally consistent
/// by construction and replaced atomically on reprocessing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateBundle {
    pub dataset_id: Uuid,
    pub checksum: String,
    pub ingested_at: DateTime<Utc>,
    statistics: AggregateStatistics,
    municipalities: Vec<MunicipalitySummary>,
    temporal: TemporalSeries,
    demographics: DemographicDistributions,
    histogram: Vec<HistogramBin>,
    records: Vec<PatientRecord>,
}

impl AggregateBundle {
    /// Global statistics for the batch.
    pub fn statistics(&self) -> &AggregateStatistics {
        &self.statistics
    }

    /// Per-city summaries in first-occurrence order.
    pub fn municipality_summaries(&self) -> &[MunicipalitySummary] {
        &self.municipalities
    }

    /// Summary for one municipality, if present in the batch.
    pub fn municipality(&self, name: &str) -> Option<&MunicipalitySummary> {
        self.municipalities.iter().find(|s| s.name == name)
    }

    /// Ranked city projection for the comparison chart.
    pub fn comparison_view(&self, limit: usize, sort_key: ComparisonSortKey) -> Vec<ComparisonEntry> {
        comparison_view(&self.municipalities, limit, sort_key)
    }

    /// Date-ordered temporal evolution for one city.
    pub fn temporal_series_for_city(&self, city: &str) -> Vec<TemporalPoint> {
        series_for_city(&self.temporal, city)
    }

    /// One of the two demographic groupings.
    pub fn demographic_distribution(&self, kind: DemographicKind) -> &[DemographicBucket] {
        match kind {
            DemographicKind::Age => &self.demographics.age_groups,
            DemographicKind::Sex => &self.demographics.sex,
        }
    }

    /// The global RDW frequency histogram.
    pub fn histogram(&self) -> &[HistogramBin] {
        &self.histogram
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Full serializable snapshot for the download feature.
    pub fn export(&self) -> ExportBundle {
        ExportBundle {
            dataset_id: self.dataset_id,
            checksum: self.checksum.clone(),
            ingested_at: self.ingested_at,
            statistics: self.statistics.clone(),
            municipalities: self.municipalities.clone(),
            temporal: self.temporal.clone(),
            demographics: self.demographics.clone(),
            histogram: self.histogram.clone(),
            records: self.records.clone(),
        }
    }
}

/// Validate the batch shape before aggregation.
///
/// Mirrors the upload check performed by the dashboard: the batch must be a
/// non-empty sequence, and the first few records must carry an identifier
/// and a collection date. Later records may be sparse; field-level exclusion
/// rules handle those.
fn validate_batch(records: &[PatientRecord]) -> Result<(), ProcessingError> {
    if records.is_empty() {
        return Err(ProcessingError::InputFormat {
            reason: "input must be a non-empty sequence of records".to_string(),
        });
    }

    for (index, record) in records.iter().take(SAMPLE_CHECK_SIZE).enumerate() {
        if record.patient_id.is_empty() {
            return Err(ProcessingError::InputFormat {
                reason: format!("record {} is missing patientId", index),
            });
        }
        if record.collection_date.is_none() {
            return Err(ProcessingError::InputFormat {
                reason: format!("record {} is missing collectionDate", index),
            });
        }
    }

    Ok(())
}

/// Process one batch into a consistent [`AggregateBundle`].
///
/// Either every aggregate is computed or the call fails with
/// [`ProcessingError`] and nothing is produced; callers holding a previous
/// bundle keep it untouched on failure.
pub fn process_records(records: Vec<PatientRecord>) -> Result<AggregateBundle, ProcessingError> {
    validate_batch(&records)?;

    let checksum = {
        let serialized =
            serde_json::to_string(&records).map_err(|e| ProcessingError::InputFormat {
                reason: format!("records are not serializable: {}", e),
            })?;
        calculate_checksum(&serialized)
    };

    let statistics = compute_statistics(&records);
    let municipalities = aggregate_municipalities(&records);
    let temporal = aggregate_temporal(&records);
    let demographics = aggregate_demographics(&records);
    let histogram = build_histogram(&records);

    let bundle = AggregateBundle {
        dataset_id: Uuid::new_v4(),
        checksum,
        ingested_at: Utc::now(),
        statistics,
        municipalities,
        temporal,
        demographics,
        histogram,
        records,
    };

    info!(
        dataset_id = %bundle.dataset_id,
        total_patients = bundle.statistics.total_patients,
        active_cities = bundle.statistics.active_cities,
        "processed record batch"
    );

    Ok(bundle)
}
