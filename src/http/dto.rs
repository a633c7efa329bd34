//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Visualization DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Statistics
    AggregateStatistics,
    // Comparison
    ComparisonEntry, ComparisonSortKey,
    // Demographics
    DemographicBucket, DemographicDistributions, DemographicKind,
    // Export
    ExportBundle,
    // Histogram
    HistogramBin,
    // Municipalities
    MunicipalitySummary,
    // Input records
    PatientRecord,
    // Temporal
    TemporalPoint, TemporalSeries,
};

/// Response for a processed dataset upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Identifier assigned to the processed dataset
    pub dataset_id: Uuid,
    /// SHA-256 checksum of the uploaded batch
    pub checksum: String,
    /// Number of records in the batch
    pub record_count: usize,
    /// Message about the operation
    pub message: String,
}

/// Query parameters for the comparison endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ComparisonQuery {
    /// Maximum number of rows (default: 10)
    #[serde(default)]
    pub limit: Option<usize>,
    /// Ranking key (default: patient_count)
    #[serde(default)]
    pub sort_key: Option<ComparisonSortKey>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Whether a dataset is currently loaded
    pub dataset_loaded: bool,
}

/// Lightweight description of the currently loaded dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfo {
    pub dataset_id: Uuid,
    pub checksum: String,
    pub ingested_at: DateTime<Utc>,
    pub record_count: usize,
}
