//! Public API surface for the aggregation backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::demographics::DemographicBucket;
pub use crate::routes::demographics::DemographicDistributions;
pub use crate::routes::demographics::DemographicKind;
pub use crate::routes::export::ExportBundle;
pub use crate::routes::histogram::HistogramBin;
pub use crate::routes::municipalities::ComparisonEntry;
pub use crate::routes::municipalities::ComparisonSortKey;
pub use crate::routes::municipalities::MunicipalitySummary;
pub use crate::routes::statistics::AggregateStatistics;
pub use crate::routes::temporal::TemporalPoint;
pub use crate::routes::temporal::TemporalSeries;

pub use crate::models::classify::{
    AgeGroup, InvalidAgeError, RdwStatus, Sex, ELEVATED_RDW_THRESHOLD, HIGH_RDW_THRESHOLD,
};
pub use crate::models::record::PatientRecord;
