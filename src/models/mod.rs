//! Domain model for patient hematology records.
//!
//! This module contains the input record type and the pure classification
//! helpers (age-group bucketing, RDW severity, sex labels) used by the
//! aggregation services.

pub mod classify;
pub mod record;

pub use classify::{
    classify_age_group, classify_rdw_status, is_valid_rdw, AgeGroup, InvalidAgeError, RdwStatus,
    Sex, ELEVATED_RDW_THRESHOLD, HIGH_RDW_THRESHOLD,
};
pub use record::PatientRecord;
