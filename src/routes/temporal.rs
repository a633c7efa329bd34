use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =========================================================
// Temporal series types
// =========================================================

/// Daily per-city mean RDW: date -> city -> mean of valid RDW values.
///
/// Combinations with no valid-RDW record are absent, never zero-filled.
/// `BTreeMap` keeps dates in calendar order for serialization.
pub type TemporalSeries = BTreeMap<NaiveDate, BTreeMap<String, f64>>;

/// One point of a city's temporal evolution line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalPoint {
    pub date: NaiveDate,
    pub mean_rdw: f64,
}
