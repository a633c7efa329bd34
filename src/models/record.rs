//! Patient record input type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::classify::{is_valid_rdw, Sex};

/// One patient observation as uploaded by the ingestion layer.
///
/// Every field except `patient_id` is optional on the wire: the engine treats
/// missing nested fields as "field absent" and applies per-field exclusion
/// rules instead of failing. A record with no city still counts toward the
/// global patient total; a record with a non-positive RDW never contributes
/// to any RDW-based computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Opaque patient identifier.
    #[serde(default)]
    pub patient_id: String,
    /// Calendar date of sample collection (ISO `YYYY-MM-DD`).
    #[serde(default)]
    pub collection_date: Option<NaiveDate>,
    /// Patient age in years. Zero or negative is treated as unknown.
    #[serde(default)]
    pub age: Option<i64>,
    /// Patient sex wire value (`M` / `F`).
    #[serde(default)]
    pub sex: Option<String>,
    /// Municipality name.
    #[serde(default)]
    pub city: Option<String>,
    /// Neighborhood, informational only.
    #[serde(default)]
    pub neighborhood: Option<String>,
    /// RDW-CV in percent. Non-positive values are invalid measurements.
    #[serde(default)]
    pub rdw_percent: Option<f64>,
}

impl PatientRecord {
    /// The RDW value if present and strictly positive.
    pub fn valid_rdw(&self) -> Option<f64> {
        self.rdw_percent.filter(|v| is_valid_rdw(*v))
    }

    /// The municipality name if present and non-empty.
    pub fn city_name(&self) -> Option<&str> {
        self.city.as_deref().filter(|c| !c.is_empty())
    }

    /// The age if known (strictly positive). Zero and negative ages follow
    /// the same exclusion policy as absent ages.
    pub fn known_age(&self) -> Option<i64> {
        self.age.filter(|a| *a > 0)
    }

    /// The recognized sex category, if any.
    pub fn known_sex(&self) -> Option<Sex> {
        self.sex.as_deref().and_then(Sex::parse)
    }
}
