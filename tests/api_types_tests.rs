//! Serialization-contract tests for the public DTO types.

use std::collections::BTreeMap;

use sentinela_rdw::api::{
    AggregateStatistics, ComparisonEntry, ComparisonSortKey, DemographicBucket, HistogramBin,
    MunicipalitySummary, PatientRecord, RdwStatus, TemporalPoint,
};

#[test]
fn test_patient_record_wire_names() {
    let json = r#"{
        "patientId": "PID-1",
        "collectionDate": "2024-05-20",
        "age": 31,
        "sex": "M",
        "city": "Goiânia",
        "neighborhood": "Setor Bueno",
        "rdwPercent": 12.9
    }"#;
    let record: PatientRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.patient_id, "PID-1");
    assert_eq!(record.rdw_percent, Some(12.9));

    let out = serde_json::to_value(&record).unwrap();
    assert!(out.get("patientId").is_some());
    assert!(out.get("patient_id").is_none());
}

#[test]
fn test_patient_record_tolerates_unknown_and_missing_fields() {
    let json = r#"{"patientId": "PID-2", "extraField": 42}"#;
    let record: PatientRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.city, None);
    assert_eq!(record.rdw_percent, None);
}

#[test]
fn test_statistics_null_average() {
    let stats = AggregateStatistics {
        total_patients: 5,
        avg_rdw: None,
        elevated_rdw_count: 0,
        active_cities: 2,
    };
    let value = serde_json::to_value(&stats).unwrap();
    assert!(value["avg_rdw"].is_null());
}

#[test]
fn test_municipality_summary_shape() {
    let summary = MunicipalitySummary {
        name: "Anápolis".to_string(),
        patient_count: 3,
        avg_rdw: Some(14.6),
        elevated_rdw_percentage: 33.3,
        min_rdw: Some(12.4),
        max_rdw: Some(16.8),
        status: RdwStatus::Elevated,
        age_group_counts: BTreeMap::from([("18-29".to_string(), 1), ("60-74".to_string(), 2)]),
        sex_counts: BTreeMap::from([("Feminino".to_string(), 2), ("Masculino".to_string(), 1)]),
    };
    let value = serde_json::to_value(&summary).unwrap();
    assert_eq!(value["status"], "elevated");
    assert_eq!(value["age_group_counts"]["18-29"], 1);
    assert_eq!(value["sex_counts"]["Masculino"], 1);
}

#[test]
fn test_comparison_entry_and_sort_key() {
    let entry = ComparisonEntry {
        name: "Goiânia".to_string(),
        avg_rdw: Some(14.0),
        patient_count: 12,
        elevated_percentage: 25.0,
        status: RdwStatus::Normal,
    };
    let json = serde_json::to_string(&entry).unwrap();
    assert!(json.contains("\"patient_count\":12"));

    assert_eq!(
        serde_json::to_string(&ComparisonSortKey::ElevatedPercentage).unwrap(),
        "\"elevated_percentage\""
    );
}

#[test]
fn test_temporal_point_date_format() {
    let point = TemporalPoint {
        date: "2024-02-29".parse().unwrap(),
        mean_rdw: 14.25,
    };
    let value = serde_json::to_value(&point).unwrap();
    assert_eq!(value["date"], "2024-02-29");
}

#[test]
fn test_demographic_bucket_shape() {
    let bucket = DemographicBucket {
        group: "Feminino".to_string(),
        count: 7,
        avg_rdw: 13.5,
    };
    let value = serde_json::to_value(&bucket).unwrap();
    assert_eq!(value["group"], "Feminino");
    assert_eq!(value["count"], 7);
}

#[test]
fn test_histogram_bin_label_format() {
    let bin = HistogramBin {
        range: "10.0-10.5%".to_string(),
        count: 0,
        percentage: 0.0,
    };
    let value = serde_json::to_value(&bin).unwrap();
    assert_eq!(value["range"], "10.0-10.5%");
}
