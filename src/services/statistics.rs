use std::collections::HashSet;

use crate::api::AggregateStatistics;
use crate::models::{PatientRecord, ELEVATED_RDW_THRESHOLD};

/// Compute global statistics over one record batch.
///
/// Single pass, O(n). Records with a non-positive RDW still count toward
/// `total_patients` but never feed the average or the elevated count.
pub fn compute_statistics(records: &[PatientRecord]) -> AggregateStatistics {
    let total_patients = records.len();

    let mut valid_count = 0usize;
    let mut rdw_sum = 0.0f64;
    let mut elevated_rdw_count = 0usize;
    let mut cities: HashSet<&str> = HashSet::new();

    for record in records {
        if let Some(rdw) = record.valid_rdw() {
            valid_count += 1;
            rdw_sum += rdw;
            if rdw > ELEVATED_RDW_THRESHOLD {
                elevated_rdw_count += 1;
            }
        }
        if let Some(city) = record.city_name() {
            cities.insert(city);
        }
    }

    let avg_rdw = if valid_count > 0 {
        Some(rdw_sum / valid_count as f64)
    } else {
        None
    };

    AggregateStatistics {
        total_patients,
        avg_rdw,
        elevated_rdw_count,
        active_cities: cities.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(city: Option<&str>, rdw: Option<f64>) -> PatientRecord {
        PatientRecord {
            patient_id: "PID-1".to_string(),
            collection_date: None,
            age: None,
            sex: None,
            city: city.map(String::from),
            neighborhood: None,
            rdw_percent: rdw,
        }
    }

    #[test]
    fn test_empty_batch() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats.total_patients, 0);
        assert_eq!(stats.avg_rdw, None);
        assert_eq!(stats.elevated_rdw_count, 0);
        assert_eq!(stats.active_cities, 0);
    }

    #[test]
    fn test_basic_statistics() {
        let records = vec![
            record(Some("Goiânia"), Some(15.0)),
            record(Some("Anápolis"), Some(13.0)),
            record(Some("Goiânia"), Some(16.5)),
        ];
        let stats = compute_statistics(&records);
        assert_eq!(stats.total_patients, 3);
        assert!((stats.avg_rdw.unwrap() - 14.833333333333334).abs() < 1e-12);
        assert_eq!(stats.elevated_rdw_count, 2);
        assert_eq!(stats.active_cities, 2);
    }

    #[test]
    fn test_invalid_rdw_counts_toward_total_only() {
        let records = vec![
            record(Some("Goiânia"), Some(0.0)),
            record(Some("Goiânia"), None),
            record(Some("Goiânia"), Some(14.0)),
        ];
        let stats = compute_statistics(&records);
        assert_eq!(stats.total_patients, 3);
        assert_eq!(stats.avg_rdw, Some(14.0));
        assert_eq!(stats.elevated_rdw_count, 0);
    }

    #[test]
    fn test_no_valid_rdw_yields_none_average() {
        let records = vec![record(Some("Goiânia"), Some(-2.0)), record(None, None)];
        let stats = compute_statistics(&records);
        assert_eq!(stats.avg_rdw, None);
        assert_eq!(stats.elevated_rdw_count, 0);
    }

    #[test]
    fn test_missing_city_excluded_from_active_cities() {
        let records = vec![
            record(None, Some(13.0)),
            record(Some(""), Some(13.0)),
            record(Some("Rio Verde"), Some(13.0)),
        ];
        let stats = compute_statistics(&records);
        assert_eq!(stats.total_patients, 3);
        assert_eq!(stats.active_cities, 1);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // Exactly 14.5 is not elevated.
        let records = vec![record(Some("Goiânia"), Some(14.5))];
        let stats = compute_statistics(&records);
        assert_eq!(stats.elevated_rdw_count, 0);
    }
}
