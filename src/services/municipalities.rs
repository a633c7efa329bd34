use std::collections::{BTreeMap, HashMap};

use crate::api::{ComparisonEntry, ComparisonSortKey, MunicipalitySummary};
use crate::models::{classify_rdw_status, PatientRecord, ELEVATED_RDW_THRESHOLD};

/// Default number of rows in the city comparison view.
pub const DEFAULT_COMPARISON_LIMIT: usize = 10;

/// Per-city accumulator filled during the grouping pass.
#[derive(Debug, Default)]
struct MunicipalityAccumulator {
    patient_count: usize,
    rdw_values: Vec<f64>,
    age_group_counts: BTreeMap<String, usize>,
    sex_counts: BTreeMap<String, usize>,
}

impl MunicipalityAccumulator {
    fn observe(&mut self, record: &PatientRecord) {
        self.patient_count += 1;

        if let Some(rdw) = record.valid_rdw() {
            self.rdw_values.push(rdw);
        }

        if let Some(age) = record.known_age() {
            // known_age is strictly positive, so classification cannot fail
            if let Ok(group) = crate::models::classify_age_group(age) {
                *self.age_group_counts.entry(group.label().to_string()).or_insert(0) += 1;
            }
        }

        if let Some(sex) = record.known_sex() {
            *self.sex_counts.entry(sex.label().to_string()).or_insert(0) += 1;
        }
    }

    fn into_summary(self, name: String) -> MunicipalitySummary {
        let valid = &self.rdw_values;
        let (avg_rdw, elevated_rdw_percentage, min_rdw, max_rdw) = if valid.is_empty() {
            (None, 0.0, None, None)
        } else {
            let sum: f64 = valid.iter().sum();
            let avg = sum / valid.len() as f64;
            let elevated = valid.iter().filter(|v| **v > ELEVATED_RDW_THRESHOLD).count();
            let pct = (elevated as f64 / valid.len() as f64) * 100.0;
            let min = valid.iter().copied().fold(f64::INFINITY, f64::min);
            let max = valid.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (Some(avg), pct, Some(min), Some(max))
        };

        // A city with no valid measurement classifies as normal, matching the
        // zero-average sentinel.
        let status = classify_rdw_status(avg_rdw.unwrap_or(0.0));

        MunicipalitySummary {
            name,
            patient_count: self.patient_count,
            avg_rdw,
            elevated_rdw_percentage,
            min_rdw,
            max_rdw,
            status,
            age_group_counts: self.age_group_counts,
            sex_counts: self.sex_counts,
        }
    }
}

/// Group records by municipality and compute each city's summary.
///
/// Records with no city are skipped here (they still count in the global
/// statistics). Output order is the first-occurrence order of each city in
/// the input batch.
pub fn aggregate_municipalities(records: &[PatientRecord]) -> Vec<MunicipalitySummary> {
    let mut order: Vec<String> = Vec::new();
    let mut accumulators: HashMap<String, MunicipalityAccumulator> = HashMap::new();

    for record in records {
        let Some(city) = record.city_name() else {
            continue;
        };
        let accumulator = accumulators.entry(city.to_string()).or_insert_with(|| {
            order.push(city.to_string());
            MunicipalityAccumulator::default()
        });
        accumulator.observe(record);
    }

    order
        .into_iter()
        .map(|name| {
            let accumulator = accumulators
                .remove(&name)
                .unwrap_or_default();
            accumulator.into_summary(name)
        })
        .collect()
}

/// Ranked projection of city summaries for the comparison chart.
///
/// Sorts descending by the requested key and truncates to `limit` rows.
/// Cities with no valid RDW sort below any city with a value when ranking by
/// average.
pub fn comparison_view(
    summaries: &[MunicipalitySummary],
    limit: usize,
    sort_key: ComparisonSortKey,
) -> Vec<ComparisonEntry> {
    let mut entries: Vec<ComparisonEntry> = summaries
        .iter()
        .map(|s| ComparisonEntry {
            name: s.name.clone(),
            avg_rdw: s.avg_rdw,
            patient_count: s.patient_count,
            elevated_percentage: s.elevated_rdw_percentage,
            status: s.status,
        })
        .collect();

    entries.sort_by(|a, b| match sort_key {
        ComparisonSortKey::PatientCount => b.patient_count.cmp(&a.patient_count),
        ComparisonSortKey::AvgRdw => b
            .avg_rdw
            .unwrap_or(f64::NEG_INFINITY)
            .partial_cmp(&a.avg_rdw.unwrap_or(f64::NEG_INFINITY))
            .unwrap_or(std::cmp::Ordering::Equal),
        ComparisonSortKey::ElevatedPercentage => b
            .elevated_percentage
            .partial_cmp(&a.elevated_percentage)
            .unwrap_or(std::cmp::Ordering::Equal),
    });

    entries.truncate(limit);
    entries
}
