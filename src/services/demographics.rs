use std::collections::HashMap;

use crate::api::{DemographicBucket, DemographicDistributions};
use crate::models::{AgeGroup, PatientRecord, Sex};

/// Running count and RDW sum for one bucket. Projected into a
/// [`DemographicBucket`] after the accumulation pass so consumers never see
/// the raw sum.
#[derive(Debug, Clone, Copy, Default)]
struct BucketAccumulator {
    count: usize,
    rdw_sum: f64,
}

impl BucketAccumulator {
    fn observe(&mut self, rdw: f64) {
        self.count += 1;
        self.rdw_sum += rdw;
    }

    fn project(self, group: &str) -> DemographicBucket {
        DemographicBucket {
            group: group.to_string(),
            count: self.count,
            // count > 0 by construction: buckets only exist once observed
            avg_rdw: self.rdw_sum / self.count as f64,
        }
    }
}

/// Aggregate records into age-group and sex buckets.
///
/// A record contributes to a bucket only when its RDW is valid and the
/// bucketing field is known (positive age, recognized sex). Age buckets come
/// out in the fixed bucket order, sex buckets as `Masculino` then `Feminino`.
pub fn aggregate_demographics(records: &[PatientRecord]) -> DemographicDistributions {
    let mut age_buckets: HashMap<AgeGroup, BucketAccumulator> = HashMap::new();
    let mut sex_buckets: HashMap<Sex, BucketAccumulator> = HashMap::new();

    for record in records {
        let Some(rdw) = record.valid_rdw() else {
            continue;
        };

        if let Some(age) = record.known_age() {
            // known_age is strictly positive, classification cannot fail
            if let Ok(group) = crate::models::classify_age_group(age) {
                age_buckets.entry(group).or_default().observe(rdw);
            }
        }

        if let Some(sex) = record.known_sex() {
            sex_buckets.entry(sex).or_default().observe(rdw);
        }
    }

    let age_groups = AgeGroup::ALL
        .iter()
        .filter_map(|group| {
            age_buckets
                .get(group)
                .map(|acc| acc.project(group.label()))
        })
        .collect();

    let sex = [Sex::Male, Sex::Female]
        .iter()
        .filter_map(|s| sex_buckets.get(s).map(|acc| acc.project(s.label())))
        .collect();

    DemographicDistributions { age_groups, sex }
}
