use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::api::{TemporalPoint, TemporalSeries};
use crate::models::PatientRecord;

/// Aggregate records into daily per-city mean RDW.
///
/// Only records with both a collection date and a valid RDW contribute. The
/// source keys by city name; records without a city are dropped from the
/// temporal view (they carry no geographic signal for the line chart).
pub fn aggregate_temporal(records: &[PatientRecord]) -> TemporalSeries {
    let mut buckets: BTreeMap<NaiveDate, BTreeMap<String, (f64, usize)>> = BTreeMap::new();

    for record in records {
        let (Some(date), Some(rdw), Some(city)) =
            (record.collection_date, record.valid_rdw(), record.city_name())
        else {
            continue;
        };
        let (sum, count) = buckets
            .entry(date)
            .or_default()
            .entry(city.to_string())
            .or_insert((0.0, 0));
        *sum += rdw;
        *count += 1;
    }

    buckets
        .into_iter()
        .map(|(date, cities)| {
            let means = cities
                .into_iter()
                .map(|(city, (sum, count))| (city, sum / count as f64))
                .collect();
            (date, means)
        })
        .collect()
}

/// Extract the date-ordered `(date, mean)` sequence for one city.
///
/// Dates where the city has no entry are skipped, never zero-filled or
/// interpolated.
pub fn series_for_city(series: &TemporalSeries, city: &str) -> Vec<TemporalPoint> {
    series
        .iter()
        .filter_map(|(date, cities)| {
            cities.get(city).map(|mean| TemporalPoint {
                date: *date,
                mean_rdw: *mean,
            })
        })
        .collect()
}
