use crate::api::HistogramBin;
use crate::models::PatientRecord;
use crate::routes::histogram::{BIN_COUNT, BIN_WIDTH, HISTOGRAM_MIN};

/// Build the global RDW frequency histogram.
///
/// Twenty half-open bins of width 0.5 cover `[10.0, 20.0)`. Valid RDW
/// values outside that range are excluded from every bin (not clamped), but
/// percentages are still relative to all valid values.
pub fn build_histogram(records: &[PatientRecord]) -> Vec<HistogramBin> {
    let valid: Vec<f64> = records.iter().filter_map(|r| r.valid_rdw()).collect();
    let total = valid.len();

    (0..BIN_COUNT)
        .map(|i| {
            let lo = HISTOGRAM_MIN + i as f64 * BIN_WIDTH;
            let hi = lo + BIN_WIDTH;
            let count = valid.iter().filter(|v| **v >= lo && **v < hi).count();
            let percentage = if total > 0 {
                (count as f64 / total as f64) * 100.0
            } else {
                0.0
            };
            HistogramBin {
                range: format!("{:.1}-{:.1}%", lo, hi),
                count,
                percentage,
            }
        })
        .collect()
}
