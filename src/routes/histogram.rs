use serde::{Deserialize, Serialize};

// =========================================================
// RDW histogram types
// =========================================================

/// Lower edge of the histogram range, in percent.
pub const HISTOGRAM_MIN: f64 = 10.0;

/// Upper edge of the histogram range (exclusive), in percent.
pub const HISTOGRAM_MAX: f64 = 20.0;

/// Width of each histogram bin, in percent.
pub const BIN_WIDTH: f64 = 0.5;

/// Number of bins covering `[HISTOGRAM_MIN, HISTOGRAM_MAX)`.
pub const BIN_COUNT: usize = 20;

/// One half-open bin `[lo, lo + 0.5)` of the global RDW distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Display label, e.g. `"12.5-13.0%"`.
    pub range: String,
    pub count: usize,
    /// Share of all globally valid RDW values, in `[0, 100]`.
    pub percentage: f64,
}
