//! Service layer: the aggregation engine.
//!
//! Each module computes one derived view of a patient record batch. The
//! processor orchestrates a full batch into an [`AggregateBundle`]; the
//! dataset store keeps the last good bundle for follow-up queries.

pub mod dataset;
pub mod demographics;
pub mod histogram;
pub mod municipalities;
pub mod processor;
pub mod statistics;
pub mod temporal;

pub use dataset::DatasetStore;
pub use demographics::aggregate_demographics;
pub use histogram::build_histogram;
pub use municipalities::{aggregate_municipalities, comparison_view, DEFAULT_COMPARISON_LIMIT};
pub use processor::{calculate_checksum, process_records, AggregateBundle, ProcessingError};
pub use statistics::compute_statistics;
pub use temporal::{aggregate_temporal, series_for_city};
