//! Single-slot store for the last successfully processed batch.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::models::PatientRecord;

use super::processor::{process_records, AggregateBundle, ProcessingError};

/// Holds the current dataset's aggregates behind a read-write lock.
///
/// One writer replaces the slot wholesale after a successful processing
/// call; readers answer follow-up queries (temporal series for a city,
/// comparison view, export) from the installed bundle without reprocessing.
/// A failed processing call never touches the slot, so previously computed
/// aggregates stay valid.
#[derive(Clone, Default)]
pub struct DatasetStore {
    slot: Arc<RwLock<Option<Arc<AggregateBundle>>>>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a batch and, on success, atomically install the new bundle.
    pub fn process_and_install(
        &self,
        records: Vec<PatientRecord>,
    ) -> Result<Arc<AggregateBundle>, ProcessingError> {
        let bundle = Arc::new(process_records(records)?);
        *self.slot.write() = Some(Arc::clone(&bundle));
        Ok(bundle)
    }

    /// The currently installed bundle, if any batch has been processed.
    pub fn current(&self) -> Option<Arc<AggregateBundle>> {
        self.slot.read().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.read().is_some()
    }
}
